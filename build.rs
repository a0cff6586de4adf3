use std::process::Command;

// Embed the commit the binary was built from, shown by `timed version`.
fn main() {
    let hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=TIMED_BUILD_HASH={}", hash);
    println!("cargo:rerun-if-changed=.git/HEAD");
}

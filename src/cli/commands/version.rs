use crate::errors::AppResult;

pub const BUILD_HASH: &str = env!("TIMED_BUILD_HASH");

/// `<semver> (<os>/<arch> - <build>)`
pub fn version_line() -> String {
    format!(
        "{} ({}/{} - {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH,
        BUILD_HASH
    )
}

pub fn handle() -> AppResult<()> {
    println!("{}", version_line());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_line_has_all_parts() {
        let line = version_line();
        assert!(line.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(line.contains(std::env::consts::OS));
        assert!(line.contains(std::env::consts::ARCH));
        assert!(line.ends_with(&format!("- {})", BUILD_HASH)));
    }
}

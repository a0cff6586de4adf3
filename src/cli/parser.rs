use clap::{Args, Parser, Subcommand};

const LONG_ABOUT: &str = r#"The timed cli helps to manage working times.

Without a subcommand the given day is created or updated: only the
flags you pass change an existing entry. Afterwards the time worked
today and the total overtime are reported.
  _______
 /  12   \
|    |    |
|9   |   3|
|     \   |
|         |
 \___6___/
"#;

/// Command-line interface definition for timed
#[derive(Parser, Debug)]
#[command(
    name = "timed",
    version = env!("CARGO_PKG_VERSION"),
    about = "Manages working times",
    long_about = LONG_ABOUT
)]
pub struct Cli {
    /// Override database path (useful for tests or a custom DB)
    #[arg(global = true, long = "db", value_name = "PATH")]
    pub db: Option<String>,

    #[command(flatten)]
    pub track: TrackArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Flags of the default command: create or update one working day.
#[derive(Args, Debug, Clone, Default)]
pub struct TrackArgs {
    /// Date to record (YYYY-MM-DD, e.g. 2019-03-28). Default: today
    #[arg(short = 'd', long = "date", value_name = "DATE")]
    pub date: Option<String>,

    /// Start time (HH:MM, e.g. 08:00). Default for a new day: now
    #[arg(short = 's', long = "start", value_name = "TIME")]
    pub start: Option<String>,

    /// End time (HH:MM, e.g. 16:30). Default for a new day: now
    #[arg(short = 'e', long = "end", value_name = "TIME")]
    pub end: Option<String>,

    /// Duration of the break in minutes (-1 = not set). Default for a new day: 0
    #[arg(
        short = 'b',
        long = "break",
        value_name = "MINUTES",
        allow_negative_numbers = true
    )]
    pub brk: Option<i64>,

    /// Note for the day. Passing an empty string clears an existing note
    #[arg(short = 'n', long = "note")]
    pub note: Option<String>,
}

impl TrackArgs {
    /// True when none of the day flags was given.
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.brk.is_none()
            && self.note.is_none()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List working days for a given range. By default it looks 30 days back
    List {
        /// First day of the selection (YYYY-MM-DD). Default: today minus 30 days
        #[arg(short = 's', long = "start", value_name = "DATE")]
        start: Option<String>,

        /// Last day of the selection (YYYY-MM-DD). Default: today
        #[arg(short = 'e', long = "end", value_name = "DATE")]
        end: Option<String>,
    },

    /// Delete the working day recorded for DATE forever
    Delete {
        /// Date (YYYY-MM-DD) of the working day to remove
        date: String,
    },

    /// Print version, platform and build of timed
    Version,

    /// Create the configuration file and initialize the database
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Show or edit the configuration file
    Config {
        /// Print the effective configuration
        #[arg(long = "print")]
        print_config: bool,

        /// Edit the configuration file (default editor: $EDITOR, or nano/notepad)
        #[arg(long = "edit")]
        edit_config: bool,

        /// Editor to use instead of $EDITOR/$VISUAL
        #[arg(long = "editor", requires = "edit_config")]
        editor: Option<String>,
    },
}

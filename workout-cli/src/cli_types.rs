//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use workout_import::{DEFAULT_IMAGE_BASE_URL, LinkFailurePolicy};

#[derive(Parser)]
#[command(name = "workout")]
#[command(about = "Import the free-exercise-db catalog into the exercise database", long_about = None)]
pub(crate) struct Cli {
    /// free-exercise-db JSON export to import
    #[arg(default_value = "data/free-exercise-db.json")]
    pub input: PathBuf,

    /// SQLite database to import into (created if missing)
    #[arg(long, default_value = "workout.db")]
    pub db: PathBuf,

    /// Base URL prefixed to each exercise's first image path
    #[arg(long, default_value = DEFAULT_IMAGE_BASE_URL)]
    pub image_base_url: String,

    /// What to do with an exercise when one of its attribute links fails
    #[arg(long, value_enum, default_value_t = OnLinkFailure::Rollback)]
    pub on_link_failure: OnLinkFailure,

    /// Log a progress line every N imported exercises (0 disables)
    #[arg(long, default_value_t = 50)]
    pub progress_every: u64,

    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long)]
    pub logfile: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OnLinkFailure {
    /// Keep the exercise and whatever links were created
    Keep,
    /// Roll back the whole exercise
    Rollback,
}

impl From<OnLinkFailure> for LinkFailurePolicy {
    fn from(value: OnLinkFailure) -> Self {
        match value {
            OnLinkFailure::Keep => LinkFailurePolicy::KeepPartial,
            OnLinkFailure::Rollback => LinkFailurePolicy::Rollback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["workout"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("data/free-exercise-db.json"));
        assert_eq!(cli.db, PathBuf::from("workout.db"));
        assert_eq!(cli.image_base_url, DEFAULT_IMAGE_BASE_URL);
        assert_eq!(cli.progress_every, 50);
        assert_eq!(
            LinkFailurePolicy::from(cli.on_link_failure),
            LinkFailurePolicy::Rollback
        );
    }

    #[test]
    fn first_argument_is_input() {
        let cli = Cli::try_parse_from([
            "workout",
            "exercises.json",
            "--on-link-failure",
            "keep",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("exercises.json"));
        assert_eq!(
            LinkFailurePolicy::from(cli.on_link_failure),
            LinkFailurePolicy::KeepPartial
        );
    }
}

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use workout_import::{ImportOptions, ImportProgress, ImportStats, RecordOutcome};

use crate::cli_types::Cli;
use crate::{CliError, log_blank};

/// Import the source file into the database and print a summary.
///
/// Only a missing/unreadable source or a database that cannot be opened is
/// an error here; per-record failures are reported in the summary.
pub(crate) fn run_import(cli: &Cli) -> Result<(), CliError> {
    log::info!(
        "{}",
        "Importing exercises from free-exercise-db".if_supports_color(Stdout, |t| t.bold()),
    );

    let records = workout_catalog::load_source_records(&cli.input)?;
    log::info!("  Source:   {}", cli.input.display());
    log::info!("  Records:  {}", records.len());
    log::info!("  Database: {}", cli.db.display());
    log_blank();

    let conn = workout_db::open_database(&cli.db).map_err(|e| {
        CliError::database(format!(
            "Failed to open database at {}: {}",
            cli.db.display(),
            e
        ))
    })?;

    let options = ImportOptions {
        image_base_url: cli.image_base_url.clone(),
        link_failure_policy: cli.on_link_failure.into(),
    };
    let progress = CliImportProgress {
        every: cli.progress_every,
    };
    let stats = workout_import::import_all(&conn, &records, &options, Some(&progress));

    let source_name = cli.input.display().to_string();
    if let Err(e) = workout_import::log_import(&conn, &source_name, &stats) {
        log::warn!("Failed to record import log: {}", e);
    }

    print_summary(&stats);

    let totals = workout_db::catalog_stats(&conn)
        .map_err(|e| CliError::database(format!("Failed to count catalog rows: {}", e)))?;
    log_blank();
    log::info!("{}", "Database totals".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Exercises:        {:>8}", totals.exercises);
    log::info!("  Attribute links:  {:>8}", totals.attribute_links);
    log::info!("  Attribute values: {:>8}", totals.attribute_values);
    log_blank();
    log::info!(
        "{} Import completed",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
    );

    Ok(())
}

fn print_summary(stats: &ImportStats) {
    log_blank();
    log::info!("{}", "Summary".if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "  {} Imported:                {:>6}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        stats.imported,
    );
    log::info!(
        "  {} Skipped (already exist): {:>6}",
        "\u{21B7}".if_supports_color(Stdout, |t| t.dimmed()),
        stats.skipped,
    );
    log::info!(
        "  {} Errors:                  {:>6}",
        "\u{2718}".if_supports_color(Stdout, |t| t.red()),
        stats.errors,
    );
    // `import_all` already logged each failure at error level.
    for failure in &stats.failures {
        log::log!(FAILURE_DETAIL_LEVEL, "    {}: {}", failure.name, failure.reason);
    }
}

/// Level for the per-failure lines repeated under the summary.
const FAILURE_DETAIL_LEVEL: log::Level = log::Level::Debug;

/// CLI progress reporter for exercise imports.
struct CliImportProgress {
    every: u64,
}

impl ImportProgress for CliImportProgress {
    fn on_record(
        &self,
        _current: usize,
        _total: usize,
        outcome: &RecordOutcome,
        stats: &ImportStats,
    ) {
        if stats.is_progress_point(outcome, self.every) {
            log::info!(
                "  {} Imported {} exercises...",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                stats.imported,
            );
        }
    }

    fn on_phase(&self, message: &str) {
        log::debug!("{}", message);
    }

    fn on_complete(&self, message: &str) {
        log::debug!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::level_filter;

    #[test]
    fn failure_details_hidden_unless_verbose() {
        assert!(FAILURE_DETAIL_LEVEL > level_filter(true, false));
        assert!(FAILURE_DETAIL_LEVEL > level_filter(false, false));
        assert!(FAILURE_DETAIL_LEVEL <= level_filter(false, true));
    }
}

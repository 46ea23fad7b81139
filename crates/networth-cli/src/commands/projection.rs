use std::path::PathBuf;

use chrono::Local;
use clap::Subcommand;
use networth_core::{Config, CountdownFormatter, ProjectionResult};

use super::countdown::run_live;

#[derive(Subcommand)]
pub enum ProjectionAction {
    /// Print the summary and monthly table of a projection result
    Show {
        /// JSON file with the result of a projection run
        file: PathBuf,
        /// Table rows to print (defaults to projection.table_rows)
        #[arg(long)]
        rows: Option<usize>,
    },
    /// Count down to the projected target date of a projection result
    Countdown {
        file: PathBuf,
        /// Emit JSON events instead of text
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ProjectionAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    match action {
        ProjectionAction::Show { file, rows } => {
            let result = ProjectionResult::from_file(&file)?;
            let currency = &config.projection.currency_symbol;
            for line in result.summary(currency) {
                println!("{line}");
            }
            println!();
            print!(
                "{}",
                result.render_table(rows.unwrap_or(config.projection.table_rows), currency)
            );
        }
        ProjectionAction::Countdown { file, json } => {
            let result = ProjectionResult::from_file(&file)?;
            match result.countdown_target(&Local) {
                Some(target) => {
                    let formatter = CountdownFormatter::from_config(&config.countdown);
                    run_live(target, formatter, json)?;
                }
                None => {
                    tracing::warn!("projection does not reach its target; no countdown");
                    println!("Projected target date: Not reached.");
                }
            }
        }
    }
    Ok(())
}

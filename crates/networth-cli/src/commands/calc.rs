use chrono::Local;
use clap::Args;
use networth_core::{add_calendar_months, diff_breakdown, parse_target, Config, CoreError, CountdownFormatter};

#[derive(Args)]
pub struct DiffArgs {
    /// Start timestamp (local time)
    #[arg(long)]
    pub from: String,
    /// End timestamp (local time)
    #[arg(long)]
    pub to: String,
    /// Print the breakdown as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct AddMonthsArgs {
    /// Base timestamp (local time)
    #[arg(long)]
    pub date: String,
    /// Months to add; negative values step backwards
    #[arg(long, allow_hyphen_values = true)]
    pub months: i32,
}

pub fn run_diff(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let from = parse_target(&args.from, &Local).map_err(CoreError::from)?;
    let to = parse_target(&args.to, &Local).map_err(CoreError::from)?;
    let breakdown = diff_breakdown(&from, &to);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        let config = Config::load_or_default();
        let formatter = CountdownFormatter::from_config(&config.countdown);
        println!("{}", formatter.format_breakdown(&breakdown));
    }
    Ok(())
}

pub fn run_add_months(args: AddMonthsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let base = parse_target(&args.date, &Local).map_err(CoreError::from)?;
    let shifted = add_calendar_months(&base, args.months).ok_or_else(|| {
        CoreError::Custom(format!("{} + {} months is out of range", args.date, args.months))
    })?;
    println!("{}", shifted.naive_local().format("%Y-%m-%dT%H:%M:%S"));
    Ok(())
}

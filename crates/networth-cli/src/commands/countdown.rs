use std::io::Write;
use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use clap::Args;
use networth_core::{
    parse_target, Clock, Config, CountdownEngine, CountdownFormatter, CountdownFrame,
    CountdownSession, DisplaySink, Event, SystemClock,
};

#[derive(Args)]
pub struct CountdownArgs {
    /// Target timestamp, e.g. 2031-05-01 or 2031-05-01T08:30:00 (local time)
    #[arg(long)]
    pub target: Option<String>,
    /// Emit JSON events instead of text
    #[arg(long)]
    pub json: bool,
    /// Print a single frame and exit
    #[arg(long)]
    pub once: bool,
}

/// Writes countdown frames to stdout.
pub struct TerminalSink {
    formatter: CountdownFormatter,
    json: bool,
}

impl TerminalSink {
    pub fn new(formatter: CountdownFormatter, json: bool) -> Self {
        Self { formatter, json }
    }
}

impl DisplaySink for TerminalSink {
    fn show(&self, frame: &CountdownFrame) {
        let mut out = std::io::stdout().lock();
        let written = if self.json {
            match serde_json::to_string(&Event::from_frame(frame, &self.formatter)) {
                Ok(line) => writeln!(out, "{line}"),
                Err(e) => {
                    tracing::warn!(%e, "failed to encode countdown event");
                    return;
                }
            }
        } else {
            match frame {
                CountdownFrame::Remaining(_) => {
                    write!(out, "\r\x1b[2K{}", self.formatter.format_frame(frame))
                }
                CountdownFrame::Reached => {
                    writeln!(out, "\r\x1b[2K{}", self.formatter.format_frame(frame))
                }
            }
        };
        if written.and_then(|_| out.flush()).is_err() {
            tracing::debug!("stdout closed; countdown frame dropped");
        }
    }
}

fn print_cleared(json: bool, reason: &str) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let event = Event::CountdownCleared {
            reason: reason.to_string(),
            at: Utc::now(),
        };
        println!("{}", serde_json::to_string(&event)?);
    } else {
        eprintln!("no active countdown: {reason}");
    }
    Ok(())
}

fn print_started(json: bool, target: &DateTime<Local>) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let event = Event::CountdownStarted {
            target: target.naive_local(),
            at: Utc::now(),
        };
        println!("{}", serde_json::to_string(&event)?);
    } else {
        println!("Counting down to {}", target.format("%Y-%m-%d %H:%M:%S"));
    }
    Ok(())
}

/// Run a live countdown to `target` until it is reached or Ctrl-C.
pub fn run_live(
    target: DateTime<Local>,
    formatter: CountdownFormatter,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    print_started(json, &target)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let interrupted = runtime.block_on(async {
        let sink: Arc<dyn DisplaySink> = Arc::new(TerminalSink::new(formatter, json));
        let clock: Arc<dyn Clock<Local>> = Arc::new(SystemClock);
        let mut session = CountdownSession::new(clock, &sink);
        session.start_at(target);

        let interrupted = tokio::select! {
            _ = session.wait() => false,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("interrupted");
                true
            }
        };
        session.stop();
        interrupted
    });

    // The reached frame ends its own line; an interrupted one does not.
    if interrupted && !json {
        println!();
    }
    Ok(())
}

pub fn run(args: CountdownArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let formatter = CountdownFormatter::from_config(&config.countdown);

    let now = SystemClock.now();
    let target = match args.target.as_deref().map(|t| parse_target(t, &Local)) {
        Some(Ok(target)) => target,
        Some(Err(e)) => return print_cleared(args.json, &e.to_string()),
        None => return print_cleared(args.json, "no target timestamp supplied"),
    };

    if args.once {
        let mut engine = CountdownEngine::with_target(target);
        if let Some(frame) = engine.tick(&now) {
            if args.json {
                println!("{}", serde_json::to_string(&Event::from_frame(&frame, &formatter))?);
            } else {
                println!("{}", formatter.format_frame(&frame));
            }
        }
        return Ok(());
    }

    run_live(target, formatter, args.json)
}

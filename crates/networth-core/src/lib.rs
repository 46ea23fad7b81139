//! # Net-worth Countdown Core Library
//!
//! Client-side logic for tracking the date a portfolio is projected to reach
//! its net-worth target. The projection itself is computed by the server;
//! this library reads its result and counts down to the projected date.
//!
//! ## Architecture
//!
//! - **Calendar**: pure month arithmetic and calendar-aware duration
//!   breakdowns on any `chrono` time zone
//! - **Countdown Engine**: a wall-clock-based state machine; the caller
//!   supplies `now` and asks when to tick next
//! - **Countdown Session**: a Tokio task that re-arms itself on every whole
//!   second and can be replaced or cancelled at any time
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`diff_breakdown`] / [`add_calendar_months`]: calendar math
//! - [`CountdownEngine`]: countdown state machine
//! - [`CountdownSession`]: scheduled countdown owned by a display
//! - [`ProjectionResult`]: the server's projection payload
//! - [`Config`]: application configuration management

pub mod calendar;
pub mod display;
pub mod error;
pub mod events;
pub mod projection;
pub mod storage;
pub mod timer;

pub use calendar::{add_calendar_months, diff_breakdown, parse_target, DurationBreakdown};
pub use display::{CountdownFormatter, CountdownFrame, CountdownStyle, DisplaySink};
pub use error::{ConfigError, CoreError, TargetError};
pub use events::Event;
pub use projection::ProjectionResult;
pub use storage::Config;
pub use timer::{Clock, CountdownEngine, CountdownSession, CountdownState, FixedClock, SystemClock};

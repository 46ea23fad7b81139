mod clock;
mod engine;
mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{CountdownEngine, CountdownState};
pub use session::CountdownSession;

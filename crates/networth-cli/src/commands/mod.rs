pub mod calc;
pub mod config;
pub mod countdown;
pub mod projection;

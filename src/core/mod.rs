//! Ledger operations, time source, and filesystem helpers shared by the CLI.

pub mod clock;
pub mod services;
pub mod utils;

pub use clock::{Clock, FixedClock, SystemClock};

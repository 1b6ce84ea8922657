//! Application constants and configuration

use std::time::Duration;

pub const APP_NAME: &str = "Kitchen Helper";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Period of every countdown timer's tick
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [800.0, 600.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [640.0, 480.0];

/// Log lines kept in the timer tab before the oldest are dropped
pub const TIMER_LOG_CAPACITY: usize = 500;

pub const INVALID_TIME_MESSAGE: &str =
    "Invalid time entered. Please enter positive values for hours, minutes, and seconds.";
pub const INVALID_NUMBER_MESSAGE: &str = "Please enter a valid number";

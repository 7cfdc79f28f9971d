//! Status snapshot shown by the status bar.

use chrono::NaiveTime;
use clap::ValueEnum;
use std::fmt;

/// Selectable chart window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TimeRange {
    /// Last hour.
    #[value(name = "1h")]
    OneHour,
    /// Last 24 hours.
    #[default]
    #[value(name = "24h")]
    OneDay,
    /// Last 7 days.
    #[value(name = "7d")]
    SevenDays,
    /// Last 30 days.
    #[value(name = "30d")]
    ThirtyDays,
}

impl TimeRange {
    /// Every range in display order.
    pub const ALL: [TimeRange; 4] = [
        TimeRange::OneHour,
        TimeRange::OneDay,
        TimeRange::SevenDays,
        TimeRange::ThirtyDays,
    ];

    /// Get the short label.
    pub fn label(self) -> &'static str {
        match self {
            TimeRange::OneHour => "1H",
            TimeRange::OneDay => "24H",
            TimeRange::SevenDays => "7D",
            TimeRange::ThirtyDays => "30D",
        }
    }

    /// Get the next range in the cycle.
    pub fn next(self) -> Self {
        match self {
            TimeRange::OneHour => TimeRange::OneDay,
            TimeRange::OneDay => TimeRange::SevenDays,
            TimeRange::SevenDays => TimeRange::ThirtyDays,
            TimeRange::ThirtyDays => TimeRange::OneHour,
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Connectivity, error and timing inputs for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusState {
    /// Time of the last successful update.
    pub last_update: NaiveTime,
    /// Whether the data source is reachable.
    pub connected: bool,
    /// Last data error, if any.
    pub last_error: Option<String>,
    /// Highlighted chart window.
    pub time_range: TimeRange,
    /// Transient message replacing the timestamp. Empty means none.
    ///
    /// Never cleared here; the owner decides when it expires.
    pub message: String,
}

impl StatusState {
    /// Create the initial state: connected, no error, 24H.
    pub fn new() -> Self {
        Self {
            last_update: NaiveTime::MIN,
            connected: true,
            last_error: None,
            time_range: TimeRange::default(),
            message: String::new(),
        }
    }

    /// Whether the data on screen can be trusted.
    ///
    /// A data error counts as disconnected even while the transport is up.
    pub fn is_healthy(&self) -> bool {
        self.connected && self.last_error.is_none()
    }
}

impl Default for StatusState {
    fn default() -> Self {
        Self::new()
    }
}

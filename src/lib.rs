//! Seasonal gardening tips.
//!
//! A month (by name or number) and a hemisphere resolve to one of four
//! seasons, which in turn select a tip from fixed, read-only tables.
//!
//! ```
//! use garden_advice::{Hemisphere, Month, Season, get_season, season_for};
//!
//! assert_eq!(get_season(Month::January, Hemisphere::Southern), Season::Summer);
//! assert_eq!(season_for(" MARCH ", "northern"), Ok(Season::Spring));
//! ```

mod clock;
mod consts;
mod prelude;
mod report;
mod resolver;
mod tables;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use report::Report;
pub use resolver::{
    MonthInput, Resolver, UnknownMonthPolicy, get_month_advice, get_season, get_season_advice, normalize_month,
    season_calendar, season_for,
};
pub use tables::{AdviceTable, MonthSeasonTable, STANDARD_ADVICE, STANDARD_SEASONS};
pub use types::{Hemisphere, Month, Season};

/// Error type for month, hemisphere and clock resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdviceError {
    /// Numeric month outside `1..=MAX_MONTH`.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    MonthOutOfRange(i64),

    /// Name that is not one of the twelve months.
    #[error("Invalid month: {0:?} is not a month name")]
    UnknownMonthName(String),

    /// Blank month input.
    #[error("Invalid month: empty input")]
    EmptyInput,

    /// Anything other than Northern or Southern.
    #[error("Invalid hemisphere: {0:?} (expected Northern or Southern)")]
    InvalidHemisphere(String),

    /// The system time source could not produce a month.
    #[error("System clock unavailable: {0}")]
    ClockUnavailable(String),
}

impl AdviceError {
    /// True for every variant that means the month input was bad
    pub const fn is_invalid_month(&self) -> bool {
        matches!(self, Self::MonthOutOfRange(_) | Self::UnknownMonthName(_) | Self::EmptyInput)
    }
}

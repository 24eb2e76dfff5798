use chrono::{Datelike, Local};

use crate::AdviceError;
use crate::types::Month;

/// Source of the current month.
pub trait Clock {
    /// # Errors
    /// Returns `AdviceError::ClockUnavailable` if the time source cannot produce a month.
    fn current_month(&self) -> Result<Month, AdviceError>;
}

/// Local system time via chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_month(&self) -> Result<Month, AdviceError> {
        let raw = u8::try_from(Local::now().month()).map_err(|e| AdviceError::ClockUnavailable(e.to_string()))?;
        Month::try_from(raw).map_err(|e| AdviceError::ClockUnavailable(e.to_string()))
    }
}

/// Always reports the same month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Month);

impl Clock for FixedClock {
    fn current_month(&self) -> Result<Month, AdviceError> {
        Ok(self.0)
    }
}

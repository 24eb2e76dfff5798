use std::str::FromStr;

use tracing::{debug, warn};

use crate::consts::FALLBACK_SEASON;
use crate::prelude::*;
use crate::report::Report;
use crate::tables::{AdviceTable, MonthSeasonTable, STANDARD_ADVICE, STANDARD_SEASONS};
use crate::types::{Hemisphere, Month, Season};
use crate::AdviceError;

/// Raw month input before normalization.
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum MonthInput {
    /// Free-form month name, any case or surrounding whitespace
    ByName(String),
    /// Calendar position, expected to be in `1..=12`
    ByNumber(i64),
}

impl From<&str> for MonthInput {
    fn from(s: &str) -> Self {
        Self::ByName(s.to_owned())
    }
}

impl From<Month> for MonthInput {
    fn from(month: Month) -> Self {
        Self::ByNumber(i64::from(month.get()))
    }
}

impl FromStr for MonthInput {
    type Err = std::convert::Infallible;

    /// Integers become `ByNumber`, anything else a trimmed `ByName`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(trimmed
            .parse::<i64>()
            .map_or_else(|_| Self::ByName(trimmed.to_owned()), Self::ByNumber))
    }
}

/// What to do with a month name that matches none of the twelve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownMonthPolicy {
    /// Report the given season with no month attached
    Fallback(Season),
    /// Fail with the normalizer's error
    Reject,
}

impl Default for UnknownMonthPolicy {
    fn default() -> Self {
        Self::Fallback(FALLBACK_SEASON)
    }
}

/// Converts raw input into a canonical [`Month`].
///
/// Names are trimmed and lowercased before matching; numbers must fall in `1..=12`.
///
/// # Errors
/// `EmptyInput` for a blank name, `UnknownMonthName` for a name that is not a
/// month, `MonthOutOfRange` for a number outside `1..=12`.
pub fn normalize_month(input: &MonthInput) -> Result<Month, AdviceError> {
    match input {
        MonthInput::ByNumber(n) => Month::new(*n),
        MonthInput::ByName(raw) => {
            let cleaned = raw.trim().to_lowercase();
            if cleaned.is_empty() {
                return Err(AdviceError::EmptyInput);
            }
            Month::from_name(&cleaned).ok_or_else(|| AdviceError::UnknownMonthName(raw.clone()))
        },
    }
}

/// Season of `month` in `hemisphere` using the standard table.
pub fn get_season(month: Month, hemisphere: Hemisphere) -> Season {
    STANDARD_SEASONS.season(month, hemisphere)
}

/// Parses both arguments, then maps them to a season.
///
/// Unknown names are rejected here; use [`Resolver`] for the lenient policy.
///
/// # Errors
/// Any normalizer error, or `InvalidHemisphere`.
pub fn season_for(input: impl Into<MonthInput>, hemisphere: &str) -> Result<Season, AdviceError> {
    let hemisphere = hemisphere.parse::<Hemisphere>()?;
    let month = normalize_month(&input.into())?;
    Ok(get_season(month, hemisphere))
}

/// Standard tip for a season.
pub fn get_season_advice(season: Season) -> &'static str {
    STANDARD_ADVICE.season_tip(season)
}

/// Standard month-specific tip.
pub fn get_month_advice(month: Month) -> Option<&'static str> {
    STANDARD_ADVICE.month_tip(month)
}

/// Every month with its season in `hemisphere`, January first.
pub fn season_calendar(hemisphere: Hemisphere) -> [(Month, Season); 12] {
    Month::ALL.map(|month| (month, get_season(month, hemisphere)))
}

/// Runs normalize, season and advice lookup over borrowed tables.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    seasons: &'a MonthSeasonTable,
    advice:  &'a AdviceTable,
    policy:  UnknownMonthPolicy,
}

impl Default for Resolver<'static> {
    fn default() -> Self {
        Self::new(&STANDARD_SEASONS, &STANDARD_ADVICE)
    }
}

impl<'a> Resolver<'a> {
    pub fn new(seasons: &'a MonthSeasonTable, advice: &'a AdviceTable) -> Self {
        Self {
            seasons,
            advice,
            policy: UnknownMonthPolicy::default(),
        }
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: UnknownMonthPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub const fn policy(&self) -> UnknownMonthPolicy {
        self.policy
    }

    /// Resolves raw input into a report.
    ///
    /// Numbers outside `1..=12` always fail. Unknown or empty names follow the
    /// configured [`UnknownMonthPolicy`].
    ///
    /// # Errors
    /// `MonthOutOfRange`, or the name errors under [`UnknownMonthPolicy::Reject`].
    pub fn resolve(&self, input: &MonthInput, hemisphere: Hemisphere) -> Result<Report, AdviceError> {
        match normalize_month(input) {
            Ok(month) => Ok(self.resolve_month(month, hemisphere)),
            Err(err @ (AdviceError::UnknownMonthName(_) | AdviceError::EmptyInput)) => match self.policy {
                UnknownMonthPolicy::Fallback(season) => {
                    warn!(?input, %season, "unrecognized month, using fallback season");
                    Ok(self.report(None, season, hemisphere))
                },
                UnknownMonthPolicy::Reject => Err(err),
            },
            Err(err) => Err(err),
        }
    }

    /// Builds the report for an already canonical month.
    pub fn resolve_month(&self, month: Month, hemisphere: Hemisphere) -> Report {
        let season = self.seasons.season(month, hemisphere);
        debug!(%month, %hemisphere, %season, "resolved season");
        self.report(Some(month), season, hemisphere)
    }

    fn report(&self, month: Option<Month>, season: Season, hemisphere: Hemisphere) -> Report {
        // Month tips follow the Northern calendar.
        let month_tip = match (month, hemisphere) {
            (Some(m), Hemisphere::Northern) => self.advice.month_tip(m),
            _ => None,
        };
        Report {
            month,
            season,
            hemisphere,
            month_tip,
            season_tip: self.advice.season_tip(season),
        }
    }
}

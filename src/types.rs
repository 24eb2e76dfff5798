use crate::AdviceError;
use crate::consts::{HEMISPHERE_SHIFT, MAX_MONTH, MONTH_NAMES, SEASON_COUNT};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A calendar month, guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Creates a new Month, validating that it's within `1..=MAX_MONTH`
    ///
    /// # Errors
    /// Returns `AdviceError::MonthOutOfRange` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: i64) -> Result<Self, AdviceError> {
        if !(1..=i64::from(MAX_MONTH)).contains(&value) {
            return Err(AdviceError::MonthOutOfRange(value));
        }
        usize::try_from(value - 1)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or(AdviceError::MonthOutOfRange(value))
    }

    /// Looks up a canonical lowercase name such as `"march"`
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|month| month.name() == name)
    }

    /// Returns the month number (1..=12)
    #[inline]
    pub const fn get(self) -> u8 {
        self as u8
    }

    /// Returns the canonical lowercase name
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self as usize]
    }

    /// Zero-based position, used to index the season tables
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize - 1
    }
}

impl TryFrom<u8> for Month {
    type Error = AdviceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

/// One of the four seasons, in cyclic order starting at Winter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    /// All seasons in cyclic order
    pub const ALL: [Self; 4] = [Self::Winter, Self::Spring, Self::Summer, Self::Autumn];

    /// Position in the cycle Winter, Spring, Summer, Autumn
    pub const fn position(self) -> u8 {
        match self {
            Self::Winter => 0,
            Self::Spring => 1,
            Self::Summer => 2,
            Self::Autumn => 3,
        }
    }

    /// The season `steps` positions further along the cycle
    pub const fn shifted(self, steps: u8) -> Self {
        match (self.position() + steps % SEASON_COUNT) % SEASON_COUNT {
            0 => Self::Winter,
            1 => Self::Spring,
            2 => Self::Summer,
            _ => Self::Autumn,
        }
    }

    /// The same month's season in the other hemisphere
    pub const fn opposite(self) -> Self {
        self.shifted(HEMISPHERE_SHIFT)
    }

    /// Forward distance along the cycle from `self` to `other`
    pub const fn distance_to(self, other: Self) -> u8 {
        (other.position() + SEASON_COUNT - self.position()) % SEASON_COUNT
    }
}

/// Which half of the globe the garden is in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    #[default]
    Northern,
    Southern,
}

impl FromStr for Hemisphere {
    type Err = AdviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "northern" | "north" | "n" => Ok(Self::Northern),
            "southern" | "south" | "s" => Ok(Self::Southern),
            _ => Err(AdviceError::InvalidHemisphere(s.to_owned())),
        }
    }
}

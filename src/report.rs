use std::fmt;

use serde::Serialize;

use crate::types::{Hemisphere, Month, Season};

/// Outcome of one resolution, ready to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Report {
    /// `None` when the input was an unrecognized name
    pub month:      Option<Month>,
    pub season:     Season,
    pub hemisphere: Hemisphere,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_tip:  Option<&'static str>,
    pub season_tip: &'static str,
}

impl Report {
    /// Two-line form used by the interactive prompt, preceded by a blank line
    pub fn brief(&self) -> String {
        format!("\nSeason detected: {}\nTip: {}", self.season, self.season_tip)
    }

    /// Closing line naming the active season and hemisphere
    pub fn summary(&self) -> String {
        match self.month {
            Some(month) => format!(
                "{month} is {} in the {} hemisphere.",
                self.season, self.hemisphere
            ),
            None => format!("It is {} in the {} hemisphere.", self.season, self.hemisphere),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tip) = self.month_tip {
            writeln!(f, "{tip}")?;
        }
        writeln!(f, "{} tip: {}", self.season, self.season_tip)?;
        write!(f, "{}", self.summary())
    }
}

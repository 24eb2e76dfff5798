use crate::consts::{FALLBACK_TIP, MONTH_TIPS, NORTHERN_SEASONS, SEASON_TIPS, SOUTHERN_SEASONS};
use crate::types::{Hemisphere, Month, Season};

/// Total mapping from (hemisphere, month) to season.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSeasonTable {
    northern: &'static [Season; 12],
    southern: &'static [Season; 12],
}

/// The standard meteorological season table.
pub static STANDARD_SEASONS: MonthSeasonTable = MonthSeasonTable {
    northern: &NORTHERN_SEASONS,
    southern: &SOUTHERN_SEASONS,
};

impl MonthSeasonTable {
    pub const fn new(northern: &'static [Season; 12], southern: &'static [Season; 12]) -> Self {
        Self { northern, southern }
    }

    /// Season of `month` in `hemisphere`
    pub const fn season(&self, month: Month, hemisphere: Hemisphere) -> Season {
        let row = match hemisphere {
            Hemisphere::Northern => self.northern,
            Hemisphere::Southern => self.southern,
        };
        row[month.index()]
    }

    /// Checks that every month's Southern season is its Northern season shifted by two
    pub fn is_phase_shifted(&self) -> bool {
        self.northern
            .iter()
            .zip(self.southern.iter())
            .all(|(north, south)| north.opposite() == *south)
    }
}

/// Season and month tips with a fallback for misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdviceTable {
    seasons:  &'static [(Season, &'static str)],
    months:   &'static [(Month, &'static str)],
    fallback: &'static str,
}

/// The built-in tips.
pub static STANDARD_ADVICE: AdviceTable = AdviceTable {
    seasons:  &SEASON_TIPS,
    months:   &MONTH_TIPS,
    fallback: FALLBACK_TIP,
};

impl AdviceTable {
    pub const fn new(
        seasons: &'static [(Season, &'static str)],
        months: &'static [(Month, &'static str)],
        fallback: &'static str,
    ) -> Self {
        Self {
            seasons,
            months,
            fallback,
        }
    }

    /// Tip for `season`, or the fallback tip when the table has no entry
    pub fn season_tip(&self, season: Season) -> &'static str {
        self.seasons
            .iter()
            .find(|(s, _)| *s == season)
            .map_or(self.fallback, |(_, tip)| *tip)
    }

    /// Month-specific tip, if the table has one
    pub fn month_tip(&self, month: Month) -> Option<&'static str> {
        self.months.iter().find(|(m, _)| *m == month).map(|(_, tip)| *tip)
    }

    pub const fn fallback(&self) -> &'static str {
        self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_seasons_phase_shift() {
        assert!(STANDARD_SEASONS.is_phase_shifted());
        for month in Month::ALL {
            let north = STANDARD_SEASONS.season(month, Hemisphere::Northern);
            let south = STANDARD_SEASONS.season(month, Hemisphere::Southern);
            assert_eq!(north.distance_to(south), 2, "{month} is not shifted by two seasons");
        }
    }

    #[test]
    fn test_every_season_has_three_months() {
        for hemisphere in [Hemisphere::Northern, Hemisphere::Southern] {
            for season in Season::ALL {
                let count = Month::ALL
                    .iter()
                    .filter(|m| STANDARD_SEASONS.season(**m, hemisphere) == season)
                    .count();
                assert_eq!(count, 3, "{season} in {hemisphere}");
            }
        }
    }

    #[test]
    fn test_unshifted_table_detected() {
        static SAME: MonthSeasonTable = MonthSeasonTable::new(&NORTHERN_SEASONS, &NORTHERN_SEASONS);
        assert!(!SAME.is_phase_shifted());
    }

    #[test]
    fn test_standard_advice_covers_every_season() {
        for season in Season::ALL {
            assert_ne!(STANDARD_ADVICE.season_tip(season), FALLBACK_TIP, "{season} has no tip");
        }
    }

    #[test]
    fn test_month_tips_are_prefixed() {
        for month in Month::ALL {
            let tip = STANDARD_ADVICE.month_tip(month).unwrap();
            assert!(tip.starts_with(&format!("{month}:")), "{tip}");
        }
    }

    #[test]
    fn test_partial_table_falls_back() {
        static PARTIAL: AdviceTable = AdviceTable::new(&[(Season::Spring, "Sow.")], &[], "Look around.");
        assert_eq!(PARTIAL.season_tip(Season::Spring), "Sow.");
        assert_eq!(PARTIAL.season_tip(Season::Winter), "Look around.");
        assert_eq!(PARTIAL.month_tip(Month::March), None);
        assert_eq!(PARTIAL.fallback(), "Look around.");
    }
}

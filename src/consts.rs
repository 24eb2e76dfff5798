use crate::types::{Month, Season};

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Number of seasons in one cycle
pub const SEASON_COUNT: u8 = 4;
/// Northern and Southern seasons are this many steps apart
pub const HEMISPHERE_SHIFT: u8 = 2;

/// Canonical lowercase month names (index 0 is unused, months are 1-indexed)
pub const MONTH_NAMES: [&str; 13] = [
    "",
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Northern hemisphere season for each month, January first
pub const NORTHERN_SEASONS: [Season; 12] = [
    Season::Winter, // January
    Season::Winter, // February
    Season::Spring, // March
    Season::Spring, // April
    Season::Spring, // May
    Season::Summer, // June
    Season::Summer, // July
    Season::Summer, // August
    Season::Autumn, // September
    Season::Autumn, // October
    Season::Autumn, // November
    Season::Winter, // December
];

/// Southern hemisphere season for each month, January first
pub const SOUTHERN_SEASONS: [Season; 12] = [
    Season::Summer, // January
    Season::Summer, // February
    Season::Autumn, // March
    Season::Autumn, // April
    Season::Autumn, // May
    Season::Winter, // June
    Season::Winter, // July
    Season::Winter, // August
    Season::Spring, // September
    Season::Spring, // October
    Season::Spring, // November
    Season::Summer, // December
];

/// One tip per season
pub const SEASON_TIPS: [(Season, &str); 4] = [
    (
        Season::Spring,
        "Start seeds indoors, prep beds, and feed the soil with compost.",
    ),
    (
        Season::Summer,
        "Keep up with watering, mulch to retain moisture, and watch for pests.",
    ),
    (
        Season::Autumn,
        "Plant cover crops, divide perennials, and gather leaves for mulch.",
    ),
    (
        Season::Winter,
        "Plan next year's garden, prune dormant shrubs, and clean your tools.",
    ),
];

/// Month-specific tips, written for the Northern calendar
pub const MONTH_TIPS: [(Month, &str); 12] = [
    (
        Month::January,
        "January: Browse seed catalogues and order early for the best choice.",
    ),
    (
        Month::February,
        "February: Chit seed potatoes and prune fruit trees while they sleep.",
    ),
    (
        Month::March,
        "March: Sow tomatoes and peppers indoors and top-dress beds with compost.",
    ),
    (
        Month::April,
        "April: Harden off seedlings and direct-sow peas, radish and lettuce.",
    ),
    (
        Month::May,
        "May: Plant out tender crops once the last frost has passed.",
    ),
    (
        Month::June,
        "June: Water deeply in the morning and stake tall plants.",
    ),
    (
        Month::July,
        "July: Deadhead flowers and harvest courgettes before they turn to marrows.",
    ),
    (
        Month::August,
        "August: Save seeds from your best plants and keep the greenhouse ventilated.",
    ),
    (
        Month::September,
        "September: Plant spring bulbs and sow green manure on empty beds.",
    ),
    (
        Month::October,
        "October: Lift and store root crops and rake leaves into leaf-mould bins.",
    ),
    (
        Month::November,
        "November: Plant bare-root trees and protect tender pots from frost.",
    ),
    (
        Month::December,
        "December: Clean and sharpen tools and check stored produce for rot.",
    ),
];

/// Tip used when no table entry matches
pub const FALLBACK_TIP: &str = "Keep an eye on your plants today.";

/// Season reported for unrecognized month names under the lenient policy
pub const FALLBACK_SEASON: Season = Season::Summer;

/// Prompt shown by the interactive mode
pub const MONTH_PROMPT: &str = "Which month is it? ";

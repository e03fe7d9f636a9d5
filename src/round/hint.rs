use std::fmt;
use std::str::FromStr;

use crate::error::UnknownCategory;
use crate::locale::Locale;
use crate::subject::Subject;

/// Total hints a player may buy per round.
pub const HINT_BUDGET: usize = 5;

/// The independent hint dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HintCategory {
    Type,
    Habitat,
    Height,
    Weight,
    Generation,
}

impl HintCategory {
    pub const ALL: [HintCategory; 5] = [
        HintCategory::Type,
        HintCategory::Habitat,
        HintCategory::Height,
        HintCategory::Weight,
        HintCategory::Generation,
    ];

    pub fn key(self) -> &'static str {
        match self {
            HintCategory::Type => "type",
            HintCategory::Habitat => "habitat",
            HintCategory::Height => "height",
            HintCategory::Weight => "weight",
            HintCategory::Generation => "generation",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Text revealed for this category.
    pub fn format(self, subject: &Subject, locale: Locale) -> String {
        match self {
            HintCategory::Type => subject.types.join(", "),
            HintCategory::Habitat => subject
                .habitat
                .clone()
                .unwrap_or_else(|| locale.unknown_habitat().to_owned()),
            HintCategory::Height => format!("{}m", tenths(subject.height)),
            HintCategory::Weight => format!("{}kg", tenths(subject.weight)),
            HintCategory::Generation => locale.generation(subject.generation),
        }
    }
}

// Upstream stores decimetres / hectograms.
fn tenths(raw: u32) -> f64 {
    f64::from(raw) / 10.0
}

impl fmt::Display for HintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for HintCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "type" => Ok(HintCategory::Type),
            "habitat" => Ok(HintCategory::Habitat),
            "height" => Ok(HintCategory::Height),
            "weight" => Ok(HintCategory::Weight),
            "generation" | "gen" => Ok(HintCategory::Generation),
            _ => Err(UnknownCategory(s.to_owned())),
        }
    }
}

/// Which categories have been revealed this round. The number of hints used
/// is the number of set flags, never a separate counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealedHints([bool; 5]);

impl RevealedHints {
    pub fn is_revealed(&self, category: HintCategory) -> bool {
        self.0[category.index()]
    }

    pub fn used(&self) -> usize {
        self.0.iter().filter(|f| **f).count()
    }

    pub fn exhausted(&self) -> bool {
        self.used() >= HINT_BUDGET
    }

    /// Sets the flag; false if it was already set or the budget is spent.
    pub fn mark(&mut self, category: HintCategory) -> bool {
        if self.exhausted() || self.is_revealed(category) {
            return false;
        }
        self.0[category.index()] = true;
        true
    }
}

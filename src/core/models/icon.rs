//! Icon identifiers
//!
//! Tasks, challenges and leaderboard ranks carry an icon. The set is closed:
//! renderers map each variant to whatever glyph or asset they use.

use serde::{Deserialize, Serialize};

/// A known icon identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    /// Waste bin
    Trash,
    /// Train (public transport)
    Train,
    /// Car (carpooling)
    Car,
    /// Prohibition sign (avoid single-use items)
    Ban,
    /// Leaf (generic eco action)
    #[default]
    Leaf,
    /// Star
    Star,
    /// Calendar
    Calendar,
    /// Medal
    Medal,
    /// Crown
    Crown,
    /// Award ribbon
    Award,
    /// Trophy
    Trophy,
}

impl Icon {
    /// All icons, in declaration order
    pub const ALL: [Self; 11] = [
        Self::Trash,
        Self::Train,
        Self::Car,
        Self::Ban,
        Self::Leaf,
        Self::Star,
        Self::Calendar,
        Self::Medal,
        Self::Crown,
        Self::Award,
        Self::Trophy,
    ];

    /// Lowercase identifier used in catalogs and JSON output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trash => "trash",
            Self::Train => "train",
            Self::Car => "car",
            Self::Ban => "ban",
            Self::Leaf => "leaf",
            Self::Star => "star",
            Self::Calendar => "calendar",
            Self::Medal => "medal",
            Self::Crown => "crown",
            Self::Award => "award",
            Self::Trophy => "trophy",
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Icon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str() == lower)
            .ok_or_else(|| format!("Unknown icon: {s}"))
    }
}

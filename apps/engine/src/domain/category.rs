use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five scoring classes every item belongs to.
///
/// Declaration order is the tie-break order: earlier variants carry a higher
/// static weight and win ranking ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    ManuelCarvalho,
    SigridThaler,
    DanielMelim,
    RamonMartins,
    RafaelSilveira,
}

impl Category {
    pub const COUNT: usize = 5;

    pub const ALL: [Category; Category::COUNT] = [
        Category::ManuelCarvalho,
        Category::SigridThaler,
        Category::DanielMelim,
        Category::RamonMartins,
        Category::RafaelSilveira,
    ];

    /// Position of this category in per-category arrays.
    pub const fn index(self) -> usize {
        match self {
            Category::ManuelCarvalho => 0,
            Category::SigridThaler => 1,
            Category::DanielMelim => 2,
            Category::RamonMartins => 3,
            Category::RafaelSilveira => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::ManuelCarvalho => "Manuel Carvalho",
            Category::SigridThaler => "Sigrid Thaler",
            Category::DanielMelim => "Daniel Melim",
            Category::RamonMartins => "Ramon Martins",
            Category::RafaelSilveira => "Rafael Silveira",
        }
    }

    /// Static weight added on top of stored points when ranking.
    ///
    /// Always below the per-item point value, so it only separates exact ties.
    pub const fn tiebreak(self) -> u32 {
        match self {
            Category::ManuelCarvalho => 4,
            Category::SigridThaler => 3,
            Category::DanielMelim => 2,
            Category::RamonMartins => 1,
            Category::RafaelSilveira => 0,
        }
    }

    /// Number of items of this category in the standard deck.
    pub const fn deck_count(self) -> usize {
        match self {
            Category::ManuelCarvalho => 12,
            Category::SigridThaler => 13,
            Category::DanielMelim => 14,
            Category::RamonMartins => 15,
            Category::RafaelSilveira => 16,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use super::auction::AuctionKind;
use super::category::Category;

/// A single auctionable piece.
///
/// The protocol it sells under is printed on the item itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub category: Category,
    pub kind: AuctionKind,
}

impl Item {
    pub fn new(name: impl Into<String>, category: Category, kind: AuctionKind) -> Self {
        Self {
            name: name.into(),
            category,
            kind,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

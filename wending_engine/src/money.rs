//! Monetary value type for pricing items.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A price in coin.
///
/// Wrapping an unsigned integer keeps prices non-negative by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price(pub u32);

impl Price {
    /// Amount in coin.
    pub fn coins(self) -> u32 {
        self.0
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} coin", self.0)
    }
}

// Product categories, each served from its own warehouse

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownCategory;

/// Product grouping used to select a warehouse and delivery rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Cement,
    Steel,
    ConcreteMix,
    Bricks,
    Sand,
    Aggregates,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 6] = [
        ProductCategory::Cement,
        ProductCategory::Steel,
        ProductCategory::ConcreteMix,
        ProductCategory::Bricks,
        ProductCategory::Sand,
        ProductCategory::Aggregates,
    ];

    /// Display name as shown in the storefront catalogue
    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Cement => "Cement",
            ProductCategory::Steel => "Steel",
            ProductCategory::ConcreteMix => "Concrete Mix",
            ProductCategory::Bricks => "Bricks",
            ProductCategory::Sand => "Sand",
            ProductCategory::Aggregates => "Aggregates",
        }
    }

    /// Lenient lookup for category names coming from the catalogue.
    ///
    /// Case, spaces, dashes and underscores are ignored, so `"Concrete Mix"`,
    /// `"concrete-mix"` and `"CONCRETE_MIX"` all resolve to the same variant.
    pub fn parse(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        Self::ALL.into_iter().find(|category| {
            category
                .label()
                .chars()
                .filter(|c| *c != ' ')
                .flat_map(char::to_lowercase)
                .eq(key.chars())
        })
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProductCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

use crate::engine::error::ConversionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measurement domain. Units only convert within their own category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Temperature,
    Area,
    Weight,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 4] = [
        Category::Length,
        Category::Temperature,
        Category::Area,
        Category::Weight,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Temperature => "temperature",
            Category::Area => "area",
            Category::Weight => "weight",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Temperature => "Temperature",
            Category::Area => "Area",
            Category::Weight => "Weight",
        }
    }

    /// Temperature scales are affine, so they skip the factor path
    pub fn is_affine(&self) -> bool {
        matches!(self, Category::Temperature)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.id() == s.trim())
            .ok_or_else(|| ConversionError::UnknownCategory(s.to_string()))
    }
}

/// A unit definition within one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    /// Stable identifier, unique within the category (e.g. "km")
    pub id: &'static str,
    /// Display name including the symbol suffix (e.g. "Kilometer (km)")
    pub name: &'static str,
    /// How many of this unit make one of the category's base unit
    pub factor: f64,
}

impl Unit {
    /// Display name up to the first whitespace ("Meter" from "Meter (m)")
    pub fn short_name(&self) -> &'static str {
        self.name.split_whitespace().next().unwrap_or(self.name)
    }
}

/// Serializable view of a category and its units, used for export
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub id: Category,
    pub name: &'static str,
    pub units: &'static [Unit],
}

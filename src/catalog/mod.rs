pub mod models;
pub mod tables;
pub mod validation;


pub use models::*;
pub use tables::*;
pub use validation::*;

/// All categories with their unit lists, in display order
pub fn catalog() -> Vec<CategoryInfo> {
    Category::ALL
        .iter()
        .map(|&c| CategoryInfo {
            id: c,
            name: c.name(),
            units: units(c),
        })
        .collect()
}

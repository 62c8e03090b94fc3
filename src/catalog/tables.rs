// Built-in unit tables. Factors are relative to the first unit of each
// non-affine category (meter, square meter, kilogram).

use crate::catalog::models::{Category, Unit};
use lazy_static::lazy_static;
use std::collections::HashMap;

const fn unit(id: &'static str, name: &'static str, factor: f64) -> Unit {
    Unit { id, name, factor }
}

static LENGTH: [Unit; 8] = [
    unit("meter", "Meter (m)", 1.0),
    unit("km", "Kilometer (km)", 0.001),
    unit("cm", "Centimeter (cm)", 100.0),
    unit("mm", "Millimeter (mm)", 1000.0),
    unit("mile", "Mile (mi)", 0.000621371),
    unit("yard", "Yard (yd)", 1.09361),
    unit("foot", "Foot (ft)", 3.28084),
    unit("inch", "Inch (in)", 39.3701),
];

// Nominal factor only; conversions use the closed forms in engine::temperature
static TEMPERATURE: [Unit; 3] = [
    unit("celsius", "Celsius (°C)", 1.0),
    unit("fahrenheit", "Fahrenheit (°F)", 1.0),
    unit("kelvin", "Kelvin (K)", 1.0),
];

static AREA: [Unit; 6] = [
    unit("sqmeter", "Square Meter (m²)", 1.0),
    unit("sqkm", "Square Kilometer (km²)", 0.000001),
    unit("sqft", "Square Foot (ft²)", 10.7639),
    unit("acre", "Acre", 0.000247105),
    unit("hectare", "Hectare", 0.0001),
    unit("cent", "Cent", 0.01),
];

static WEIGHT: [Unit; 6] = [
    unit("kg", "Kilogram (kg)", 1.0),
    unit("g", "Gram (g)", 1000.0),
    unit("mg", "Milligram (mg)", 1000000.0),
    unit("pound", "Pound (lb)", 2.20462),
    unit("ounce", "Ounce (oz)", 35.274),
    unit("ton", "Metric Ton (t)", 0.001),
];

lazy_static! {
    /// category -> unit id -> unit, built once on first lookup
    static ref UNIT_INDEX: HashMap<Category, HashMap<&'static str, &'static Unit>> = Category::ALL
        .iter()
        .map(|&category| {
            let by_id: HashMap<_, _> = units(category).iter().map(|u| (u.id, u)).collect();
            (category, by_id)
        })
        .collect();
}

/// Units of a category, in display order
pub fn units(category: Category) -> &'static [Unit] {
    match category {
        Category::Length => &LENGTH,
        Category::Temperature => &TEMPERATURE,
        Category::Area => &AREA,
        Category::Weight => &WEIGHT,
    }
}

/// Look up a unit by id within one category
pub fn find_unit(category: Category, id: &str) -> Option<&'static Unit> {
    UNIT_INDEX
        .get(&category)
        .and_then(|by_id| by_id.get(id))
        .copied()
}

/// The default (source, target) pair: the first two units of the category
pub fn default_units(category: Category) -> (&'static Unit, &'static Unit) {
    let list = units(category);
    (&list[0], &list[1])
}

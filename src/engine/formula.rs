use crate::catalog::Category;
use crate::engine::converter::lookup;
use crate::engine::formatter::format_number;
use crate::engine::temperature::{self, Scale};

/// Describe the conversion between two units.
///
/// Temperature pairs get their closed-form formula; every other category is
/// shown as a ratio, e.g. `"1 Meter = 0.001 Kilometer"`. Unknown unit ids
/// give `None`.
pub fn formula(category: Category, source_id: &str, target_id: &str) -> Option<String> {
    let source = lookup(category, source_id).ok()?;
    let target = lookup(category, target_id).ok()?;

    if category.is_affine() {
        let from = Scale::from_id(source.id)?;
        let to = Scale::from_id(target.id)?;
        return Some(temperature::formula(from, to).to_string());
    }

    let ratio = target.factor / source.factor;
    Some(format!(
        "1 {} = {} {}",
        source.short_name(),
        format_number(ratio),
        target.short_name()
    ))
}

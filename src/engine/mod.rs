// Conversion engine: stateless functions over the static catalog.
// convert() turns raw input into a displayed result, formula() describes the
// relationship between two units.

pub mod converter;
pub mod error;
pub mod formatter;
pub mod formula;
pub mod input;
pub mod temperature;


pub use converter::{convert, convert_value, Conversion};
pub use error::{ConversionError, INVALID_NUMBER_MESSAGE};
pub use formatter::format_number;
pub use formula::formula;
pub use input::parse_number;

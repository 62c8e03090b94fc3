// Closed-form conversions between the three temperature scales.
// The scales are affine, so there is no shared factor to divide through.

/// Temperature scale, keyed by the catalog's unit ids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

const KELVIN_OFFSET: f64 = 273.15;

impl Scale {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "celsius" => Some(Scale::Celsius),
            "fahrenheit" => Some(Scale::Fahrenheit),
            "kelvin" => Some(Scale::Kelvin),
            _ => None,
        }
    }
}

pub fn convert(value: f64, from: Scale, to: Scale) -> f64 {
    use Scale::*;

    match (from, to) {
        (Celsius, Fahrenheit) => (value * 9.0 / 5.0) + 32.0,
        (Celsius, Kelvin) => value + KELVIN_OFFSET,
        (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
        (Fahrenheit, Kelvin) => (value - 32.0) * 5.0 / 9.0 + KELVIN_OFFSET,
        (Kelvin, Celsius) => value - KELVIN_OFFSET,
        (Kelvin, Fahrenheit) => (value - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0,
        _ => value,
    }
}

/// Human-readable formula for a pair of scales
pub fn formula(from: Scale, to: Scale) -> &'static str {
    use Scale::*;

    match (from, to) {
        (Celsius, Fahrenheit) => "(°C × 9/5) + 32 = °F",
        (Celsius, Kelvin) => "°C + 273.15 = K",
        (Fahrenheit, Celsius) => "(°F - 32) × 5/9 = °C",
        (Fahrenheit, Kelvin) => "(°F - 32) × 5/9 + 273.15 = K",
        (Kelvin, Celsius) => "K - 273.15 = °C",
        (Kelvin, Fahrenheit) => "(K - 273.15) × 9/5 + 32 = °F",
        _ => "No conversion needed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_points() {
        assert_eq!(convert(0.0, Scale::Celsius, Scale::Fahrenheit), 32.0);
        assert_eq!(convert(100.0, Scale::Celsius, Scale::Fahrenheit), 212.0);
        assert_eq!(convert(0.0, Scale::Celsius, Scale::Kelvin), 273.15);
        assert_eq!(convert(32.0, Scale::Fahrenheit, Scale::Celsius), 0.0);
        assert_eq!(convert(-40.0, Scale::Fahrenheit, Scale::Celsius), -40.0);
    }

    #[test]
    fn test_kelvin_pairs() {
        assert!((convert(32.0, Scale::Fahrenheit, Scale::Kelvin) - 273.15).abs() < 1e-9);
        assert!((convert(273.15, Scale::Kelvin, Scale::Celsius)).abs() < 1e-9);
        assert!((convert(373.15, Scale::Kelvin, Scale::Fahrenheit) - 212.0).abs() < 1e-9);
    }

    #[test]
    fn test_same_scale_is_identity() {
        for scale in [Scale::Celsius, Scale::Fahrenheit, Scale::Kelvin] {
            assert_eq!(convert(-12.75, scale, scale), -12.75);
            assert_eq!(formula(scale, scale), "No conversion needed");
        }
    }

    #[test]
    fn test_formula_text() {
        assert_eq!(formula(Scale::Celsius, Scale::Fahrenheit), "(°C × 9/5) + 32 = °F");
        assert_eq!(formula(Scale::Kelvin, Scale::Celsius), "K - 273.15 = °C");
    }
}

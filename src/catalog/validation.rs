use crate::catalog::models::{Category, Unit};
use crate::catalog::tables::units;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub message: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: String, location: Option<String>) {
        self.errors.push(ValidationIssue {
            severity: IssueSeverity::Error,
            message,
            location,
        });
    }

    pub fn add_warning(&mut self, message: String, location: Option<String>) {
        self.warnings.push(ValidationIssue {
            severity: IssueSeverity::Warning,
            message,
            location,
        });
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_issues(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (title, issues) in [("Errors:", &self.errors), ("Warnings:", &self.warnings)] {
            if issues.is_empty() {
                continue;
            }
            writeln!(f, "{}", title)?;
            for issue in issues {
                writeln!(f, "  {}", issue)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueSeverity::Error => f.write_str("error"),
            IssueSeverity::Warning => f.write_str("warning"),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(loc) = &self.location {
            write!(f, "[{}] ", loc)?;
        }
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Check the table invariants for one category's unit list
pub fn validate_units(category: Category, list: &[Unit], result: &mut ValidationResult) {
    if list.len() < 2 {
        result.add_error(
            format!("needs at least 2 units, found {}", list.len()),
            Some(category.id().to_string()),
        );
    }

    let mut seen = HashSet::new();
    for u in list {
        let location = Some(format!("{}/{}", category.id(), u.id));

        if !seen.insert(u.id) {
            result.add_error(format!("duplicate unit id '{}'", u.id), location.clone());
        }

        if category.is_affine() {
            // Factor is nominal for affine scales
            if u.factor != 1.0 {
                result.add_warning(
                    format!("nominal factor should be 1, found {}", u.factor),
                    location,
                );
            }
        } else if !u.factor.is_finite() || u.factor <= 0.0 {
            result.add_error(
                format!("factor must be positive and finite, found {}", u.factor),
                location,
            );
        }
    }
}

/// Validate every built-in category table
pub fn validate_catalog() -> ValidationResult {
    let mut result = ValidationResult::new();
    for category in Category::ALL {
        validate_units(category, units(category), &mut result);
    }
    result
}

use crate::catalog::{default_units, units, Category, Unit};
use crate::engine::{convert, formula};
use serde::Serialize;

/// Starting selections for a session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionDefaults {
    pub category: Category,
    pub input: String,
    pub source: String,
    pub target: String,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self::for_category(Category::Length)
    }
}

impl SessionDefaults {
    /// Input "1" with the category's default unit pair
    pub fn for_category(category: Category) -> Self {
        let (source, target) = default_units(category);
        Self {
            category,
            input: "1".to_string(),
            source: source.id.to_string(),
            target: target.id.to_string(),
        }
    }
}

/// Serializable view of a session's current state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub category: Category,
    pub input: String,
    pub source: String,
    pub target: String,
    pub result: String,
    pub formula: String,
}

/// Converter state: the current selections plus the last displayed result.
///
/// Every setter recomputes immediately. When the engine produces nothing
/// (a unit that does not belong to the active category) the previous result
/// and formula stay on display.
#[derive(Debug, Clone)]
pub struct ConverterSession {
    category: Category,
    input: String,
    source: String,
    target: String,
    result: String,
    formula: String,
}

impl Default for ConverterSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterSession {
    pub fn new() -> Self {
        Self::with_defaults(&SessionDefaults::default())
    }

    pub fn with_defaults(defaults: &SessionDefaults) -> Self {
        let mut session = Self {
            category: defaults.category,
            input: defaults.input.clone(),
            source: defaults.source.clone(),
            target: defaults.target.clone(),
            result: String::new(),
            formula: String::new(),
        };
        session.recompute();
        session
    }

    /// Switch category; units reset to that category's defaults
    pub fn set_category(&mut self, category: Category) {
        let (source, target) = default_units(category);
        self.category = category;
        self.source = source.id.to_string();
        self.target = target.id.to_string();
        self.recompute();
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
        self.recompute();
    }

    pub fn set_source(&mut self, id: impl Into<String>) {
        self.source = id.into();
        self.recompute();
    }

    pub fn set_target(&mut self, id: impl Into<String>) {
        self.target = id.into();
        self.recompute();
    }

    pub fn swap_units(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
        self.recompute();
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// Units available in the active category
    pub fn units(&self) -> &'static [Unit] {
        units(self.category)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            category: self.category,
            input: self.input.clone(),
            source: self.source.clone(),
            target: self.target.clone(),
            result: self.result.clone(),
            formula: self.formula.clone(),
        }
    }

    fn recompute(&mut self) {
        if let Some(conversion) = convert(self.category, &self.source, &self.target, &self.input) {
            self.result = conversion.to_string();
        }
        if let Some(text) = formula(self.category, &self.source, &self.target) {
            self.formula = text;
        }

        tracing::debug!(
            category = %self.category,
            source = %self.source,
            target = %self.target,
            input = %self.input,
            result = %self.result,
            "session recomputed"
        );
    }
}

// WebAssembly bindings: a browser front end drives a ConverterSession and
// renders the snapshot JSON returned by each call.
use crate::catalog::{self, Category};
use crate::config::Config;
use crate::engine;
use crate::session::ConverterSession;
use wasm_bindgen::prelude::*;

fn parse_category(category: &str) -> Result<Category, JsValue> {
    category
        .parse::<Category>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize: {}", e)))
}

#[wasm_bindgen]
pub struct ConverterWasm {
    session: ConverterSession,
}

impl Default for ConverterWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ConverterWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: ConverterSession::new(),
        }
    }

    /// Start from the `[session]` table of a TOML config
    #[wasm_bindgen]
    pub fn from_config(config_content: &str) -> Result<ConverterWasm, JsValue> {
        let defaults = Config::load_from_str(config_content)
            .and_then(|config| config.session_defaults())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self {
            session: ConverterSession::with_defaults(&defaults),
        })
    }

    /// Current state as JSON: category, input, source, target, result, formula
    #[wasm_bindgen]
    pub fn snapshot(&self) -> Result<String, JsValue> {
        to_json(&self.session.snapshot())
    }

    #[wasm_bindgen]
    pub fn set_category(&mut self, category: &str) -> Result<String, JsValue> {
        self.session.set_category(parse_category(category)?);
        self.snapshot()
    }

    #[wasm_bindgen]
    pub fn set_input(&mut self, input: &str) -> Result<String, JsValue> {
        self.session.set_input(input);
        self.snapshot()
    }

    #[wasm_bindgen]
    pub fn set_source(&mut self, unit_id: &str) -> Result<String, JsValue> {
        self.session.set_source(unit_id);
        self.snapshot()
    }

    #[wasm_bindgen]
    pub fn set_target(&mut self, unit_id: &str) -> Result<String, JsValue> {
        self.session.set_target(unit_id);
        self.snapshot()
    }

    #[wasm_bindgen]
    pub fn swap_units(&mut self) -> Result<String, JsValue> {
        self.session.swap_units();
        self.snapshot()
    }

    /// Units of the active category as a JSON array
    #[wasm_bindgen]
    pub fn units(&self) -> Result<String, JsValue> {
        to_json(&self.session.units())
    }

    /// The whole catalog as JSON
    #[wasm_bindgen]
    pub fn categories() -> Result<String, JsValue> {
        to_json(&catalog::catalog())
    }
}

/// Stateless conversion; `undefined` when a unit is not in the category
#[wasm_bindgen]
pub fn convert(
    category: &str,
    source_id: &str,
    target_id: &str,
    input: &str,
) -> Result<Option<String>, JsValue> {
    let category = parse_category(category)?;
    Ok(engine::convert(category, source_id, target_id, input).map(|c| c.to_string()))
}

#[wasm_bindgen]
pub fn formula(category: &str, source_id: &str, target_id: &str) -> Result<Option<String>, JsValue> {
    let category = parse_category(category)?;
    Ok(engine::formula(category, source_id, target_id))
}

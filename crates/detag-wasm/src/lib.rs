//! WASM bindings for detag.
//!
//! Exposes `removal_span()` to JavaScript via wasm-bindgen: returns a
//! `{ start, end }` object, `null` when no tag sits at the offset, and
//! throws on an unknown language id. Offsets are character offsets, the
//! same unit editor hosts pass around.

use std::str::FromStr;

use wasm_bindgen::prelude::*;

use detag_core::Dialect;

/// Resolve the removal span for the tag at `offset` in `text`.
///
/// `language` is an editor language id: `html`, `jsx`, `tsx`,
/// `javascriptreact`, `typescriptreact`, or `vue`.
#[wasm_bindgen]
pub fn removal_span(text: &str, offset: usize, language: &str) -> Result<JsValue, JsError> {
    let dialect = Dialect::from_str(language).map_err(|e| JsError::new(&e.to_string()))?;

    match detag_core::removal_span(text, offset, dialect) {
        Some(span) => {
            serde_wasm_bindgen::to_value(&span).map_err(|e| JsError::new(&e.to_string()))
        }
        None => Ok(JsValue::NULL),
    }
}

/// Get the engine version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

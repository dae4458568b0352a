//! WebAssembly bindings for titlecaps.
//!
//! This module provides JavaScript-friendly bindings for the title caser.
//! Hosts that bind it to an input field keep track of the caret themselves.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::{Style, TitleCaser};

/// JavaScript-friendly options struct.
///
/// All fields are optional and use camelCase naming for JavaScript conventions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JsOptions {
    /// Capitalization style: a name (`"ap4"`) or a mode number (default:
    /// Chicago).
    pub style: Option<Style>,
}

impl JsOptions {
    /// Resolve the style, falling back to Chicago.
    fn to_style(&self) -> Style {
        self.style.unwrap_or_default()
    }
}

/// Convert a mode passed from JavaScript, accepting numbers and numeric
/// strings.  Anything else means Chicago.
fn mode_from_js(value: &JsValue) -> Style {
    if let Some(number) = value.as_f64() {
        Style::from_mode(number.trunc() as i64)
    } else if let Some(text) = value.as_string() {
        Style::parse_mode(&text)
    } else {
        Style::ChicagoManual
    }
}

/// Convert text to title case.
///
/// # Arguments
///
/// * `text` - The title to convert
/// * `options` - Optional options as a JavaScript object (`{ style }`)
///
/// # Returns
///
/// The converted title.
#[wasm_bindgen(js_name = titleCase)]
pub fn title_case(text: &str, options: JsValue) -> Result<String, JsError> {
    let js_opts: JsOptions = if options.is_undefined() || options.is_null() {
        JsOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| JsError::new(&e.to_string()))?
    };

    Ok(crate::title_case(text, js_opts.to_style()))
}

/// A title caser meant to be driven by an input field's change events.
#[wasm_bindgen]
pub struct TitleCapsEditor {
    caser: TitleCaser,
}

#[wasm_bindgen]
impl TitleCapsEditor {
    /// Create an editor.  Without a mode it starts in Literal mode.
    #[wasm_bindgen(constructor)]
    pub fn new(mode: JsValue) -> TitleCapsEditor {
        let style = if mode.is_undefined() || mode.is_null() {
            Style::Literal
        } else {
            mode_from_js(&mode)
        };
        TitleCapsEditor {
            caser: TitleCaser::new(style),
        }
    }

    /// Convert the current field value.
    pub fn transform(&mut self, text: &str) -> String {
        self.caser.transform(text)
    }

    /// Set the capitalization mode (1-4); invalid values select Chicago.
    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&mut self, value: JsValue) {
        self.caser.set_style(mode_from_js(&value));
    }

    /// Get the capitalization mode (1-4).
    #[wasm_bindgen(js_name = getMode)]
    pub fn get_mode(&self) -> u8 {
        self.caser.style().mode()
    }

    /// Forget the first text remembered for Literal mode.
    #[wasm_bindgen(js_name = resetOriginal)]
    pub fn reset_original(&mut self) {
        self.caser.clear_original();
    }
}

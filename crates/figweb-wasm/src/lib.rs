//! WASM bindings for figweb.
//!
//! Exposes `compile()` to JavaScript via wasm-bindgen so a design plugin can
//! convert its own export in the browser.
//! Returns a JS object `{ html, css, page }` or throws on error.

use figweb_codegen::{page, CompilerOutput, PageOptions};
use figweb_document::Document;
use wasm_bindgen::prelude::*;

/// Convert a design payload (JSON, root node first) to HTML + CSS.
///
/// Returns a JS object with `{ html: string, css: string, page: string }`,
/// where `page` is a complete document with the stylesheet inlined.
/// Throws a JS error if the payload is malformed.
#[wasm_bindgen]
pub fn compile(payload: &str) -> Result<JsValue, JsError> {
    let (output, page) = native_compile(payload).map_err(|e| JsError::new(&e))?;

    let js_obj = js_sys::Object::new();
    js_sys::Reflect::set(&js_obj, &"html".into(), &output.html.into())
        .map_err(|_| JsError::new("Failed to set html property"))?;
    js_sys::Reflect::set(&js_obj, &"css".into(), &output.css.into())
        .map_err(|_| JsError::new("Failed to set css property"))?;
    js_sys::Reflect::set(&js_obj, &"page".into(), &page.into())
        .map_err(|_| JsError::new("Failed to set page property"))?;

    Ok(js_obj.into())
}

/// Get the converter version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn native_compile(payload: &str) -> Result<(CompilerOutput, String), String> {
    let doc = Document::parse(payload).map_err(|e| e.to_string())?;
    let output = figweb_codegen::compile(&doc);
    let page = page::render(&output, &PageOptions::default());
    Ok((output, page))
}

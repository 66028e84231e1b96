//! `wasm-bindgen` bindings for the browser viewer.
//!
//! The viewer owns loading, rendering and drag handling; it hands over a mesh
//! snapshot and reads back (and writes) safety zone vertices through these
//! wrappers.

use crate::errors::ZoneError;
use wasm_bindgen::prelude::*;

pub mod mesh_js;
pub mod zone_js;

pub use mesh_js::MeshJs;
pub use zone_js::{SafetyZoneJs, ZoneParamsJs};

fn to_js_error(error: ZoneError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

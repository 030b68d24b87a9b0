//! JavaScript bindings. JS strings arrive as UTF-8, so counts are UTF-8 bytes.

use wasm_bindgen::prelude::*;

/// Exported to JavaScript as `energyWrapped`. Throws when the count exceeds `2**31 - 1`.
#[wasm_bindgen(js_name = energyWrapped)]
pub fn energy_wrapped(input: &str) -> Result<i32, JsError> {
    dna_energy::energy_wrapped(input).map_err(|e| JsError::new(&e.to_string()))
}

#[wasm_bindgen]
pub fn energy(input: &str) -> usize {
    dna_energy::energy(input)
}

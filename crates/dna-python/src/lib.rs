//! Python bindings: a thin facade over the `dna_energy` core.

use dna_energy::EnergyError;
use pyo3::exceptions::PyOverflowError;
use pyo3::prelude::*;

fn to_py_err(err: EnergyError) -> PyErr {
    PyOverflowError::new_err(err.to_string())
}

/// Energy of `sequence`: the byte length of its UTF-8 encoding.
#[pyfunction]
fn energy(sequence: &str) -> usize {
    dna_energy::energy(sequence)
}

/// Energy of a raw byte string.
#[pyfunction]
fn energy_bytes(data: &[u8]) -> usize {
    dna_energy::energy_of_bytes(data)
}

/// Energy narrowed to a 32-bit host integer. Raises `OverflowError` beyond `2**31 - 1`.
#[pyfunction]
#[pyo3(name = "energyWrapped")]
fn energy_wrapped(sequence: &str) -> PyResult<i32> {
    dna_energy::energy_wrapped(sequence).map_err(to_py_err)
}

#[pymodule]
fn dna_energy_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(energy, m)?)?;
    m.add_function(wrap_pyfunction!(energy_bytes, m)?)?;
    m.add_function(wrap_pyfunction!(energy_wrapped, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}

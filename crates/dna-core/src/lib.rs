//! # DNA Energy Core Library
//!
//! Measures the "energy" of a sequence and defines the contract every host
//! binding (C ABI, Python, JavaScript) exposes it under.
//!
//! ## Counting Convention
//!
//! The energy of a sequence is its element count, where the element is the
//! **byte** of the sequence's UTF-8 encoding. `"ACGT"` has energy 4, `"é"` has
//! energy 2. No grapheme or scalar-value counting takes place.
//!
//! ## Layout
//!
//! - **[`energy`]: The Function.** The pure count over strings and byte slices,
//!   plus the narrowing to the 32-bit host integer shared by all bindings.
//!
//! - **[`report`]: Batch Measurement.** Labelled measurements of many inputs at
//!   once, evaluated in parallel and returned in input order.
//!
//! - **[`error`]: Failures.** The single error the library can raise, which only
//!   the host contract produces.
//!
//! The name suggests a sequence free-energy score; only the length is computed.

pub mod energy;
pub mod error;
pub mod report;

pub use energy::{
    ENERGY_WRAPPED_EXPORT, energy, energy_of_bytes, energy_wrapped, energy_wrapped_bytes,
    to_host_int,
};
pub use error::EnergyError;
pub use report::{EnergyReport, measure_all, total_energy};

//! C ABI for hosts that load the native library or a wasm32 build of it.
//!
//! No Rust error crosses the boundary: every failure is reported as `-1`.

use dna_energy::energy_wrapped_bytes;
use std::ffi::CStr;
use std::os::raw::c_char;

const FAILURE: i32 = -1;

static VERSION: &CStr = match CStr::from_bytes_with_nul(
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes(),
) {
    Ok(version) => version,
    Err(_) => c"unknown",
};

/// Energy of a NUL-terminated string, counted in bytes before the terminator.
///
/// Returns `-1` for a null pointer or a count that does not fit in an `i32`.
///
/// # Safety
///
/// `input` must be null or point to a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dna_energy(input: *const c_char) -> i32 {
    if input.is_null() {
        return FAILURE;
    }

    let bytes = unsafe { CStr::from_ptr(input) }.to_bytes();
    energy_wrapped_bytes(bytes).unwrap_or(FAILURE)
}

/// Energy of a pointer/length buffer. Embedded NUL bytes are counted.
///
/// A null `data` with `len == 0` is the empty sequence and returns `0`; a null
/// `data` with a non-zero `len` returns `-1`.
///
/// # Safety
///
/// When non-null, `data` must be valid for reads of `len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dna_energy_wrapped(data: *const u8, len: usize) -> i32 {
    if data.is_null() {
        return if len == 0 { 0 } else { FAILURE };
    }

    let bytes = unsafe { std::slice::from_raw_parts(data, len) };
    energy_wrapped_bytes(bytes).unwrap_or(FAILURE)
}

/// Static crate version. The caller must not free the returned pointer.
#[unsafe(no_mangle)]
pub extern "C" fn dna_energy_version() -> *const c_char {
    VERSION.as_ptr()
}

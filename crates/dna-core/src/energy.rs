use crate::error::EnergyError;

/// Name under which every host binding exports [`energy_wrapped`].
pub const ENERGY_WRAPPED_EXPORT: &str = "energyWrapped";

/// Returns the energy of `sequence`: the number of bytes in its UTF-8 encoding.
///
/// The empty sequence has energy zero. Multi-byte characters contribute one unit
/// per byte, so `energy("é") == 2`.
#[inline]
pub fn energy(sequence: &str) -> usize {
    energy_of_bytes(sequence.as_bytes())
}

/// Same count as [`energy`] for input that is not known to be valid UTF-8.
#[inline]
pub fn energy_of_bytes(sequence: &[u8]) -> usize {
    sequence.len()
}

/// Narrows a count to the signed 32-bit integer returned across host boundaries.
pub fn to_host_int(count: usize) -> Result<i32, EnergyError> {
    i32::try_from(count).map_err(|_| EnergyError::LengthOverflow { length: count })
}

pub fn energy_wrapped(sequence: &str) -> Result<i32, EnergyError> {
    to_host_int(energy(sequence))
}

pub fn energy_wrapped_bytes(sequence: &[u8]) -> Result<i32, EnergyError> {
    to_host_int(energy_of_bytes(sequence))
}

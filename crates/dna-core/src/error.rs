use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EnergyError {
    #[error(
        "Sequence energy {length} exceeds the host integer limit of {limit}",
        limit = i32::MAX
    )]
    LengthOverflow { length: usize },
}

use crate::energy::energy_of_bytes;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, instrument, trace};

/// One measured input, labelled with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnergyReport {
    pub source: String,
    pub energy: usize,
}

impl EnergyReport {
    pub fn measure(source: impl Into<String>, sequence: &[u8]) -> Self {
        let source = source.into();
        let energy = energy_of_bytes(sequence);
        trace!(source = %source, energy, "Measured sequence.");
        Self { source, energy }
    }
}

/// Measures every `(label, bytes)` pair on the rayon pool.
///
/// Measurements are independent of each other; the returned reports are in the
/// same order as `inputs`.
#[instrument(skip_all, name = "measure_all")]
pub fn measure_all<I, S, B>(inputs: I) -> Vec<EnergyReport>
where
    I: IntoIterator<Item = (S, B)>,
    S: Into<String> + Send,
    B: AsRef<[u8]> + Send,
{
    let inputs: Vec<(S, B)> = inputs.into_iter().collect();
    debug!("Measuring {} input(s).", inputs.len());

    inputs
        .into_par_iter()
        .map(|(source, sequence)| EnergyReport::measure(source, sequence.as_ref()))
        .collect()
}

pub fn total_energy(reports: &[EnergyReport]) -> usize {
    reports
        .iter()
        .fold(0usize, |acc, report| acc.saturating_add(report.energy))
}

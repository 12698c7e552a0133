use super::IsochroneError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// aligns bin semantics across isochrones whose time-per-bin granularity
/// differs, mapping a bin index to the maximum observed value for that
/// index. bin indices absent from the map compare by their raw value.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
#[serde(transparent)]
pub struct BinNormalizationMap(pub HashMap<u64, f64>);

impl BinNormalizationMap {
    /// confirms every normalization value is a finite non-negative number
    pub fn validate(&self) -> Result<(), IsochroneError> {
        for (bin_index, value) in self.0.iter() {
            if !value.is_finite() || *value < 0.0 {
                return Err(IsochroneError::InvalidNormalizationValue {
                    bin_index: *bin_index,
                    value: *value,
                });
            }
        }
        Ok(())
    }

    /// the comparison key used to order origins competing for a cell
    pub fn comparison_key(&self, bin_index: u64) -> f64 {
        self.0
            .get(&bin_index)
            .copied()
            .unwrap_or(bin_index as f64)
    }
}

use super::{IsochroneError, OriginId, TimeBin};
use h3o::CellIndex;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// one saved reachability result for a single origin.
///
/// created when the user saves a computed isochrone and immutable
/// thereafter; the engine only ever holds read-only views of these.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct SavedIsochrone {
    pub origin_id: OriginId,
    pub bins: Vec<TimeBin>,
}

impl SavedIsochrone {
    pub fn new(origin_id: OriginId, bins: Vec<TimeBin>) -> SavedIsochrone {
        SavedIsochrone { origin_id, bins }
    }

    /// confirms the bin sequence is strictly ascending and that no cell
    /// appears in more than one bin.
    pub fn validate(&self) -> Result<(), IsochroneError> {
        for (prev, next) in self.bins.iter().tuple_windows() {
            if next.bin_index <= prev.bin_index {
                return Err(IsochroneError::NonAscendingBinIndex {
                    origin_id: self.origin_id.clone(),
                    prev: prev.bin_index,
                    next: next.bin_index,
                });
            }
        }
        let mut first_seen: HashMap<CellIndex, u64> = HashMap::new();
        for bin in self.bins.iter() {
            for cell in bin.cells.iter() {
                if let Some(first_bin) = first_seen.insert(*cell, bin.bin_index) {
                    return Err(IsochroneError::DuplicateCell {
                        origin_id: self.origin_id.clone(),
                        cell: *cell,
                        first_bin,
                        second_bin: bin.bin_index,
                    });
                }
            }
        }
        Ok(())
    }
}

/// validates a batch of saved isochrones, failing on the first malformed
/// entry rather than producing a silently wrong result downstream.
pub fn validate_isochrones(isochrones: &[SavedIsochrone]) -> Result<(), IsochroneError> {
    for isochrone in isochrones.iter() {
        isochrone.validate()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use h3o::{LatLng, Resolution};
    use std::collections::HashSet;

    fn cell(lat: f64, lng: f64) -> CellIndex {
        LatLng::new(lat, lng)
            .expect("test invariant failed: invalid coordinate")
            .to_cell(Resolution::Eight)
    }

    #[test]
    fn test_validate_accepts_well_formed_isochrone() {
        let isochrone = SavedIsochrone::new(
            OriginId::from("a"),
            vec![
                TimeBin::new(0, HashSet::from([cell(39.7, -105.0)])),
                TimeBin::new(1, HashSet::from([cell(39.8, -105.1)])),
            ],
        );
        assert!(isochrone.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_cell_across_bins() {
        let repeated = cell(39.7, -105.0);
        let isochrone = SavedIsochrone::new(
            OriginId::from("a"),
            vec![
                TimeBin::new(0, HashSet::from([repeated])),
                TimeBin::new(1, HashSet::from([repeated, cell(39.8, -105.1)])),
            ],
        );
        let error = isochrone
            .validate()
            .expect_err("expected duplicate cell to fail validation");
        match error {
            IsochroneError::DuplicateCell {
                first_bin,
                second_bin,
                ..
            } => {
                assert_eq!(first_bin, 0);
                assert_eq!(second_bin, 1);
            }
            other => panic!("expected DuplicateCell error, found {}", other),
        }
    }

    #[test]
    fn test_validate_rejects_non_ascending_bins() {
        let isochrone = SavedIsochrone::new(
            OriginId::from("a"),
            vec![
                TimeBin::new(2, HashSet::from([cell(39.7, -105.0)])),
                TimeBin::new(2, HashSet::from([cell(39.8, -105.1)])),
            ],
        );
        let error = isochrone
            .validate()
            .expect_err("expected repeated bin index to fail validation");
        assert!(matches!(
            error,
            IsochroneError::NonAscendingBinIndex { prev: 2, next: 2, .. }
        ));
    }
}

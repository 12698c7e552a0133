use crate::model::{
    validate_isochrones, BinNormalizationMap, CatchmentAssignment, CellAssignment,
    IsochroneError, SavedIsochrone,
};
use h3o::CellIndex;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// partitions the union of all reached cells into origin-exclusive
/// catchments, assigning each cell to the origin that reaches it with the
/// smallest comparison key.
///
/// the comparison key is the normalized value from `max_bin_by_index`
/// when supplied, otherwise the raw bin index. when two origins tie on
/// the minimal key for a cell, the origin appearing first in the input
/// sequence wins.
///
/// # Arguments
///
/// * `isochrones` - the saved isochrones competing for coverage
/// * `max_bin_by_index` - optional normalization across isochrones whose
///   time-per-bin granularity differs
///
/// # Returns
///
/// A [`CatchmentAssignment`] with exactly one entry per reached cell, or
/// an error when any input is malformed.
pub fn compute_system_optimal_catchments(
    isochrones: &[SavedIsochrone],
    max_bin_by_index: Option<&BinNormalizationMap>,
) -> Result<CatchmentAssignment, IsochroneError> {
    validate_isochrones(isochrones)?;
    if let Some(normalization) = max_bin_by_index {
        normalization.validate()?;
    }

    let mut best: BTreeMap<CellIndex, (f64, CellAssignment)> = BTreeMap::new();
    for isochrone in isochrones.iter() {
        for bin in isochrone.bins.iter() {
            let key = match max_bin_by_index {
                Some(normalization) => normalization.comparison_key(bin.bin_index),
                None => bin.bin_index as f64,
            };
            for cell in bin.cells.iter() {
                let challenger_wins = match best.get(cell) {
                    // first-input origin keeps the cell on a tie
                    Some((incumbent_key, _)) => key.total_cmp(incumbent_key) == Ordering::Less,
                    None => true,
                };
                if challenger_wins {
                    best.insert(
                        *cell,
                        (
                            key,
                            CellAssignment {
                                origin_id: isochrone.origin_id.clone(),
                                bin_index: bin.bin_index,
                            },
                        ),
                    );
                }
            }
        }
    }

    log::debug!(
        "system-optimal assignment over {} isochrones covers {} cells",
        isochrones.len(),
        best.len()
    );
    let assignment = best
        .into_iter()
        .map(|(cell, (_, assignment))| (cell, assignment))
        .collect();
    Ok(CatchmentAssignment(assignment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OriginId, TimeBin};
    use h3o::{LatLng, Resolution};
    use std::collections::HashMap;

    fn cell(lat: f64, lng: f64) -> CellIndex {
        LatLng::new(lat, lng)
            .expect("test invariant failed: invalid coordinate")
            .to_cell(Resolution::Eight)
    }

    fn isochrone(origin: &str, bins: Vec<(u64, Vec<CellIndex>)>) -> SavedIsochrone {
        let bins = bins
            .into_iter()
            .map(|(bin_index, cells)| TimeBin::new(bin_index, cells.into_iter().collect()))
            .collect();
        SavedIsochrone::new(OriginId::from(origin), bins)
    }

    fn assert_assigned(
        assignment: &CatchmentAssignment,
        cell: &CellIndex,
        origin: &str,
        bin_index: u64,
    ) {
        let found = assignment
            .get(cell)
            .unwrap_or_else(|| panic!("expected an assignment for cell {}", cell));
        assert_eq!(found.origin_id, OriginId::from(origin));
        assert_eq!(found.bin_index, bin_index);
    }

    #[test]
    fn test_assignment_with_tie_break_to_first_input() {
        let (c1, c2, c3, c4) = (
            cell(39.70, -105.00),
            cell(39.80, -105.10),
            cell(39.90, -105.20),
            cell(40.00, -105.30),
        );
        let a = isochrone("a", vec![(0, vec![c1, c2]), (1, vec![c3])]);
        let b = isochrone("b", vec![(0, vec![c2]), (1, vec![c3, c4])]);

        let assignment = compute_system_optimal_catchments(&[a, b], None)
            .expect("test invariant failed: assignment errored");

        assert_eq!(assignment.len(), 4);
        assert_assigned(&assignment, &c1, "a", 0);
        assert_assigned(&assignment, &c2, "a", 0);
        assert_assigned(&assignment, &c3, "a", 1);
        assert_assigned(&assignment, &c4, "b", 1);
    }

    #[test]
    fn test_faster_origin_wins_regardless_of_input_order() {
        let contested = cell(39.70, -105.00);
        let a = isochrone("a", vec![(2, vec![contested])]);
        let b = isochrone("b", vec![(1, vec![contested])]);

        let assignment = compute_system_optimal_catchments(&[a, b], None)
            .expect("test invariant failed: assignment errored");
        assert_assigned(&assignment, &contested, "b", 1);
    }

    #[test]
    fn test_normalization_map_can_reverse_a_winner() {
        let contested = cell(39.70, -105.00);
        // origin a reaches the cell at bin 1, origin b at bin 2. with
        // 10-minute bins for a and 3-minute bins for b, b is faster.
        let a = isochrone("a", vec![(1, vec![contested])]);
        let b = isochrone("b", vec![(2, vec![contested])]);
        let normalization = BinNormalizationMap(HashMap::from([(1, 10.0), (2, 6.0)]));

        let raw = compute_system_optimal_catchments(&[a.clone(), b.clone()], None)
            .expect("test invariant failed: assignment errored");
        assert_assigned(&raw, &contested, "a", 1);

        let normalized = compute_system_optimal_catchments(&[a, b], Some(&normalization))
            .expect("test invariant failed: assignment errored");
        assert_assigned(&normalized, &contested, "b", 2);
    }

    #[test]
    fn test_minimality_of_assigned_keys() {
        let cells = vec![
            cell(39.70, -105.00),
            cell(39.80, -105.10),
            cell(39.90, -105.20),
        ];
        let a = isochrone("a", vec![(0, vec![cells[0]]), (2, vec![cells[1], cells[2]])]);
        let b = isochrone("b", vec![(1, vec![cells[0], cells[1]]), (3, vec![cells[2]])]);
        let inputs = vec![a, b];

        let assignment = compute_system_optimal_catchments(&inputs, None)
            .expect("test invariant failed: assignment errored");

        for (cell, assigned) in assignment.0.iter() {
            for isochrone in inputs.iter() {
                for bin in isochrone.bins.iter() {
                    if bin.cells.contains(cell) {
                        assert!(
                            assigned.bin_index <= bin.bin_index,
                            "cell {} assigned at bin {} but {} reaches it at bin {}",
                            cell,
                            assigned.bin_index,
                            isochrone.origin_id,
                            bin.bin_index
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_empty_input_yields_empty_assignment() {
        let assignment = compute_system_optimal_catchments(&[], None)
            .expect("test invariant failed: assignment errored");
        assert!(assignment.is_empty());
    }

    #[test]
    fn test_deterministic_across_reruns() {
        let (c1, c2) = (cell(39.70, -105.00), cell(39.80, -105.10));
        let inputs = vec![
            isochrone("a", vec![(0, vec![c1, c2])]),
            isochrone("b", vec![(0, vec![c1, c2])]),
        ];
        let first = compute_system_optimal_catchments(&inputs, None)
            .expect("test invariant failed: assignment errored");
        let second = compute_system_optimal_catchments(&inputs, None)
            .expect("test invariant failed: assignment errored");
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_isochrone_fails_fast() {
        let repeated = cell(39.70, -105.00);
        let bad = isochrone("a", vec![(0, vec![repeated]), (1, vec![repeated])]);
        let error = compute_system_optimal_catchments(&[bad], None)
            .expect_err("expected duplicate cell to fail the computation");
        assert!(matches!(error, IsochroneError::DuplicateCell { .. }));
    }
}

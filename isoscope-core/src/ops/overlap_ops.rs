use crate::model::{
    validate_isochrones, IsochroneError, OriginId, OverlapReport, SavedIsochrone,
};
use h3o::CellIndex;
use std::collections::{BTreeMap, BTreeSet};

/// finds, per time bin index, the cells reachable from two or more
/// origins along with the origins that reach them.
///
/// pure and commutative in the order of `isochrones`; an empty input
/// yields an empty report.
///
/// # Arguments
///
/// * `isochrones` - the saved isochrones to compare
///
/// # Returns
///
/// An [`OverlapReport`] restricted to contested cells, or an error when
/// any input isochrone is malformed.
pub fn compute_overlap_per_bin(
    isochrones: &[SavedIsochrone],
) -> Result<OverlapReport, IsochroneError> {
    validate_isochrones(isochrones)?;

    let mut reached: BTreeMap<u64, BTreeMap<CellIndex, BTreeSet<OriginId>>> = BTreeMap::new();
    for isochrone in isochrones.iter() {
        for bin in isochrone.bins.iter() {
            let by_cell = reached.entry(bin.bin_index).or_default();
            for cell in bin.cells.iter() {
                by_cell
                    .entry(*cell)
                    .or_default()
                    .insert(isochrone.origin_id.clone());
            }
        }
    }

    let mut report: BTreeMap<u64, BTreeMap<CellIndex, BTreeSet<OriginId>>> = BTreeMap::new();
    for (bin_index, by_cell) in reached.into_iter() {
        let contested = by_cell
            .into_iter()
            .filter(|(_, origins)| origins.len() >= 2)
            .collect::<BTreeMap<_, _>>();
        if !contested.is_empty() {
            report.insert(bin_index, contested);
        }
    }

    log::debug!(
        "overlap aggregation over {} isochrones produced {} contested bin indices",
        isochrones.len(),
        report.len()
    );
    Ok(OverlapReport(report))
}

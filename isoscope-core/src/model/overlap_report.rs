use super::OriginId;
use h3o::CellIndex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// cells reachable from two or more origins, grouped by time bin index.
///
/// every listed cell carries at least two contributing origins; bin
/// indices absent from all inputs have no entry. ordered collections keep
/// iteration and serialization stable for a given input.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct OverlapReport(pub BTreeMap<u64, BTreeMap<CellIndex, BTreeSet<OriginId>>>);

impl OverlapReport {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// the origins contesting a cell at some bin index, if any
    pub fn origins_at(&self, bin_index: u64, cell: &CellIndex) -> Option<&BTreeSet<OriginId>> {
        self.0.get(&bin_index).and_then(|by_cell| by_cell.get(cell))
    }
}

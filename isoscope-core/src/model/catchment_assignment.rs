use super::OriginId;
use h3o::CellIndex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// the winning origin for one cell, with the raw bin index at which that
/// origin first reaches it.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CellAssignment {
    pub origin_id: OriginId,
    pub bin_index: u64,
}

/// partition of all reached cells into origin-exclusive catchments.
///
/// exactly one entry per cell in the union of the input isochrones; cells
/// never reached by any origin are absent.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct CatchmentAssignment(pub BTreeMap<CellIndex, CellAssignment>);

impl CatchmentAssignment {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, cell: &CellIndex) -> Option<&CellAssignment> {
        self.0.get(cell)
    }
}

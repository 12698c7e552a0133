use h3o::CellIndex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// one travel-time threshold's reachable cells within an isochrone.
///
/// bins follow the first-reachability convention: a cell belongs to the
/// bin at which it first becomes reachable, never to a later one.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct TimeBin {
    pub bin_index: u64,
    pub cells: HashSet<CellIndex>,
}

impl TimeBin {
    pub fn new(bin_index: u64, cells: HashSet<CellIndex>) -> TimeBin {
        TimeBin { bin_index, cells }
    }
}

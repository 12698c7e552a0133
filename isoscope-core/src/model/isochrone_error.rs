use super::OriginId;
use h3o::CellIndex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IsochroneError {
    #[error("isochrone for origin '{origin_id}' lists cell {cell} in bin {first_bin} and again in bin {second_bin}, a cell may only appear in its bin of first reachability")]
    DuplicateCell {
        origin_id: OriginId,
        cell: CellIndex,
        first_bin: u64,
        second_bin: u64,
    },
    #[error("isochrone for origin '{origin_id}' has non-ascending bin indices, found {next} after {prev}")]
    NonAscendingBinIndex {
        origin_id: OriginId,
        prev: u64,
        next: u64,
    },
    #[error("normalization value for bin index {bin_index} must be a finite non-negative number, found {value}")]
    InvalidNormalizationValue { bin_index: u64, value: f64 },
}

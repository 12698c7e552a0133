use super::GridError;
use geo::{MultiPolygon, Polygon};
use h3o::CellIndex;

/// narrow capability surface over the spatial grid library.
///
/// implementations are stateless pure functions over their arguments; the
/// engine holds no grid state between invocations, and computations can
/// be tested against a stub implementation.
pub trait GridModel: Send + Sync {
    /// boundary of one grid cell as a polygon in WGS84 coordinates
    fn cell_boundary(&self, cell: CellIndex) -> Result<Polygon, GridError>;

    /// surface area of one grid cell in square kilometers
    fn cell_area_km2(&self, cell: CellIndex) -> Result<f64, GridError>;

    /// the cells at this grid's resolution intersecting a polygon extent
    fn cells_within(&self, extent: &Polygon) -> Result<Vec<CellIndex>, GridError>;

    /// union of cell boundaries as a single dissolved geometry
    fn dissolve(&self, cells: &[CellIndex]) -> Result<MultiPolygon, GridError>;
}

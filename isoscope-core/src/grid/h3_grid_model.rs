use super::{GridError, GridModel};
use geo::{LineString, MultiPolygon, Polygon};
use h3o::geom::{ContainmentMode, SolventBuilder, TilerBuilder};
use h3o::{CellIndex, Resolution};
use itertools::Itertools;

/// h3-backed grid capability at a fixed cell resolution
#[derive(Clone, Copy, Debug)]
pub struct H3GridModel {
    resolution: Resolution,
}

impl H3GridModel {
    pub fn new(resolution: Resolution) -> H3GridModel {
        H3GridModel { resolution }
    }
}

impl TryFrom<u8> for H3GridModel {
    type Error = GridError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let resolution =
            Resolution::try_from(value).map_err(|_| GridError::InvalidResolution(value))?;
        Ok(H3GridModel::new(resolution))
    }
}

impl GridModel for H3GridModel {
    fn cell_boundary(&self, cell: CellIndex) -> Result<Polygon, GridError> {
        let line: LineString = cell.boundary().into();
        Ok(Polygon::new(line, vec![]))
    }

    fn cell_area_km2(&self, cell: CellIndex) -> Result<f64, GridError> {
        Ok(cell.area_km2())
    }

    fn cells_within(&self, extent: &Polygon) -> Result<Vec<CellIndex>, GridError> {
        let mut tiler = TilerBuilder::new(self.resolution)
            .containment_mode(ContainmentMode::IntersectsBoundary)
            .build();
        tiler.add(extent.clone()).map_err(|e| {
            GridError::TilingError(format!("failure adding extent to h3 tiler: {e}"))
        })?;
        Ok(tiler.into_coverage().collect_vec())
    }

    fn dissolve(&self, cells: &[CellIndex]) -> Result<MultiPolygon, GridError> {
        let solvent = SolventBuilder::new().build();
        solvent
            .dissolve(cells.iter().copied())
            .map_err(|e| GridError::DissolveError {
                count: cells.len(),
                error: format!("{e}"),
            })
    }
}

use crate::grid::{GridError, GridModel};
use crate::model::{CatchmentAssignment, OriginId};
use geo::MultiPolygon;
use h3o::CellIndex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// per-origin rollup of an exclusive catchment
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CatchmentSummary {
    pub origin_id: OriginId,
    pub cell_count: usize,
    pub area_km2: f64,
    pub min_bin_index: u64,
    pub max_bin_index: u64,
}

/// summarizes a catchment assignment per origin, sorted by origin id.
pub fn summarize_catchments(
    assignment: &CatchmentAssignment,
    grid: &dyn GridModel,
) -> Result<Vec<CatchmentSummary>, GridError> {
    let mut summaries: Vec<CatchmentSummary> = vec![];
    for (origin_id, cells) in group_by_origin(assignment).into_iter() {
        let mut area_km2 = 0.0;
        let mut min_bin_index = u64::MAX;
        let mut max_bin_index = 0;
        for (cell, bin_index) in cells.iter() {
            area_km2 += grid.cell_area_km2(*cell)?;
            min_bin_index = min_bin_index.min(*bin_index);
            max_bin_index = max_bin_index.max(*bin_index);
        }
        summaries.push(CatchmentSummary {
            origin_id,
            cell_count: cells.len(),
            area_km2,
            min_bin_index,
            max_bin_index,
        });
    }
    Ok(summaries)
}

/// dissolves each origin's exclusive cells into a single service-area
/// geometry, sorted by origin id.
pub fn catchment_geometry(
    assignment: &CatchmentAssignment,
    grid: &dyn GridModel,
) -> Result<Vec<(OriginId, MultiPolygon)>, GridError> {
    let mut geometries: Vec<(OriginId, MultiPolygon)> = vec![];
    for (origin_id, cells) in group_by_origin(assignment).into_iter() {
        let cell_ids = cells.iter().map(|(cell, _)| *cell).collect::<Vec<_>>();
        let geometry = grid.dissolve(&cell_ids)?;
        geometries.push((origin_id, geometry));
    }
    Ok(geometries)
}

fn group_by_origin(
    assignment: &CatchmentAssignment,
) -> BTreeMap<OriginId, Vec<(CellIndex, u64)>> {
    let mut by_origin: BTreeMap<OriginId, Vec<(CellIndex, u64)>> = BTreeMap::new();
    for (cell, cell_assignment) in assignment.0.iter() {
        by_origin
            .entry(cell_assignment.origin_id.clone())
            .or_default()
            .push((*cell, cell_assignment.bin_index));
    }
    by_origin
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellAssignment;
    use geo::polygon;
    use geo::Polygon;
    use h3o::{LatLng, Resolution};

    /// grid stub with a fixed per-cell area and square geometries
    struct StubGrid;

    impl GridModel for StubGrid {
        fn cell_boundary(&self, _cell: CellIndex) -> Result<Polygon, GridError> {
            Ok(polygon![
                (x: 0.0, y: 0.0),
                (x: 1.0, y: 0.0),
                (x: 1.0, y: 1.0),
                (x: 0.0, y: 1.0),
            ])
        }

        fn cell_area_km2(&self, _cell: CellIndex) -> Result<f64, GridError> {
            Ok(2.0)
        }

        fn cells_within(&self, _extent: &Polygon) -> Result<Vec<CellIndex>, GridError> {
            Ok(vec![])
        }

        fn dissolve(&self, cells: &[CellIndex]) -> Result<MultiPolygon, GridError> {
            let polygons = cells
                .iter()
                .map(|cell| self.cell_boundary(*cell))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(MultiPolygon::new(polygons))
        }
    }

    fn cell(lat: f64, lng: f64) -> CellIndex {
        LatLng::new(lat, lng)
            .expect("test invariant failed: invalid coordinate")
            .to_cell(Resolution::Eight)
    }

    fn assignment() -> CatchmentAssignment {
        let mut entries = BTreeMap::new();
        entries.insert(
            cell(39.70, -105.00),
            CellAssignment {
                origin_id: OriginId::from("a"),
                bin_index: 0,
            },
        );
        entries.insert(
            cell(39.80, -105.10),
            CellAssignment {
                origin_id: OriginId::from("a"),
                bin_index: 2,
            },
        );
        entries.insert(
            cell(39.90, -105.20),
            CellAssignment {
                origin_id: OriginId::from("b"),
                bin_index: 1,
            },
        );
        CatchmentAssignment(entries)
    }

    #[test]
    fn test_summaries_per_origin() {
        let summaries = summarize_catchments(&assignment(), &StubGrid)
            .expect("test invariant failed: summary errored");
        assert_eq!(summaries.len(), 2);

        assert_eq!(summaries[0].origin_id, OriginId::from("a"));
        assert_eq!(summaries[0].cell_count, 2);
        assert_eq!(summaries[0].area_km2, 4.0);
        assert_eq!(summaries[0].min_bin_index, 0);
        assert_eq!(summaries[0].max_bin_index, 2);

        assert_eq!(summaries[1].origin_id, OriginId::from("b"));
        assert_eq!(summaries[1].cell_count, 1);
        assert_eq!(summaries[1].area_km2, 2.0);
    }

    #[test]
    fn test_geometry_per_origin() {
        let geometries = catchment_geometry(&assignment(), &StubGrid)
            .expect("test invariant failed: geometry errored");
        assert_eq!(geometries.len(), 2);
        assert_eq!(geometries[0].0, OriginId::from("a"));
        assert_eq!(geometries[0].1 .0.len(), 2);
        assert_eq!(geometries[1].0, OriginId::from("b"));
        assert_eq!(geometries[1].1 .0.len(), 1);
    }

    #[test]
    fn test_empty_assignment() {
        let summaries = summarize_catchments(&CatchmentAssignment::default(), &StubGrid)
            .expect("test invariant failed: summary errored");
        assert!(summaries.is_empty());
    }
}

use super::AppError;
use geo::{Centroid, Geometry, Polygon};
use isoscope_core::grid::{GridModel, H3GridModel};
use serde_json::{json, Value};
use wkt::{ToWkt, TryFromWkt};

/// tiles a polygonal extent into grid rows, one per cell. useful for
/// constructing isochrone fixtures and comparison layers over an area of
/// interest.
pub fn generate_grid_rows(extent: &Geometry, grid: &H3GridModel) -> Result<Vec<Value>, AppError> {
    match extent {
        Geometry::Polygon(polygon) => {
            let cells = grid.cells_within(polygon)?;
            cells
                .into_iter()
                .map(|cell| {
                    let boundary = grid.cell_boundary(cell)?;
                    create_grid_row(cell.to_string(), &boundary)
                })
                .collect::<Result<Vec<_>, _>>()
        }
        Geometry::MultiPolygon(mp) => {
            log::info!(
                "input MULTIPOLYGON has {} polygons to generate grid",
                mp.0.len()
            );
            let nested = mp
                .into_iter()
                .map(|p| generate_grid_rows(&Geometry::Polygon(p.clone()), grid))
                .collect::<Result<Vec<_>, _>>()?;
            let result = nested.into_iter().flatten().collect::<Vec<_>>();
            Ok(result)
        }
        _ => Err(AppError::InvalidWkt(String::from(
            "unsupported extent geometry type, must be polygonal",
        ))),
    }
}

/// reads a WKT geometry from a file
pub fn read_wkt_extent(path: &str) -> Result<Geometry, AppError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| AppError::FileReadError(path.to_string(), e))?;
    Geometry::try_from_wkt_str(contents.trim()).map_err(|e| AppError::InvalidWkt(format!("{e}")))
}

fn create_grid_row(grid_id: String, boundary: &Polygon) -> Result<Value, AppError> {
    let centroid = boundary.centroid().ok_or_else(|| {
        AppError::InternalError(format!(
            "unable to retrieve centroid of polygon: {}",
            boundary.to_wkt()
        ))
    })?;
    Ok(json!({
        "grid_id": grid_id,
        "origin_x": centroid.x(),
        "origin_y": centroid.y(),
        "geometry": Geometry::Polygon(boundary.clone()).to_wkt().to_string(),
    }))
}

use geo::MultiPolygon;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use wkt::ToWkt;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CatchmentGeometryFormat {
    Wkt,
    Wkb,
    #[default]
    GeoJson,
}

impl TryFrom<&str> for CatchmentGeometryFormat {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().trim() {
            "wkt" => Ok(Self::Wkt),
            "wkb" => Ok(Self::Wkb),
            "geojson" => Ok(Self::GeoJson),
            _ => Err(format!("unknown catchment geometry format '{value}'")),
        }
    }
}

impl std::fmt::Display for CatchmentGeometryFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CatchmentGeometryFormat::Wkt => "wkt",
            CatchmentGeometryFormat::Wkb => "wkb",
            CatchmentGeometryFormat::GeoJson => "geojson",
        };
        write!(f, "{s}")
    }
}

impl CatchmentGeometryFormat {
    pub fn serialize(&self, geometry: &MultiPolygon) -> Result<Value, String> {
        match self {
            CatchmentGeometryFormat::Wkt => {
                let out = geometry.to_wkt().to_string();
                Ok(json![out])
            }
            CatchmentGeometryFormat::Wkb => {
                let mut out_bytes: Vec<u8> = vec![];
                let geom = geo::Geometry::MultiPolygon(geometry.clone());
                wkb::writer::write_geometry(
                    &mut out_bytes,
                    &geom,
                    &wkb::writer::WriteOptions {
                        endianness: wkb::Endianness::BigEndian,
                    },
                )
                .map_err(|e| format!("failed to write geometry as WKB: {e}"))?;

                let output = out_bytes
                    .iter()
                    .map(|b| format!("{b:02X?}"))
                    .collect::<Vec<String>>()
                    .join("");
                Ok(json![output])
            }
            CatchmentGeometryFormat::GeoJson => {
                let geometry =
                    geojson::Geometry::from(&geo::Geometry::MultiPolygon(geometry.clone()));
                let feature = geojson::Feature {
                    bbox: None,
                    geometry: Some(geometry),
                    id: None,
                    properties: None,
                    foreign_members: None,
                };
                let result = serde_json::to_value(feature).map_err(|e| e.to_string())?;
                Ok(result)
            }
        }
    }
}

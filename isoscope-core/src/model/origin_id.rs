use serde::{Deserialize, Serialize};

/// identifier of the origin a saved isochrone was computed from.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct OriginId(String);

impl std::fmt::Display for OriginId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OriginId {
    fn from(value: &str) -> Self {
        OriginId(value.to_string())
    }
}

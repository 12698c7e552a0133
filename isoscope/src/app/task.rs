use isoscope_core::model::{BinNormalizationMap, SavedIsochrone};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// the computations the background worker can run
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Overlap,
    SystemOptimal,
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TaskType::Overlap => "overlap",
            TaskType::SystemOptimal => "system_optimal",
        };
        write!(f, "{s}")
    }
}

/// a task descriptor submitted by the interactive caller
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct TaskRequest {
    /// caller-supplied correlation token, echoed verbatim in the response
    pub id: String,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    #[serde(default)]
    pub payload: TaskPayload,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct TaskPayload {
    #[serde(default)]
    pub saved_isochrones: Vec<SavedIsochrone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bin_by_index: Option<BinNormalizationMap>,
}

/// exactly one response per request, correlated by id
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct TaskResponse {
    pub id: String,
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TaskResponse {
    pub fn success(id: String, result: Value) -> TaskResponse {
        TaskResponse {
            id,
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: String, error: String) -> TaskResponse {
        TaskResponse {
            id,
            ok: false,
            result: None,
            error: Some(error),
        }
    }
}

use super::task::{TaskRequest, TaskResponse, TaskType};
use super::AppError;
use isoscope_core::ops::{compute_overlap_per_bin, compute_system_optimal_catchments};
use serde_json::Value;

/// runs one task descriptor to completion.
///
/// every failure mode, a malformed descriptor, an unknown task type, or a
/// computation error, is mapped into a correlated failure response; this
/// function never panics outward and never drops a request.
pub fn run_task(descriptor: &Value) -> TaskResponse {
    let id = correlation_id(descriptor);
    let request: TaskRequest = match serde_json::from_value(descriptor.clone()) {
        Ok(request) => request,
        Err(e) => {
            return TaskResponse::failure(id, format!("invalid task descriptor: {e}"));
        }
    };
    log::debug!("running task '{}' of type {}", request.id, request.task_type);
    match run_operation(&request) {
        Ok(result) => TaskResponse::success(request.id, result),
        Err(e) => TaskResponse::failure(request.id, e.to_string()),
    }
}

/// the caller-supplied correlation token, or empty when the descriptor
/// does not carry one
pub fn correlation_id(descriptor: &Value) -> String {
    descriptor
        .get("id")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

fn run_operation(request: &TaskRequest) -> Result<Value, AppError> {
    let payload = &request.payload;
    match request.task_type {
        TaskType::Overlap => {
            let report = compute_overlap_per_bin(&payload.saved_isochrones)?;
            let value = serde_json::to_value(report)?;
            Ok(value)
        }
        TaskType::SystemOptimal => {
            let assignment = compute_system_optimal_catchments(
                &payload.saved_isochrones,
                payload.max_bin_by_index.as_ref(),
            )?;
            let value = serde_json::to_value(assignment)?;
            Ok(value)
        }
    }
}

use super::task::{TaskResponse, TaskType};
use super::{AppConfig, AppError, ComputeWorker};
use isoscope_core::grid::H3GridModel;
use isoscope_core::model::CatchmentAssignment;
use isoscope_core::ops::{catchment_geometry, summarize_catchments};
use itertools::Itertools;
use serde_json::{json, Value};

/// reads task descriptors from a file holding either a JSON array or
/// newline-delimited JSON values
pub fn read_task_descriptors(path: &str, newline_delimited: bool) -> Result<Vec<Value>, AppError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| AppError::FileReadError(path.to_string(), e))?;
    parse_task_descriptors(&contents, newline_delimited)
}

pub fn parse_task_descriptors(
    contents: &str,
    newline_delimited: bool,
) -> Result<Vec<Value>, AppError> {
    if newline_delimited {
        contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .map_err(|e| AppError::InvalidTaskDescriptor(format!("{e}")))
            })
            .collect()
    } else {
        let value: Value = serde_json::from_str(contents)
            .map_err(|e| AppError::InvalidTaskDescriptor(format!("{e}")))?;
        match value {
            Value::Array(descriptors) => Ok(descriptors),
            other => Ok(vec![other]),
        }
    }
}

/// runs every descriptor through a background worker, preserving
/// submission order in the responses.
pub fn run_batch(descriptors: &[Value]) -> Result<Vec<TaskResponse>, AppError> {
    let worker = ComputeWorker::spawn();
    for descriptor in descriptors.iter() {
        worker.submit(descriptor.clone())?;
    }
    let mut responses = Vec::with_capacity(descriptors.len());
    for _ in descriptors.iter() {
        responses.push(worker.recv()?);
    }
    worker.join()?;
    Ok(responses)
}

/// derives per-origin geometry rows from each successful system-optimal
/// response, one row per exclusive catchment.
pub fn export_catchment_artifacts(
    descriptors: &[Value],
    responses: &[TaskResponse],
    config: &AppConfig,
) -> Result<Vec<Value>, AppError> {
    let grid = H3GridModel::try_from(config.resolution)?;
    let mut rows: Vec<Value> = vec![];
    for (descriptor, response) in descriptors.iter().zip(responses.iter()) {
        if !response.ok {
            continue;
        }
        let task_type = descriptor
            .get("type")
            .cloned()
            .and_then(|v| serde_json::from_value::<TaskType>(v).ok());
        if task_type != Some(TaskType::SystemOptimal) {
            continue;
        }
        let result = match response.result.as_ref() {
            Some(result) => result,
            None => continue,
        };
        let assignment: CatchmentAssignment = serde_json::from_value(result.clone())?;
        // both are grouped and sorted by origin id, so they line up
        let summaries = summarize_catchments(&assignment, &grid)?;
        let geometries = catchment_geometry(&assignment, &grid)?;
        for (summary, (origin_id, geometry)) in summaries.iter().zip(geometries.iter()) {
            let geometry_value = config
                .geometry_format
                .serialize(geometry)
                .map_err(AppError::InternalError)?;
            rows.push(json!({
                "task_id": response.id,
                "origin_id": origin_id,
                "cell_count": summary.cell_count,
                "area_km2": summary.area_km2,
                "min_bin_index": summary.min_bin_index,
                "max_bin_index": summary.max_bin_index,
                "geometry": geometry_value,
            }));
        }
    }
    Ok(rows)
}

/// serializes values to the output file, or stdout when absent
pub fn write_output(
    values: &[Value],
    output_file: Option<&str>,
    newline_delimited: bool,
) -> Result<(), AppError> {
    let contents = if newline_delimited {
        values.iter().map(|v| v.to_string()).collect_vec().join("\n")
    } else {
        serde_json::to_string_pretty(&values)?
    };
    match output_file {
        Some(path) => std::fs::write(path, contents)
            .map_err(|e| AppError::FileWriteError(path.to_string(), e)),
        None => {
            println!("{contents}");
            Ok(())
        }
    }
}

use super::dispatch;
use super::task::TaskResponse;
use super::AppError;
use serde_json::Value;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::JoinHandle;

/// single background compute thread with FIFO task processing.
///
/// the interactive caller communicates exclusively by message passing:
/// task descriptors cross the request channel as owned values, each
/// producing exactly one correlated response on the response channel, in
/// completion order. a failed or panicking task never terminates the
/// worker; it reports the failure and keeps accepting tasks. there is no
/// cancellation, callers that abandon a computation simply ignore the
/// late response.
pub struct ComputeWorker {
    request_tx: Sender<Value>,
    response_rx: Receiver<TaskResponse>,
    handle: JoinHandle<()>,
}

impl ComputeWorker {
    pub fn spawn() -> ComputeWorker {
        let (request_tx, request_rx) = channel::<Value>();
        let (response_tx, response_rx) = channel::<TaskResponse>();
        let handle = std::thread::spawn(move || worker_loop(request_rx, response_tx));
        ComputeWorker {
            request_tx,
            response_rx,
            handle,
        }
    }

    /// enqueues one task descriptor for background processing
    pub fn submit(&self, descriptor: Value) -> Result<(), AppError> {
        self.request_tx
            .send(descriptor)
            .map_err(|e| AppError::WorkerError(format!("failure submitting task: {e}")))
    }

    /// blocks until the next completed response arrives
    pub fn recv(&self) -> Result<TaskResponse, AppError> {
        self.response_rx
            .recv()
            .map_err(|e| AppError::WorkerError(format!("failure receiving response: {e}")))
    }

    /// stops accepting tasks and waits for the background thread to drain
    pub fn join(self) -> Result<(), AppError> {
        let ComputeWorker {
            request_tx,
            response_rx,
            handle,
        } = self;
        drop(request_tx);
        drop(response_rx);
        handle
            .join()
            .map_err(|_| AppError::WorkerError(String::from("compute thread panicked")))
    }
}

fn worker_loop(request_rx: Receiver<Value>, response_tx: Sender<TaskResponse>) {
    while let Ok(descriptor) = request_rx.recv() {
        let id = dispatch::correlation_id(&descriptor);
        let response = catch_unwind(AssertUnwindSafe(|| dispatch::run_task(&descriptor)))
            .unwrap_or_else(|panic| {
                log::error!("internal fault while computing task '{id}'");
                TaskResponse::failure(
                    id,
                    format!("internal fault while computing task: {}", panic_message(&panic)),
                )
            });
        if response_tx.send(response).is_err() {
            // caller went away, discard remaining work
            break;
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        String::from("unknown panic")
    }
}

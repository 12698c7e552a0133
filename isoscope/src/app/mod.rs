pub mod app_error;
pub mod batch_ops;
pub mod config;
pub mod dispatch;
pub mod grid_ops;
pub mod task;
pub mod worker;

pub use app_error::AppError;
pub use config::AppConfig;
pub use worker::ComputeWorker;

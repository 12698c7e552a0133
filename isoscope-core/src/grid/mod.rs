pub mod geometry_format;
pub mod grid_error;
pub mod grid_model;
pub mod h3_grid_model;

pub use geometry_format::CatchmentGeometryFormat;
pub use grid_error::GridError;
pub use grid_model::GridModel;
pub use h3_grid_model::H3GridModel;

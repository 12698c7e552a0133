use clap::{Parser, Subcommand};
use isoscope::app::{batch_ops, grid_ops, AppConfig, AppError};
use isoscope_core::grid::H3GridModel;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct IsoscopeAppArguments {
    #[command(subcommand)]
    app: App,
}

#[derive(Subcommand)]
pub enum App {
    /// runs a batch of task descriptors through the background compute worker
    Run {
        #[arg(long, help = "path to file of task descriptors")]
        task_file: String,
        #[arg(long, help = "path to TOML file with app parameters")]
        config_file: Option<String>,
        #[arg(long, help = "output path for task responses, stdout when absent")]
        output_file: Option<String>,
        #[arg(long, help = "output path for per-origin catchment geometry rows")]
        geometry_file: Option<String>,
        #[arg(long, help = "treat input and output as newline-delimited JSON")]
        newline_delimited: bool,
    },
    /// tiles a WKT polygon extent into grid cells
    Grid {
        #[arg(long, help = "path to file containing WKT extent")]
        extent_file: String,
        #[arg(long, help = "h3 resolution for generated cells")]
        resolution: u8,
        #[arg(long, help = "output path for grid rows, stdout when absent")]
        output_file: Option<String>,
    },
}

fn main() {
    env_logger::init();
    log::info!("starting app at {}", chrono::Local::now().to_rfc3339());
    let args = IsoscopeAppArguments::parse();
    match run(&args.app) {
        Ok(_) => {}
        Err(e) => log::error!("{e}"),
    }
}

fn run(app: &App) -> Result<(), AppError> {
    match app {
        App::Run {
            task_file,
            config_file,
            output_file,
            geometry_file,
            newline_delimited,
        } => {
            let descriptors = batch_ops::read_task_descriptors(task_file, *newline_delimited)?;
            log::info!(
                "processing {} task descriptors from {}",
                descriptors.len(),
                task_file
            );
            let responses = batch_ops::run_batch(&descriptors)?;

            if let Some(geometry_path) = geometry_file {
                let config = match config_file {
                    None => AppConfig::default(),
                    Some(f) => {
                        log::info!("reading app configuration from {f}");
                        AppConfig::try_from(f.as_str())?
                    }
                };
                let rows =
                    batch_ops::export_catchment_artifacts(&descriptors, &responses, &config)?;
                log::info!(
                    "writing {} catchment geometry rows to {}",
                    rows.len(),
                    geometry_path
                );
                batch_ops::write_output(&rows, Some(geometry_path), *newline_delimited)?;
            }

            let response_values = responses
                .iter()
                .map(serde_json::to_value)
                .collect::<Result<Vec<_>, _>>()?;
            batch_ops::write_output(&response_values, output_file.as_deref(), *newline_delimited)
        }
        App::Grid {
            extent_file,
            resolution,
            output_file,
        } => {
            let extent = grid_ops::read_wkt_extent(extent_file)?;
            let grid = H3GridModel::try_from(*resolution)?;
            let rows = grid_ops::generate_grid_rows(&extent, &grid)?;
            log::info!(
                "generated {} grid rows at resolution {}",
                rows.len(),
                resolution
            );
            batch_ops::write_output(&rows, output_file.as_deref(), true)
        }
    }
}

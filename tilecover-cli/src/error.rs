//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use tilecover::matrix::CatalogError;
use tilecover::request::RequestError;
use tilecover::service::ServiceError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// A command-line value could not be parsed or was out of range
    InvalidArgument(String),
    /// Failed to construct or query a tile service
    Service(ServiceError),
    /// Failed to load the catalog document
    Catalog { path: String, source: CatalogError },
    /// Failed to resolve a tile request
    Request(RequestError),
    /// Failed to serialize results for output
    Output(serde_json::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Service(ServiceError::TileCountExceeded { .. })
            | CliError::Request(RequestError::Service(ServiceError::TileCountExceeded {
                ..
            })) => {
                eprintln!();
                eprintln!("The extent needs more tiles than the request allows. Try:");
                eprintln!("  1. A smaller bounding box");
                eprintln!("  2. A coarser zoom level or smaller output size");
                eprintln!("  3. Raising the cap with --max-tiles");
            }
            CliError::Catalog { .. } => {
                eprintln!();
                eprintln!("The catalog must be a JSON document with \"matrix_sets\" and \"layers\".");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::Service(e) => write!(f, "{}", e),
            CliError::Catalog { path, source } => {
                write!(f, "Failed to load catalog '{}': {}", path, source)
            }
            CliError::Request(e) => write!(f, "{}", e),
            CliError::Output(e) => write!(f, "Failed to serialize output: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Service(e) => Some(e),
            CliError::Catalog { source, .. } => Some(source),
            CliError::Request(e) => Some(e),
            CliError::Output(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ServiceError> for CliError {
    fn from(e: ServiceError) -> Self {
        CliError::Service(e)
    }
}

impl From<RequestError> for CliError {
    fn from(e: RequestError) -> Self {
        CliError::Request(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e)
    }
}

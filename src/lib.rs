pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::HttpCandidateSource;
pub use config::{OutputFormat, TomlConfig};
pub use core::controller::{Controller, ResponsePolicy};
pub use core::pipeline::transform;
pub use domain::model::{Candidate, Group, PageState, PresentationModel};
pub use utils::error::{HiringError, Result};

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};

pub use crate::core::{engine::StitchEngine, footer::FooterPipeline};
pub use utils::error::{Result, StitchError};

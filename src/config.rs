// src/config.rs
use crate::args::Args;
use crate::error::AppError;
pub use ls2_engine::config::{DisplayConfig, DisplayConfigBuilder};

impl TryFrom<&Args> for DisplayConfig {
    type Error = AppError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        DisplayConfigBuilder::default()
            .show_hidden(args.all)
            .numeric_permissions(args.numeric)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}

//! Configuration file parsing and validation

pub mod clangfmt_toml;

pub use clangfmt_toml::{
    ColorOption, Config, FormatConfig, OutputConfig, OutputFormat, SourcesConfig, CONFIG_FILE_NAME,
};

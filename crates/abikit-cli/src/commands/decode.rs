//! Decode command

use std::path::PathBuf;

use clap::Args;
use serde_json::Value;

use crate::commands::{load_interface, parse_hex};
use crate::output::{format_values, token_to_json};
use crate::{config::Config, output::Output, CliError};

/// Decode method output or event data
#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Schema file (JSON)
    #[arg(long)]
    abi: Option<PathBuf>,

    /// Method or event name
    name: String,

    /// Hex-encoded output or event data
    data: String,
}

impl DecodeArgs {
    pub fn execute(self, config: &Config, json: bool) -> Result<(), CliError> {
        let interface = load_interface(self.abi.as_deref(), config)?;
        let data = parse_hex(&self.data)?;
        let values = interface.decode(&self.name, &data)?;

        Output::new(json)
            .field("name", &self.name)
            .field_value("values", Value::Array(values.iter().map(token_to_json).collect()))
            .message(&format_values(&values))
            .print();

        Ok(())
    }
}

//! Encode command

use std::path::PathBuf;

use clap::Args;

use crate::commands::load_interface;
use crate::{config::Config, output::Output, CliError};

/// Encode call data from textual arguments
#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// Schema file (JSON)
    #[arg(long)]
    abi: Option<PathBuf>,

    /// Encode constructor arguments instead of a method call
    #[arg(long)]
    constructor: bool,

    /// Method name followed by its arguments; arguments only with --constructor
    #[arg(
        value_name = "METHOD [ARGS]",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    words: Vec<String>,
}

impl EncodeArgs {
    pub fn execute(self, config: &Config, json: bool) -> Result<(), CliError> {
        let interface = load_interface(self.abi.as_deref(), config)?;

        let (target, data) = if self.constructor {
            let text = self.words.join(" ");
            ("constructor".to_string(), interface.encode_constructor(&text)?)
        } else {
            let (method, args) = self
                .words
                .split_first()
                .ok_or_else(|| CliError::InvalidInput("Missing method name".to_string()))?;
            (method.clone(), interface.encode(method, &args.join(" "))?)
        };

        let encoded = format!("0x{}", hex::encode(&data));
        Output::new(json)
            .field("target", &target)
            .field("data", &encoded)
            .message(&encoded)
            .print();

        Ok(())
    }
}

//! Selector command

use std::path::PathBuf;

use clap::Args;
use serde_json::Value;

use crate::commands::{load_interface, parse_hex};
use crate::output::{format_values, token_to_json};
use crate::{config::Config, output::Output, CliError};

/// Resolve call data to a method; arguments after the selector are decoded too
#[derive(Debug, Args)]
pub struct SelectorArgs {
    /// Schema file (JSON)
    #[arg(long)]
    abi: Option<PathBuf>,

    /// Hex-encoded selector or full call data
    data: String,
}

impl SelectorArgs {
    pub fn execute(self, config: &Config, json: bool) -> Result<(), CliError> {
        let interface = load_interface(self.abi.as_deref(), config)?;
        let data = parse_hex(&self.data)?;

        let method = interface.method_by_selector(&data)?;
        let mut output = Output::new(json)
            .field("name", &method.name)
            .field("signature", &method.signature())
            .field("selector", &format!("0x{}", hex::encode(method.selector())));
        let mut message = method.signature();

        if data.len() > 4 {
            let (_, args) = interface.decode_call(&data)?;
            output = output.field_value(
                "arguments",
                Value::Array(args.iter().map(token_to_json).collect()),
            );
            message = format!("{}\n{}", message, format_values(&args));
        }

        output.message(&message).print();
        Ok(())
    }
}

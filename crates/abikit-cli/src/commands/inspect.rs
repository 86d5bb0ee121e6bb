//! Inspect command

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Args;
use serde_json::{json, Value};

use crate::commands::load_interface;
use crate::{config::Config, output::Output, CliError};

/// List methods with selectors, events with topics, and selector clashes
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Schema file (JSON)
    #[arg(long)]
    abi: Option<PathBuf>,
}

impl InspectArgs {
    pub fn execute(self, config: &Config, json: bool) -> Result<(), CliError> {
        let interface = load_interface(self.abi.as_deref(), config)?;
        let mut message = String::new();

        let constructor = interface.constructor().map(|c| {
            let types: Vec<String> = c.inputs.iter().map(|p| p.kind.to_string()).collect();
            format!("constructor({})", types.join(","))
        });
        if let Some(ctor) = &constructor {
            let _ = writeln!(message, "{}", ctor);
        }

        let mut methods = Vec::new();
        for method in interface.methods().values() {
            let selector = format!("0x{}", hex::encode(method.selector()));
            let _ = writeln!(
                message,
                "{}  {}{}",
                selector,
                method.signature(),
                if method.constant { " [view]" } else { "" }
            );
            methods.push(json!({
                "name": method.name,
                "signature": method.signature(),
                "selector": selector,
                "constant": method.constant,
            }));
        }

        let mut events = Vec::new();
        for event in interface.events().values() {
            let topic = event.topic().to_hex();
            let _ = writeln!(
                message,
                "{}  event {}{}",
                topic,
                event.signature(),
                if event.anonymous { " [anonymous]" } else { "" }
            );
            events.push(json!({
                "name": event.name,
                "signature": event.signature(),
                "topic": topic,
                "anonymous": event.anonymous,
            }));
        }

        let mut clashes = Vec::new();
        for (selector, names) in interface.ambiguous_selectors() {
            let selector = format!("0x{}", hex::encode(selector));
            let _ = writeln!(message, "clash {}: {}", selector, names.join(", "));
            clashes.push(json!({ "selector": selector, "methods": names }));
        }

        Output::new(json)
            .field_value(
                "constructor",
                constructor.map(Value::String).unwrap_or(Value::Null),
            )
            .field_u64("method_count", methods.len() as u64)
            .field_value("methods", Value::Array(methods))
            .field_value("events", Value::Array(events))
            .field_value("clashes", Value::Array(clashes))
            .message(message.trim_end())
            .print();

        Ok(())
    }
}

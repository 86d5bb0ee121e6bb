//! CLI subcommands

pub mod decode;
pub mod encode;
pub mod inspect;
pub mod selector;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use abikit::Interface;

use crate::{config::Config, CliError};

/// Load the schema named by `--abi`, falling back to the configured default
pub fn load_interface(abi: Option<&Path>, config: &Config) -> Result<Interface, CliError> {
    let path: PathBuf = abi
        .map(Path::to_path_buf)
        .or_else(|| config.default_abi.clone())
        .ok_or_else(|| {
            CliError::Config(
                "No schema file; pass --abi or run `abikit config --set-abi FILE`".to_string(),
            )
        })?;

    let file = File::open(&path)?;
    let interface = Interface::from_reader(BufReader::new(file))?;
    tracing::debug!("Loaded schema from {}", path.display());
    Ok(interface)
}

/// Decode a hex string, with or without `0x`
pub fn parse_hex(s: &str) -> Result<Vec<u8>, CliError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    hex::decode(digits).map_err(|e| CliError::InvalidHex(format!("{}: {}", s, e)))
}

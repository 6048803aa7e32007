//! Defines command-line interface options using `clap` for the CyclObsNC inspector.

use clap::Parser;
use std::path::PathBuf;

/// A CLI tool for inspecting CyclObs L2 gridded NetCDF files
#[derive(Parser, Debug)]
#[command(
    version = "0.1.0",
    name = "cyclobs-nc",
    about = "Inspector for CyclObs L2 gridded NetCDF wind products"
)]
pub struct Args {
    /// Path to the CyclObs NetCDF file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Platform shortname override (rs2, s1a, s1b); parsed from the
    /// filename when not given
    #[arg(long)]
    pub platform: Option<String>,

    /// List all variables and global attributes in the file
    #[arg(long)]
    pub list_vars: bool,

    /// Describe a specific variable (data type, shape, and attributes)
    #[arg(long)]
    pub describe: Option<String>,

    /// Print the equirectangular area definition of the grid
    #[arg(long)]
    pub area: bool,

    /// Extract a dataset and print a summary, formatted as <name> or <name>:<file_key>
    #[arg(long, value_parser = parse_dataset_arg)]
    pub dataset: Option<(String, Option<String>)>,

    /// Enable verbose output.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

fn parse_dataset_arg(s: &str) -> Result<(String, Option<String>), String> {
    let parts: Vec<&str> = s.split(':').collect();
    match parts.as_slice() {
        [name] if !name.is_empty() => Ok((name.to_string(), None)),
        [name, file_key] if !name.is_empty() && !file_key.is_empty() => {
            Ok((name.to_string(), Some(file_key.to_string())))
        }
        _ => Err("Invalid format: Expected '<name>' or '<name>:<file_key>'.".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dataset_arg() {
        assert_eq!(
            parse_dataset_arg("wind_speed").unwrap(),
            ("wind_speed".to_string(), None)
        );
        assert_eq!(
            parse_dataset_arg("wind:wind_speed").unwrap(),
            ("wind".to_string(), Some("wind_speed".to_string()))
        );
        assert!(parse_dataset_arg("a:b:c").is_err());
        assert!(parse_dataset_arg("").is_err());
    }
}

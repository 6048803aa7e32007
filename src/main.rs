//! Entry point for the CyclObsNC inspector.
//! Handles CLI parsing, file loading, and dispatches operations like
//! describing variables, extracting datasets, or printing the area definition.

use clap::Parser;
mod cli;

use cli::Args;
use cyclobs_nc::dataset::{DatasetId, DatasetInfo};
use cyclobs_nc::filename::FilenameInfo;
use cyclobs_nc::metadata::{describe_variable, print_metadata, MetadataValue};
use cyclobs_nc::reader::CyclObsFileHandler;
use std::collections::HashMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let no_action = args.describe.is_none() && !args.area && args.dataset.is_none();

    let mut filename_info = FilenameInfo::parse(&args.file)?;
    if let Some(platform) = args.platform {
        filename_info.platform_shortname = platform;
    }

    let handler = CyclObsFileHandler::open(&args.file, filename_info, HashMap::new())?;
    println!("Successfully opened CyclObs file: {}", args.file.display());
    println!(
        "Platform: {} ({}), sensor: {}",
        handler.platform_shortname(),
        handler.platform_name()?,
        handler.sensor_name()
    );
    println!(
        "Acquisition window: {} -> {}",
        handler.start_time(),
        handler.end_time()
    );

    if let Some(var_name) = args.describe {
        describe_variable(handler.nc(), &var_name)?;
    }

    if args.area {
        let area = handler.get_area_def(&DatasetId::new("lat"))?;
        println!("\n{}", area);
        let (res_x, res_y) = area.resolution();
        println!("  Resolution: {:.4} x {:.4} deg/px", res_x, res_y);
    }

    if let Some((name, file_key)) = args.dataset {
        let ds_id = DatasetId::new(name);
        let mut info = DatasetInfo::new();
        if let Some(key) = file_key {
            info = info.with_file_key(key);
        }
        let data = handler.get_dataset(&ds_id, &info)?;
        print_dataset_summary(&ds_id.name, &data, args.verbose);
    }

    // Default action: print file metadata
    if args.list_vars || no_action {
        print_metadata(handler.nc())?;
    }

    Ok(())
}

fn print_dataset_summary(name: &str, data: &cyclobs_nc::dataset::DataArray, verbose: bool) {
    println!("\n Dataset: {}", name);
    println!("================================");
    println!(
        " Shape: {} x {} ({}, {})",
        data.height(),
        data.width(),
        data.dims().0,
        data.dims().1
    );

    let valid: Vec<f64> = data.values.iter().copied().filter(|v| v.is_finite()).collect();
    if valid.is_empty() {
        println!(" No valid (finite) data in dataset");
    } else {
        let min = valid.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = valid.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let mean: f64 = valid.iter().sum::<f64>() / valid.len() as f64;
        println!("   Min: {:.3}", min);
        println!("   Max: {:.3}", max);
        println!("   Mean: {:.3}", mean);
        println!(
            "   Valid elements: {} / {}",
            valid.len(),
            data.values.len()
        );
    }

    if let Some(MetadataValue::Time(time)) = data.attrs.get("time") {
        println!("   Time: {}", time);
    }

    if verbose {
        let mut keys: Vec<&String> = data.attrs.keys().collect();
        keys.sort();
        println!("\n Metadata keys: {:?}", keys);
    }
}

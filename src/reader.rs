//! CyclObs L2 gridded NetCDF file handler
//!
//! IFREMER's CyclObs catalogue provides C-band SAR estimates of the
//! ocean surface wind speed over tropical cyclones, distributed as
//! gridded WGS84 lat/lon NetCDF files. This handler adapts one such
//! file: it extracts named geophysical variables as labeled `(y, x)`
//! arrays with merged metadata, and derives the equirectangular area
//! definition of the grid.
//!
//! Source files store rows south-to-north; every array is flipped
//! vertically on read so row 0 is the northernmost row, and the area
//! extent is computed against the flipped latitude axis to match.

use crate::area::AreaDefinition;
use crate::dataset::{squeeze_to_grid, DataArray, DatasetId, DatasetInfo};
use crate::errors::{CyclObsError, Result};
use crate::filename::FilenameInfo;
use crate::metadata::{Metadata, MetadataValue};
use crate::netcdf_io::NcAccess;
use chrono::{DateTime, Utc};
use log::debug;
use ndarray::{Axis, Ix1};
use std::collections::HashMap;
use std::path::Path;

/// Sensor carried by every CyclObs platform.
const SENSOR_NAME: &str = "sar-c";

/// Human-readable name for a CyclObs platform shortname.
///
/// The catalogue covers exactly three platforms; anything else is a
/// lookup failure.
fn platform_name(shortname: &str) -> Result<&'static str> {
    match shortname {
        "rs2" => Ok("RADARSAT-2"),
        "s1a" => Ok("SENTINEL-1A"),
        "s1b" => Ok("SENTINEL-1B"),
        other => Err(CyclObsError::UnknownPlatform {
            shortname: other.to_string(),
        }),
    }
}

/// Measurement file reader, bound to one open CyclObs product file.
pub struct CyclObsFileHandler {
    nc: NcAccess,
    filename_info: FilenameInfo,
    filetype_info: HashMap<String, String>,
}

impl CyclObsFileHandler {
    /// Open a product file with explicit filename metadata.
    ///
    /// `filetype_info` is the opaque format-level config carried for the
    /// reader interface; nothing in this handler interprets it.
    pub fn open<P: AsRef<Path>>(
        filename: P,
        filename_info: FilenameInfo,
        filetype_info: HashMap<String, String>,
    ) -> Result<Self> {
        let nc = NcAccess::open(filename)?;
        Ok(Self {
            nc,
            filename_info,
            filetype_info,
        })
    }

    /// Open a product file, parsing the filename metadata from its name.
    pub fn from_path<P: AsRef<Path>>(filename: P) -> Result<Self> {
        let filename_info = FilenameInfo::parse(&filename)?;
        Self::open(filename, filename_info, HashMap::new())
    }

    /// Load the dataset designated by the given key from the file.
    ///
    /// Reads the source variable (mask-and-scale applied), derives its
    /// acquisition timestamp from the `time` coordinate, squeezes out
    /// singleton dimensions, flips the grid vertically and attaches the
    /// merged metadata map.
    pub fn get_dataset(&self, ds_id: &DatasetId, info: &DatasetInfo) -> Result<DataArray> {
        debug!("getting data for: {}", ds_id.name);
        let file_key = info.file_key.as_deref().unwrap_or(&ds_id.name);

        let raw = self.nc.read_masked(file_key)?;
        let time = self.acquisition_time(file_key)?;

        let mut grid = squeeze_to_grid(raw)?;
        grid.invert_axis(Axis(0));

        let mut data = DataArray::new(grid);
        data.attrs.insert("time".to_string(), MetadataValue::Time(time));
        // Metadata is computed from the attrs as they stand (so `time`
        // rides along as the merge's first layer) and then replaces them
        // wholesale.
        data.attrs = self.get_metadata(&data, info, file_key)?;
        Ok(data)
    }

    /// Define the equirectangular WGS84 area of the file's grid.
    ///
    /// The area is file-global; the dataset identifier is part of the
    /// reader contract but does not influence the result.
    pub fn get_area_def(&self, _ds_id: &DatasetId) -> Result<AreaDefinition> {
        let lat = self.nc.read_masked("lat")?.into_dimensionality::<Ix1>()?;
        let lon = self.nc.read_masked("lon")?.into_dimensionality::<Ix1>()?;

        let width = self.nc.shape("lon")?[0];
        let height = self.nc.shape("lat")?[0];
        if width == 0 || height == 0 {
            return Err(CyclObsError::Generic(
                "lat/lon coordinate vectors are empty".to_string(),
            ));
        }

        // Flip lat to match the vertical flip applied to data arrays;
        // the extent corners index the flipped axis.
        let mut flip_lat = lat;
        flip_lat.invert_axis(Axis(0));

        let lower_left_x = lon[0];
        let lower_left_y = flip_lat[height - 1];
        let upper_right_x = lon[width - 1];
        let upper_right_y = flip_lat[0];
        let area_extent = (lower_left_x, lower_left_y, upper_right_x, upper_right_y);

        Ok(AreaDefinition::new(
            "cyclobs",
            "CyclObs L2 WGS84",
            "World Geodetic System 1984",
            "EPSG:4326",
            width,
            height,
            area_extent,
        ))
    }

    /// General metadata for a dataset read from this file.
    ///
    /// Layered merge, later layers winning on key collisions: the
    /// array's current attributes, the caller's `info` attributes, the
    /// derived platform/sensor/time fields, the source variable's native
    /// attributes, and finally the file-level attributes nested under
    /// `global_attributes`.
    pub fn get_metadata(
        &self,
        data: &DataArray,
        info: &DatasetInfo,
        file_key: &str,
    ) -> Result<Metadata> {
        let mut metadata = Metadata::new();
        metadata.extend(data.attrs.clone());
        metadata.extend(info.attrs.clone());
        metadata.insert(
            "platform_shortname".to_string(),
            MetadataValue::Text(self.platform_shortname().to_string()),
        );
        metadata.insert(
            "platform_name".to_string(),
            MetadataValue::Text(self.platform_name()?.to_string()),
        );
        metadata.insert(
            "sensor".to_string(),
            MetadataValue::Text(SENSOR_NAME.to_string()),
        );
        metadata.insert(
            "start_time".to_string(),
            MetadataValue::Time(self.start_time()),
        );
        metadata.insert("end_time".to_string(), MetadataValue::Time(self.end_time()));
        for (name, value) in self.nc.variable_attributes(file_key)? {
            metadata.insert(name, MetadataValue::Attr(value));
        }
        metadata.insert(
            "global_attributes".to_string(),
            MetadataValue::Group(self.nc.global_attributes()),
        );
        Ok(metadata)
    }

    /// First sample of the `time` coordinate, stored as an integer
    /// nanosecond epoch value.
    fn acquisition_time(&self, file_key: &str) -> Result<DateTime<Utc>> {
        let nanoseconds = self.nc.first_i64("time").map_err(|e| match e {
            CyclObsError::VariableNotFound { .. } => CyclObsError::MissingCoordinate {
                var: file_key.to_string(),
                coord: "time".to_string(),
            },
            other => other,
        })?;
        Ok(DateTime::from_timestamp_nanos(nanoseconds))
    }

    /// Start timestamp of the dataset, from the filename.
    pub fn start_time(&self) -> DateTime<Utc> {
        self.filename_info.start_time
    }

    /// End timestamp of the dataset; same as `start_time` when the
    /// filename carries no explicit end time.
    pub fn end_time(&self) -> DateTime<Utc> {
        self.filename_info
            .end_time
            .unwrap_or(self.filename_info.start_time)
    }

    /// Sensor name.
    pub fn sensor_name(&self) -> &'static str {
        SENSOR_NAME
    }

    /// Platform shortname, from the filename.
    pub fn platform_shortname(&self) -> &str {
        &self.filename_info.platform_shortname
    }

    /// Human-readable platform name from the fixed platform table.
    pub fn platform_name(&self) -> Result<&'static str> {
        platform_name(self.platform_shortname())
    }

    /// The opaque format-level config this handler was constructed with.
    pub fn filetype_info(&self) -> &HashMap<String, String> {
        &self.filetype_info
    }

    /// The access layer, for inspection tooling.
    pub fn nc(&self) -> &NcAccess {
        &self.nc
    }
}

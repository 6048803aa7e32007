//! CyclObsNC: reader for CyclObs L2 gridded NetCDF products
//!
//! IFREMER's CyclObs catalogue collects C-band Synthetic Aperture Radar
//! (SAR) estimates of the ocean surface wind speed over tropical
//! cyclones, distributed as Level 2 gridded WGS84 NetCDF files. This
//! crate adapts one such file into the in-memory representation a
//! remote-sensing toolkit consumes: labeled 2-D arrays with merged
//! metadata, plus an equirectangular area definition for the grid.
//!
//! ## Key Features
//!
//! - **Dataset extraction**: named variables as `(y, x)` labeled arrays,
//!   vertically flipped to the reader's row convention
//! - **Mask-and-scale**: `_FillValue`/`missing_value` masking and
//!   `scale_factor`/`add_offset` application on read
//! - **Metadata merging**: native attributes, caller overrides, derived
//!   platform/sensor/time fields and nested global attributes
//! - **Area definition**: EPSG:4326 rectangular grid geometry with the
//!   computed bounding extent
//! - **Filename parsing**: platform shortname and acquisition window
//!   from CyclObs product names
//!
//! ## Module Organization
//!
//! - [`reader`]: the file handler (dataset extraction, area definition)
//! - [`dataset`]: dataset requests and the labeled array result
//! - [`area`]: the rectangular-grid geographic descriptor
//! - [`filename`]: product filename parsing
//! - [`metadata`]: metadata values and file inspection helpers
//! - [`netcdf_io`]: the NetCDF access layer (mask-and-scale reads)
//! - [`errors`]: centralized error handling
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use cyclobs_nc::prelude::*;
//!
//! let handler = CyclObsFileHandler::from_path(
//!     "s1a-iw-owi-cm-20180906t172211-20180906t172436-000003-029D76_ll_gd.nc",
//! ).unwrap();
//!
//! let ds_id = DatasetId::new("wind_speed");
//! let data = handler.get_dataset(&ds_id, &DatasetInfo::new()).unwrap();
//! let area = handler.get_area_def(&ds_id).unwrap();
//!
//! println!("{} x {} grid, {}", area.width, area.height, area.projection);
//! println!("row 0 is northernmost: {:?}", data.values.row(0));
//! ```
//!
//! Each handler owns exactly one open file and performs blocking,
//! synchronous reads; give each thread its own handler instance.

// Core modules
pub mod area;
pub mod dataset;
pub mod errors;
pub mod filename;
pub mod metadata;
pub mod netcdf_io;
pub mod reader;

// Direct re-exports for the public API
pub use area::*;
pub use dataset::*;
pub use errors::*;
pub use filename::*;
pub use metadata::*;
pub use netcdf_io::*;
pub use reader::*;

// High-level convenience API
pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::area::{AreaDefinition, AreaExtent};
    pub use crate::dataset::{DataArray, DatasetId, DatasetInfo};
    pub use crate::errors::{CyclObsError, Result};
    pub use crate::filename::FilenameInfo;
    pub use crate::metadata::{Metadata, MetadataValue};
    pub use crate::netcdf_io::NcAccess;
    pub use crate::reader::CyclObsFileHandler;
}

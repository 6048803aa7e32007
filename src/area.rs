//! Rectangular-grid geographic area descriptor
//!
//! Binds pixel dimensions to a coordinate reference system and bounding
//! extent, equivalent to the area-definition objects of the wider
//! remote-sensing toolkits this reader feeds.

use std::fmt;

/// Geographic extent as (lower-left x, lower-left y, upper-right x,
/// upper-right y), in projection units (degrees for EPSG:4326).
pub type AreaExtent = (f64, f64, f64, f64);

/// A rectangular geographic grid: pixel counts, CRS, and extent.
///
/// Invariant: `width` is the number of longitude samples and `height`
/// the number of latitude samples of the grid it describes.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaDefinition {
    pub area_id: String,
    pub description: String,
    pub proj_id: String,
    pub projection: String,
    pub width: usize,
    pub height: usize,
    pub area_extent: AreaExtent,
}

impl AreaDefinition {
    pub fn new(
        area_id: impl Into<String>,
        description: impl Into<String>,
        proj_id: impl Into<String>,
        projection: impl Into<String>,
        width: usize,
        height: usize,
        area_extent: AreaExtent,
    ) -> Self {
        Self {
            area_id: area_id.into(),
            description: description.into(),
            proj_id: proj_id.into(),
            projection: projection.into(),
            width,
            height,
            area_extent,
        }
    }

    /// Grid resolution as (x step, y step) in projection units per pixel.
    pub fn resolution(&self) -> (f64, f64) {
        let (llx, lly, urx, ury) = self.area_extent;
        (
            (urx - llx) / (self.width.saturating_sub(1).max(1) as f64),
            (ury - lly) / (self.height.saturating_sub(1).max(1) as f64),
        )
    }
}

impl fmt::Display for AreaDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (llx, lly, urx, ury) = self.area_extent;
        writeln!(f, "Area: {} ({})", self.area_id, self.description)?;
        writeln!(f, "  Projection: {} [{}]", self.proj_id, self.projection)?;
        writeln!(f, "  Size: {} x {} (width x height)", self.width, self.height)?;
        write!(
            f,
            "  Extent: ({:.4}, {:.4}) to ({:.4}, {:.4})",
            llx, lly, urx, ury
        )
    }
}

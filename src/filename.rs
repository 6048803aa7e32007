//! CyclObs product filename parsing
//!
//! CyclObs L2 gridded products are named like
//! `s1a-iw-owi-cm-20180906t172211-20180906t172436-000003-029D76_ll_gd.nc`:
//! a platform shortname, the acquisition mode, the product kind, and the
//! acquisition start/end timestamps. The reader only needs the platform
//! code and the time window; everything else stays in the name.

use crate::errors::{CyclObsError, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y%m%dt%H%M%S";

/// Metadata parsed from a product's file name prior to opening it.
#[derive(Debug, Clone)]
pub struct FilenameInfo {
    pub platform_shortname: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
}

impl FilenameInfo {
    /// Build filename info from already-known fields.
    pub fn new(platform_shortname: impl Into<String>, start_time: DateTime<Utc>) -> Self {
        Self {
            platform_shortname: platform_shortname.into(),
            start_time,
            end_time: None,
        }
    }

    pub fn with_end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Parse platform shortname and time window out of a CyclObs product
    /// file name.
    ///
    /// The platform code is the leading `-`-separated token; the start
    /// and end times are the first two `yyyymmddtHHMMSS` tokens. A name
    /// with a single timestamp gets no explicit end time.
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| CyclObsError::FilenameParse {
                message: format!("path '{}' has no file name", path.display()),
            })?;

        let platform = name
            .split('-')
            .next()
            .filter(|token| !token.is_empty() && token.chars().all(|c| c.is_ascii_alphanumeric()))
            .ok_or_else(|| CyclObsError::FilenameParse {
                message: format!("no platform shortname in '{}'", name),
            })?;

        let timestamps: Vec<DateTime<Utc>> = name
            .split(['-', '_'])
            .filter_map(|token| NaiveDateTime::parse_from_str(token, TIMESTAMP_FORMAT).ok())
            .map(|naive| naive.and_utc())
            .collect();

        let start_time = *timestamps
            .first()
            .ok_or_else(|| CyclObsError::FilenameParse {
                message: format!("no acquisition timestamp in '{}'", name),
            })?;

        Ok(Self {
            platform_shortname: platform.to_string(),
            start_time,
            end_time: timestamps.get(1).copied(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_full_product_name() {
        let info = FilenameInfo::parse(
            "/data/s1a-iw-owi-cm-20180906t172211-20180906t172436-000003-029D76_ll_gd.nc",
        )
        .unwrap();
        assert_eq!(info.platform_shortname, "s1a");
        assert_eq!(
            info.start_time,
            Utc.with_ymd_and_hms(2018, 9, 6, 17, 22, 11).unwrap()
        );
        assert_eq!(
            info.end_time,
            Some(Utc.with_ymd_and_hms(2018, 9, 6, 17, 24, 36).unwrap())
        );
    }

    #[test]
    fn test_parse_single_timestamp_has_no_end_time() {
        let info = FilenameInfo::parse("rs2-owi-cm-20191023t005556_ll_gd.nc").unwrap();
        assert_eq!(info.platform_shortname, "rs2");
        assert!(info.end_time.is_none());
    }

    #[test]
    fn test_parse_rejects_name_without_timestamp() {
        let result = FilenameInfo::parse("s1b-iw-owi-cm_ll_gd.nc");
        assert!(matches!(
            result,
            Err(CyclObsError::FilenameParse { .. })
        ));
    }
}

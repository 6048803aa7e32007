use chrono::{TimeZone, Utc};
use cyclobs_nc::dataset::{DatasetId, DatasetInfo};
use cyclobs_nc::reader::CyclObsFileHandler;
use ndarray::{Array1, Array3};
use netcdf::create;
use tempfile::tempdir;

#[test]
fn test_cyclobs_product_end_to_end() {
    // Create a synthetic product under its catalogue name so the
    // filename metadata is parsed, not injected
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir
        .path()
        .join("s1a-iw-owi-cm-20180906t172211-20180906t172436-000003-029D76_ll_gd.nc");

    let acquisition = Utc.with_ymd_and_hms(2018, 9, 6, 17, 22, 11).unwrap();

    {
        let mut file = create(&file_path).expect("Failed to create NetCDF file");

        file.add_dimension("time", 1)
            .expect("Failed to add dimension time");
        file.add_dimension("lat", 3)
            .expect("Failed to add dimension lat");
        file.add_dimension("lon", 4)
            .expect("Failed to add dimension lon");

        let mut lat = file
            .add_variable::<f64>("lat", &["lat"])
            .expect("Failed to add variable lat");
        lat.put(Array1::from_vec(vec![10.0, 12.0, 14.0]).view(), ..)
            .expect("Failed to write lat");

        let mut lon = file
            .add_variable::<f64>("lon", &["lon"])
            .expect("Failed to add variable lon");
        lon.put(Array1::from_vec(vec![100.0, 101.0, 102.0, 103.0]).view(), ..)
            .expect("Failed to write lon");

        let mut time = file
            .add_variable::<i64>("time", &["time"])
            .expect("Failed to add variable time");
        let nanoseconds = acquisition.timestamp_nanos_opt().unwrap();
        time.put(Array1::from_vec(vec![nanoseconds]).view(), ..)
            .expect("Failed to write time");

        let values: Vec<f32> = (0..12).map(|i| i as f32).collect();
        let mut wind = file
            .add_variable::<f32>("wind_speed", &["time", "lat", "lon"])
            .expect("Failed to add variable wind_speed");
        wind.put_attribute("units", "m s-1")
            .expect("Failed to add attribute");
        wind.put(
            Array3::from_shape_vec((1, 3, 4), values)
                .expect("Failed to create array from test data")
                .view(),
            ..,
        )
        .expect("Failed to write wind_speed");

        file.add_attribute("title", "CyclObs synthetic test product")
            .expect("Failed to add global attribute");
    }

    // Filename metadata comes straight from the product name
    let handler = CyclObsFileHandler::from_path(&file_path).expect("Failed to open product");
    assert_eq!(handler.platform_shortname(), "s1a");
    assert_eq!(handler.platform_name().unwrap(), "SENTINEL-1A");
    assert_eq!(handler.sensor_name(), "sar-c");
    assert_eq!(handler.start_time(), acquisition);
    assert_eq!(
        handler.end_time(),
        Utc.with_ymd_and_hms(2018, 9, 6, 17, 24, 36).unwrap()
    );

    // Dataset: flipped (y, x) grid with the derived time attribute
    let ds_id = DatasetId::new("wind_speed");
    let data = handler
        .get_dataset(&ds_id, &DatasetInfo::new())
        .expect("Failed to extract dataset");
    assert_eq!(data.values.shape(), &[3, 4]);
    assert_eq!(data.dims(), ("y", "x"));
    assert_eq!(data.values[[0, 0]], 8.0);
    assert_eq!(data.values[[2, 3]], 3.0);
    let time = data
        .attrs
        .get("time")
        .and_then(|v| v.as_time())
        .expect("time attribute missing");
    assert_eq!(time, acquisition);

    // Area: grid geometry consistent with the flip
    let area = handler
        .get_area_def(&ds_id)
        .expect("Failed to build area definition");
    assert_eq!(area.projection, "EPSG:4326");
    assert_eq!((area.width, area.height), (4, 3));
    let (llx, lly, urx, ury) = area.area_extent;
    assert_eq!((llx, lly), (100.0, 10.0));
    assert_eq!((urx, ury), (103.0, 14.0));

    // Row 0 of the data is the northernmost row, matching the extent's
    // upper edge
    assert!(ury > lly);
}

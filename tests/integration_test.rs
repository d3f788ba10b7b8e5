//! End-to-end integration tests for mhw_clim
//!
//! These tests build synthetic SST NetCDF files, run the full pipeline, and
//! verify the output file contents against a direct detection run.

use chrono::NaiveDate;
use mhw_clim::{
    detection::{detect, DetectOptions},
    errors::MhwError,
    netcdf_io::{read_series, CLIMATOLOGY_VAR, THRESHOLD_VAR, TIME_DIM},
    pipeline::{run, RunConfig},
    time_axis::TimeAxis,
};
use ndarray::{Array1, Array2};
use netcdf::{create, open};
use std::path::Path;
use tempfile::tempdir;

const N_DAYS: usize = 12784;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

fn default_config() -> RunConfig {
    RunConfig {
        start_date: date(1982, 1, 1),
        end_date: date(2016, 12, 31),
        variable: "sst".to_string(),
        detect: DetectOptions::default(),
    }
}

/// Known periodic synthetic signal over the full default axis.
fn synthetic_sst(n_days: usize) -> Vec<f64> {
    (0..n_days)
        .map(|i| {
            let day = i as f64;
            let seasonal = 4.0 * (2.0 * std::f64::consts::PI * day / 365.25).sin();
            let trend = 0.5 * day / n_days as f64;
            let burst = if i % 1100 < 14 { 3.0 } else { 0.0 };
            15.0 + seasonal + trend + burst
        })
        .collect()
}

fn write_sst_file(path: &Path, sst: &[f64]) {
    let mut file = create(path).expect("create input file");
    file.add_dimension("time", sst.len()).expect("add dim");
    let mut var = file
        .add_variable::<f64>("sst", &["time"])
        .expect("add variable");
    var.put(Array1::from(sst.to_vec()).view(), ..)
        .expect("write data");
}

#[test]
fn test_end_to_end_round_trip() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let input_path = temp_dir.path().join("sst_input.nc");
    let output_path = temp_dir.path().join("threshold_climatology.nc");

    let sst = synthetic_sst(N_DAYS);
    write_sst_file(&input_path, &sst);

    let config = default_config();
    let summary = run(&config, &input_path, &output_path).expect("pipeline run");
    assert_eq!(summary.series_len, N_DAYS);
    // The injected warm bursts exceed the 90th-percentile threshold
    assert!(!summary.events.is_empty());

    // Reference result computed directly from the same series
    let axis = TimeAxis::from_range(config.start_date, config.end_date).unwrap();
    let (_, expected) = detect(&axis, &sst, &config.detect).unwrap();

    let output = open(&output_path).expect("open output");

    let time_dim = output
        .dimensions()
        .find(|d| d.name() == TIME_DIM)
        .expect("time dimension present");
    assert_eq!(time_dim.len(), N_DAYS);

    let thresh_var = output.variable(THRESHOLD_VAR).expect("threshold variable");
    assert_eq!(thresh_var.dimensions().len(), 1);
    assert_eq!(thresh_var.dimensions()[0].name(), TIME_DIM);
    let thresh: Vec<f64> = thresh_var.get_values::<f64, _>(..).expect("read threshold");

    let clim_var = output
        .variable(CLIMATOLOGY_VAR)
        .expect("climatology variable");
    assert_eq!(clim_var.dimensions().len(), 1);
    assert_eq!(clim_var.dimensions()[0].name(), TIME_DIM);
    let seas: Vec<f64> = clim_var.get_values::<f64, _>(..).expect("read climatology");

    // Bit-for-bit round trip, no transformation applied on write
    assert_eq!(thresh.len(), expected.thresh.len());
    assert_eq!(seas.len(), expected.seas.len());
    for (written, computed) in thresh.iter().zip(&expected.thresh) {
        assert_eq!(written.to_bits(), computed.to_bits());
    }
    for (written, computed) in seas.iter().zip(&expected.seas) {
        assert_eq!(written.to_bits(), computed.to_bits());
    }
}

#[test]
fn test_rerun_overwrites_existing_output() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let input_path = temp_dir.path().join("sst_input.nc");
    let output_path = temp_dir.path().join("out.nc");

    let sst = synthetic_sst(N_DAYS);
    write_sst_file(&input_path, &sst);

    let config = default_config();
    run(&config, &input_path, &output_path).expect("first run");
    // Second run must replace the existing file instead of failing
    run(&config, &input_path, &output_path).expect("second run");

    let output = open(&output_path).expect("open output");
    assert!(output.variable(THRESHOLD_VAR).is_some());
}

#[test]
fn test_mismatched_series_length_is_rejected() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let input_path = temp_dir.path().join("sst_short.nc");
    let output_path = temp_dir.path().join("out.nc");

    // One day short of the configured axis
    let sst = synthetic_sst(N_DAYS - 1);
    write_sst_file(&input_path, &sst);

    let result = run(&default_config(), &input_path, &output_path);
    match result {
        Err(MhwError::LengthMismatch {
            expected, actual, ..
        }) => {
            assert_eq!(expected, N_DAYS);
            assert_eq!(actual, N_DAYS - 1);
        }
        other => panic!("Expected LengthMismatch, got {:?}", other.map(|_| ())),
    }
    assert!(!output_path.exists());
}

#[test]
fn test_missing_variable_is_rejected() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let input_path = temp_dir.path().join("sst_input.nc");
    let output_path = temp_dir.path().join("out.nc");

    let sst = synthetic_sst(N_DAYS);
    write_sst_file(&input_path, &sst);

    let mut config = default_config();
    config.variable = "temperature".to_string();

    let result = run(&config, &input_path, &output_path);
    match result {
        Err(MhwError::VariableNotFound { var }) => assert_eq!(var, "temperature"),
        other => panic!("Expected VariableNotFound, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_read_series_rejects_multidimensional_variable() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let input_path = temp_dir.path().join("gridded.nc");

    {
        let mut file = create(&input_path).expect("create input file");
        file.add_dimension("time", 4).expect("add dim");
        file.add_dimension("lat", 3).expect("add dim");
        let mut var = file
            .add_variable::<f64>("sst", &["time", "lat"])
            .expect("add variable");
        let data = Array2::from_shape_vec((4, 3), (0..12).map(f64::from).collect())
            .expect("shape data");
        var.put(data.view(), ..).expect("write data");
    }

    let file = open(&input_path).expect("open input");
    let result = read_series(&file, "sst");
    match result {
        Err(MhwError::NotOneDimensional { var, ndims }) => {
            assert_eq!(var, "sst");
            assert_eq!(ndims, 2);
        }
        other => panic!("Expected NotOneDimensional, got {:?}", other.map(|_| ())),
    }
}

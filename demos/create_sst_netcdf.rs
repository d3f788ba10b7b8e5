//! Creates a synthetic SST NetCDF file for trying out mhw_clim.
//!
//! The file covers the default 1982-01-01 .. 2016-12-31 axis (12784 days)
//! with a seasonal sine wave, a slow warming trend, and a few injected warm
//! bursts that the detector should pick up.

use ndarray::Array1;
use netcdf::create;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_path = Path::new("sst_test_data.nc");
    let n_days = 12784usize;

    println!("🔨 Creating test NetCDF file: {}", output_path.display());

    if output_path.exists() {
        std::fs::remove_file(output_path)?;
    }

    let mut file = create(output_path)?;

    file.add_attribute("title", "Synthetic SST series")?;
    file.add_attribute("created_by", "create_sst_netcdf.rs")?;

    file.add_dimension("time", n_days)?;

    {
        let mut time_var = file.add_variable::<f64>("time", &["time"])?;
        time_var.put_attribute("units", "days since 1982-01-01")?;
        time_var.put_attribute("long_name", "time")?;
        time_var.put_attribute("calendar", "standard")?;

        let time_data: Vec<f64> = (0..n_days).map(|i| i as f64).collect();
        time_var.put(Array1::from(time_data).view(), ..)?;
    }

    {
        let mut sst_var = file.add_variable::<f64>("sst", &["time"])?;
        sst_var.put_attribute("units", "degree_Celsius")?;
        sst_var.put_attribute("long_name", "sea surface temperature")?;

        let sst_data: Vec<f64> = (0..n_days)
            .map(|i| {
                let day = i as f64;
                let seasonal = 4.0 * (2.0 * std::f64::consts::PI * day / 365.25).sin();
                let trend = 0.5 * day / n_days as f64;
                // Warm bursts roughly every three years, two weeks long
                let burst = if i % 1100 < 14 { 3.0 } else { 0.0 };
                15.0 + seasonal + trend + burst
            })
            .collect();
        sst_var.put(Array1::from(sst_data).view(), ..)?;
    }

    println!("✅ Wrote {} days of synthetic SST", n_days);
    println!("\n🧪 Run the detector with:");
    println!("   cargo run -- -f sst_test_data.nc --verbose");

    Ok(())
}

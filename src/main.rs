//! Entry point for the mhw_clim application.
//! Handles CLI parsing, thread-pool setup, and dispatches the detection pipeline.

use clap::Parser;
use mhw_clim::cli::Args;
use mhw_clim::detection::{ClimatologyOptions, DetectOptions, EventOptions};
use mhw_clim::metadata::list_variables_and_dimensions;
use mhw_clim::parallel::ParallelConfig;
use mhw_clim::pipeline::{run, RunConfig};
use netcdf::open;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    println!(
        r#"
------------------------------------------------------------------
                      _                     _ _
           _ __ ___  | |__ __      __   ___| (_)_ __ ___
          | '_ ` _ \ | '_ \\ \ /\ / /  / __| | | '_ ` _ \
          | | | | | || | | |\ V  V /  | (__| | | | | | | |
          |_| |_| |_||_| |_| \_/\_/    \___|_|_|_| |_| |_|
              Marine heatwave climatology for NetCDF
------------------------------------------------------------------
                        "#
    );

    if args.list_vars {
        let file = open(&args.file)?;
        list_variables_and_dimensions(&file)?;
        return Ok(());
    }

    ParallelConfig::new(args.threads).setup_global_pool()?;

    let config = RunConfig {
        start_date: args.start_date,
        end_date: args.end_date,
        variable: args.variable.clone(),
        detect: DetectOptions {
            climatology: ClimatologyOptions {
                reference_period: args.clim_period,
                percentile: args.percentile,
                window_half_width: args.window_half_width,
                smooth: !args.no_smooth,
                smooth_width: args.smooth_width,
            },
            events: EventOptions {
                min_duration: args.min_duration,
                join_across_gaps: true,
                max_gap: args.max_gap,
            },
        },
    };

    println!(
        "🚀 Processing '{}' from {} ({} .. {}, reference {}..{})",
        args.variable,
        args.file.display(),
        args.start_date,
        args.end_date,
        args.clim_period.0,
        args.clim_period.1
    );

    let summary = run(&config, &args.file, &args.output)?;

    println!(
        "✅ Saved {} threshold/climatology values to {}",
        summary.series_len,
        args.output.display()
    );
    println!("   Identified {} heatwave events", summary.events.len());

    if args.verbose {
        for (i, event) in summary.events.iter().enumerate() {
            println!(
                "   #{:<3} {} .. {}  duration {:>4} d  max {:+.2}  mean {:+.2}  cum {:+.1}",
                i + 1,
                format_ordinal(event.date_start),
                format_ordinal(event.date_end),
                event.duration,
                event.intensity_max,
                event.intensity_mean,
                event.intensity_cumulative
            );
        }
    }

    Ok(())
}

/// Formats a proleptic date ordinal as an ISO date for reporting.
fn format_ordinal(ordinal: i64) -> String {
    match chrono::NaiveDate::from_num_days_from_ce_opt(ordinal as i32) {
        Some(date) => date.to_string(),
        None => format!("ordinal {}", ordinal),
    }
}

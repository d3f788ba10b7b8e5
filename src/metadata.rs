//! NetCDF metadata inspection
//!
//! Used by `--list-vars` to examine an input file before running detection.

use crate::errors::Result;
use netcdf::{AttributeValue, File};

/// Lists all dimensions and variables in a clean, organized format.
pub fn list_variables_and_dimensions(file: &File) -> Result<()> {
    println!("\n Dimensions");
    println!("==============");

    let mut dimensions: Vec<_> = file.dimensions().collect();
    dimensions.sort_by(|a, b| a.name().cmp(&b.name()));

    if dimensions.is_empty() {
        println!("   (No dimensions found)");
    } else {
        for dim in dimensions {
            let length_info = if dim.is_unlimited() {
                format!("{} (unlimited)", dim.len())
            } else {
                dim.len().to_string()
            };
            println!("    {} = {}", dim.name(), length_info);
        }
    }

    println!("\n Variables");
    println!("=============");

    let mut variables: Vec<_> = file.variables().collect();
    variables.sort_by(|a, b| a.name().cmp(&b.name()));

    if variables.is_empty() {
        println!("   (No variables found)");
    } else {
        for var in variables {
            let data_type = format!("{:?}", var.vartype()).to_lowercase();

            let dims: Vec<String> = var
                .dimensions()
                .iter()
                .map(|d| d.name().to_string())
                .collect();

            let shape: Vec<String> = var
                .dimensions()
                .iter()
                .map(|d| d.len().to_string())
                .collect();

            if dims.is_empty() {
                println!("    {} ({}): scalar", var.name(), data_type);
            } else {
                println!(
                    "    {} ({}): [{}] = ({})",
                    var.name(),
                    data_type,
                    dims.join(", "),
                    shape.join(" × ")
                );
            }

            // Show key attributes if they exist
            let mut key_attrs = Vec::new();

            if let Some(units_attr) = var.attribute("units") {
                if let Ok(AttributeValue::Str(units)) = units_attr.value() {
                    key_attrs.push(format!("units: {}", units));
                }
            }

            if let Some(long_name_attr) = var.attribute("long_name") {
                if let Ok(AttributeValue::Str(long_name)) = long_name_attr.value() {
                    key_attrs.push(format!("long_name: {}", long_name));
                }
            }

            if !key_attrs.is_empty() {
                println!("      └─ {}", key_attrs.join(", "));
            }
        }
    }

    println!("\n💡 Tip: Use --variable <name> to select the SST series to process");

    Ok(())
}

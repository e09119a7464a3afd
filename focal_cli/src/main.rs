//! # CropFocal CLI
//!
//! Line-based front-end for the focal calculation engine. Collects raw form
//! values, hands them to `focal_core` untouched, and renders either the
//! result block (with the calculation steps and a JSON echo) or the
//! validation-error list. All arithmetic lives in the engine.

use std::io::{self, BufRead, Write};

use focal_core::{CalcOutcome, CropCalculator, SensorFormat};

fn prompt(label: &str) -> String {
    print!("{}", label);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim().to_string()
}

fn prompt_or(label: &str, default: &str) -> String {
    let input = prompt(label);
    if input.is_empty() {
        default.to_string()
    } else {
        input
    }
}

fn main() {
    println!("CropFocal CLI - Cropped Photo Focal-Length Calculator");
    println!("=====================================================");
    println!();
    println!("Sensor formats:");
    for sensor in SensorFormat::ALL {
        let info = sensor.info();
        println!(
            "  {:<14} {} ({}×{}mm, ×{})",
            sensor.id(),
            info.name,
            info.width_mm,
            info.height_mm,
            info.crop_multiplier
        );
    }
    println!();

    let sensor_id = prompt_or("Sensor format [fullframe]: ", "fullframe");
    let sensor = match SensorFormat::from_id(&sensor_id) {
        Ok(sensor) => sensor,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    };

    let mut calc = CropCalculator::new();
    calc.sensor = sensor;

    let focal = prompt("Actual focal length (mm): ");
    let equivalent = if sensor.is_full_frame() {
        // the equivalent field is unused for full frame
        String::new()
    } else {
        if let Ok(actual) = focal.parse::<f64>() {
            if actual > 0.0 {
                println!(
                    "  = {:.1}mm in 35mm-equivalent terms",
                    calc.actual_to_equivalent(actual)
                );
            }
        }
        prompt("35mm-equivalent focal length (mm, blank if actual given): ")
    };

    let orig_width = prompt("Original width (px): ");
    let orig_height = prompt("Original height (px): ");
    let crop_width = prompt("Cropped width (px): ");
    let crop_height = prompt("Cropped height (px): ");

    calc.set_inputs(
        sensor,
        &focal,
        &equivalent,
        &orig_width,
        &orig_height,
        &crop_width,
        &crop_height,
    );

    match calc.calculate() {
        CalcOutcome::Success { results, details } => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  CROP CALCULATION RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!(
                "  Cropped actual focal length:   {:.1}mm",
                results.crop_actual_focal_length_mm
            );
            println!(
                "  Cropped 35mm-equivalent:       {:.1}mm",
                results.crop_equivalent_focal_length_mm
            );
            println!("  Crop factor (diagonal):        {:.2}×", results.crop_factor);
            println!("  Crop area:                     {:.1}%", results.crop_ratio_percent);
            println!();
            for step in calc.calculation_steps(&results, &details) {
                println!("{}", step);
            }

            println!();
            println!("JSON Output (for LLM/API use):");
            let outcome = CalcOutcome::Success { results, details };
            if let Ok(json) = serde_json::to_string_pretty(&outcome) {
                println!("{}", json);
            }
        }
        CalcOutcome::Invalid { errors } => {
            eprintln!();
            eprintln!("Input problems:");
            for (i, error) in errors.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, error);
            }
            std::process::exit(1);
        }
    }
}

//! Parse RAW8 utility
//! Loads an Avantes .raw8 file and displays the decoded header and spectra

use raw8_rs::{export_csv, FieldValue, FormatVariant, Raw8Decoder, Record, SpectrumKind};
use std::env;
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    let format_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <file.raw8> [--legacy] [--json] [--csv <out.csv>]", args[0]);
        eprintln!("\nExamples:");
        eprintln!("  {} sample.raw8                  # Show header and spectra summary", args[0]);
        eprintln!("  {} sample.raw8 --json           # Dump header and arrays as JSON", args[0]);
        eprintln!("  {} sample.raw8 --csv out.csv    # Export spectra to CSV", args[0]);
        eprintln!("  {} old.raw8 --legacy            # Use IntTime field naming", args[0]);
        std::process::exit(1);
    }

    let raw8_file = &args[1];
    let mut variant = FormatVariant::Current;
    let mut json = false;
    let mut csv_out = None;

    let mut rest = args[2..].iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--legacy" => variant = FormatVariant::Legacy,
            "--json" => json = true,
            "--csv" => {
                let path = rest
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--csv needs an output path"))?;
                csv_out = Some(path.clone());
            }
            other => anyhow::bail!("Unknown argument: {}", other),
        }
    }

    tracing::info!("Loading RAW8 file: {}", raw8_file);
    let record = Raw8Decoder::new().with_variant(variant).load(raw8_file)?;

    if json {
        println!("{}", record.to_json()?);
    } else {
        print_record(&record);
    }

    if let Some(path) = csv_out {
        export_csv(&path, &record)?;
        tracing::info!("Wrote {} rows to {}", record.data_length(), path);
    }

    Ok(())
}

fn print_record(record: &Record) {
    println!("=== Header ===");
    for (name, value) in record.entries() {
        match (name, &value) {
            ("measMode", FieldValue::U8(raw)) => println!(
                "  {:<20} {} ({})",
                name,
                raw,
                record.header().measurement_mode_label()
            ),
            ("SPCfiledate", FieldValue::U32(raw)) => {
                println!("  {:<20} {} ({})", name, raw, record.date())
            }
            _ => println!("  {:<20} {}", name, value),
        }
    }
    println!();

    match record.datetime() {
        Ok(dt) => println!("Acquired:    {}", dt),
        Err(e) => println!("Acquired:    {}", e),
    }
    println!("Pixels:      {}", record.data_length());

    println!("\n=== Spectra ===");
    for kind in SpectrumKind::ALL {
        let data = record.data(kind);
        let min = data.iter().copied().fold(f32::INFINITY, f32::min);
        let max = data.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        println!("  {:<6} min={:<12} max={:<12}", kind.name(), min, max);
    }

    let irradiance = record.relative_irradiance();
    let finite = irradiance.iter().filter(|v| v.is_finite()).count();
    println!(
        "\nRelative irradiance: {} of {} values finite (ColorTemp {} K)",
        finite,
        irradiance.len(),
        record.header().color_temp
    );
}

//! Fade CLI
//!
//! Build fade utility stylesheets and inspect gradient stops.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fade_core::stops::{format_opacity, format_position};
use fade_core::{
    classes, generate_css, table, Direction, Easing, FadePlugin, GradientSpec, Overlay,
    Stylesheet, DEFAULT_STEPS,
};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

#[derive(Parser)]
#[command(name = "fade")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Smooth gradient fade utilities", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the fade utility stylesheet
    Build {
        /// Directory containing fade.toml
        #[arg(default_value = ".")]
        source: String,

        /// Output path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format (css, json)
        #[arg(short, long, default_value = "css")]
        format: String,
    },

    /// Print the gradient stops for a step count
    Stops {
        /// Number of steps
        steps: u32,

        /// Fade from transparent to the color instead
        #[arg(short, long)]
        reverse: bool,

        /// Easing curve
        #[arg(short, long, default_value = "ease-out-cubic")]
        easing: String,
    },

    /// Resolve a selection to utility classes
    Classes {
        /// Color family (blue, slate, black, ...)
        color: String,

        /// Direction (t, b, l, r, tl, tr, bl, br)
        #[arg(default_value = "b")]
        direction: String,

        /// Number of steps
        #[arg(short, long, default_value_t = DEFAULT_STEPS)]
        steps: u32,

        /// Easing curve
        #[arg(short, long, default_value = "ease-out-cubic")]
        easing: String,
    },

    /// Print a literal overlay gradient
    Css {
        /// Overlay color (white, black)
        color: String,

        /// Direction (t, b, l, r, tl, tr, bl, br)
        #[arg(default_value = "b")]
        direction: String,

        /// Number of steps
        #[arg(default_value_t = DEFAULT_STEPS)]
        steps: u32,
    },

    /// List the available easing curves
    Easings,

    /// Show version and supported ranges
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Build {
            source,
            output,
            format,
        } => cmd_build(&source, output.as_deref(), &format),

        Commands::Stops {
            steps,
            reverse,
            easing,
        } => cmd_stops(steps, reverse, &easing),

        Commands::Classes {
            color,
            direction,
            steps,
            easing,
        } => cmd_classes(&color, &direction, steps, &easing),

        Commands::Css {
            color,
            direction,
            steps,
        } => cmd_css(&color, &direction, steps),

        Commands::Easings => cmd_easings(),

        Commands::Info => cmd_info(),
    }
}

fn cmd_build(source: &str, output: Option<&str>, format: &str) -> Result<()> {
    let valid_formats = ["css", "json"];
    if !valid_formats.contains(&format) {
        anyhow::bail!(
            "Invalid format '{}'. Valid formats: {:?}",
            format,
            valid_formats
        );
    }

    let path = PathBuf::from(source);
    let config = config::load_from_dir(&path)?;

    info!("Building fade utilities ({} steps)", config.steps());

    let plugin = FadePlugin::new(&config);
    let mut stylesheet = Stylesheet::new();
    plugin.submit(&mut stylesheet);

    let rendered = match format {
        "json" => serde_json::to_string_pretty(stylesheet.rules())
            .context("Failed to serialize utilities")?,
        _ => stylesheet.to_css(),
    };

    match output {
        Some(out) => {
            fs::write(out, &rendered).with_context(|| format!("Failed to write {}", out))?;
            info!("Wrote {} utilities to {}", stylesheet.len(), out);
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn cmd_stops(steps: u32, reverse: bool, easing: &str) -> Result<()> {
    let easing = Easing::resolve(easing);
    let source = match table::lookup(steps) {
        Some(_) if easing.is_default() => "table",
        _ => "sampled",
    };
    info!("{} steps, {} ({})", steps, easing, source);

    let spec = GradientSpec::default()
        .steps(steps)
        .easing(easing)
        .reverse(reverse);
    for stop in spec.stops() {
        println!(
            "{:>7}%  {}",
            format_position(stop.position),
            format_opacity(stop.opacity)
        );
    }

    Ok(())
}

fn cmd_classes(color: &str, direction: &str, steps: u32, easing: &str) -> Result<()> {
    let easing = Easing::resolve(easing);
    println!("{}", classes::fade_class(color, direction, steps, easing));
    Ok(())
}

fn cmd_css(color: &str, direction: &str, steps: u32) -> Result<()> {
    let overlay = Overlay::resolve(color);
    let direction = Direction::resolve(direction);
    info!("{} overlay towards {}, {} steps", overlay, direction.label(), steps);

    let css = generate_css(overlay, direction, steps);
    println!("{}", css);
    Ok(())
}

fn cmd_easings() -> Result<()> {
    for easing in Easing::ALL {
        let marker = if easing.is_default() { " (default)" } else { "" };
        println!("{:<20} {}{}", easing.key(), easing.label(), marker);
    }
    Ok(())
}

fn cmd_info() -> Result<()> {
    println!("Fade");
    println!("====");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!(
        "Precomputed steps: {}-{}",
        table::MIN_STEPS,
        table::MAX_STEPS
    );
    println!("Default steps: {}", DEFAULT_STEPS);
    println!("Default easing: {}", Easing::default());
    println!();
    println!("Directions:");
    for dir in Direction::ALL {
        println!(
            "  {} {:<3} {:<13} {}deg",
            dir.icon(),
            dir.token(),
            dir.label(),
            dir.angle()
        );
    }
    println!();
    println!("Step presets: {:?}", classes::STEP_PRESETS);

    Ok(())
}

use std::fs;
use std::path::PathBuf;
use std::process;

use bubblelens::config::load_options;
use bubblelens::layout::LayoutEngine;
use bubblelens::logging;
use bubblelens::options::{LayoutOptions, Shape};
use bubblelens::report::LayoutReport;
use clap::Parser;
use kurbo::{Size, Vec2};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "bubblelens")]
#[command(version)]
#[command(about = "Compute a honeycomb bubble layout and print it as JSON")]
struct Cli {
    /// Number of items to lay out
    #[arg(short = 'n', long, default_value_t = 12)]
    items: usize,

    /// Options file (.toml or .json)
    #[arg(long)]
    options: Option<PathBuf>,

    /// Override the column count
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    columns: Option<u32>,

    /// Override the boundary shape
    #[arg(long, value_parser = ["ellipse", "rectangle"])]
    shape: Option<String>,

    /// Pull shrunk items toward the center
    #[arg(long)]
    compact: bool,

    /// Include guide dimensions in the output
    #[arg(long)]
    guides: bool,

    /// Horizontal scroll offset
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    scroll_x: f64,

    /// Vertical scroll offset
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    scroll_y: f64,

    /// Viewport size as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size)]
    viewport: Option<Size>,

    /// Scroll so the content is centered in the viewport (requires --viewport)
    #[arg(long, requires = "viewport")]
    center: bool,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s}"))?;
    let w: f64 = w.trim().parse().map_err(|_| format!("invalid width: {w}"))?;
    let h: f64 = h.trim().parse().map_err(|_| format!("invalid height: {h}"))?;
    Ok(Size::new(w, h))
}

fn resolve_options(cli: &Cli) -> Result<LayoutOptions, String> {
    let mut options = match &cli.options {
        Some(path) => load_options(path).map_err(|e| e.to_string())?,
        None => LayoutOptions::default(),
    };
    if let Some(columns) = cli.columns {
        options.column_count = columns as usize;
    }
    if let Some(shape) = cli.shape.as_deref().and_then(Shape::from_str) {
        options.shape = shape;
    }
    options.compact |= cli.compact;
    options.show_guides |= cli.guides;
    Ok(options)
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let options = match resolve_options(&cli) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Options error: {}", e);
            process::exit(1);
        }
    };

    let engine = match LayoutEngine::new(options) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Invalid options: {}", e);
            process::exit(1);
        }
    };

    let scroll = match cli.viewport {
        Some(viewport) if cli.center => {
            let scroll = engine.metrics(cli.items).centered_scroll(viewport);
            info!(x = scroll.x, y = scroll.y, "centered scroll");
            scroll
        }
        _ => Vec2::new(cli.scroll_x, cli.scroll_y),
    };

    let labels: Vec<String> = (1..=cli.items).map(|i| format!("Bubble {i}")).collect();
    let layout = engine.layout(&labels, scroll);
    let json = match LayoutReport::from_layout(&layout).to_json(cli.pretty) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Failed to serialize layout: {}", e);
            process::exit(1);
        }
    };

    match cli.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, &json) {
                eprintln!("Failed to write {}: {}", path.display(), e);
                process::exit(1);
            }
        }
        None => println!("{}", json),
    }
}

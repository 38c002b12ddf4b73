//! FlowGrid Smoke Harness
//!
//! Runs the flow layout over a scripted sequence of container widths and
//! prints one JSON report per pass (size plus every placement). Useful for
//! eyeballing wrap boundaries and alignment without a host UI.

use flowgrid_layout::{
    FlowGrid, FlowGridConfig, LayoutError, Placement, ProposedSize, Rect, Size, SizeOracle,
};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Parse command line arguments
struct Args {
    config_file: Option<String>,
    widths: Vec<f32>,
    items: usize,
}

impl Args {
    fn parse() -> Self {
        let mut args = std::env::args().skip(1);
        let mut config_file = None;
        let mut widths = vec![320.0, 200.0, 120.0];
        let mut items = 12usize;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    config_file = args.next();
                }
                "--widths" => {
                    if let Some(val) = args.next() {
                        let parsed: Vec<f32> = val
                            .split(',')
                            .filter_map(|w| w.trim().parse().ok())
                            .collect();
                        if !parsed.is_empty() {
                            widths = parsed;
                        }
                    }
                }
                "--items" => {
                    if let Some(val) = args.next() {
                        items = val.parse().unwrap_or(12);
                    }
                }
                _ => {}
            }
        }

        Self {
            config_file,
            widths,
            items,
        }
    }

    /// Load the layout configuration from file or use the defaults
    fn load_config(&self) -> Result<FlowGridConfig, LayoutError> {
        match self.config_file {
            Some(ref path) => {
                let json = std::fs::read_to_string(path).map_err(|e| {
                    LayoutError::InvalidConfig(format!("failed to read {}: {}", path, e))
                })?;
                FlowGridConfig::from_json(&json)
            }
            None => Ok(FlowGridConfig::default()),
        }
    }
}

/// Items the harness lays out.
enum SampleItem {
    /// Fixed-size chip.
    Chip(Size),
    /// Text that wraps onto more lines under a narrow proposal.
    Text { natural_width: f32, line_height: f32 },
}

impl SizeOracle for SampleItem {
    fn size_that_fits(&self, proposal: ProposedSize) -> Size {
        match *self {
            SampleItem::Chip(size) => size,
            SampleItem::Text {
                natural_width,
                line_height,
            } => match proposal.width {
                Some(available) if available > 0.0 && available < natural_width => {
                    let lines = (natural_width / available).ceil();
                    Size::new(available, line_height * lines)
                }
                _ => Size::new(natural_width, line_height),
            },
        }
    }
}

fn sample_items(count: usize) -> Vec<SampleItem> {
    (0..count)
        .map(|i| {
            if i % 5 == 4 {
                SampleItem::Text {
                    natural_width: 140.0,
                    line_height: 18.0,
                }
            } else {
                let width = 24.0 + ((i * 37) % 56) as f32;
                let height = 20.0 + ((i * 13) % 3) as f32 * 4.0;
                SampleItem::Chip(Size::new(width, height))
            }
        })
        .collect()
}

#[derive(Serialize)]
struct PassReport {
    width: f32,
    size: Size,
    rows: usize,
    placements: Vec<Placement>,
}

fn run(args: &Args) -> Result<(), LayoutError> {
    let config = args.load_config()?;
    let mut grid = FlowGrid::with_config(config)?;
    let items = sample_items(args.items);

    info!(
        spacing = config.spacing,
        alignment = ?config.alignment,
        items = items.len(),
        "FlowGrid smoke harness starting"
    );

    for &width in &args.widths {
        let size = grid.measure(ProposedSize::width(width), &items);
        let placements = grid.arrange(Rect::new(0.0, 0.0, size.width, size.height), &items);
        let rows = grid.container().map_or(0, |c| c.rows().len());

        let report = PassReport {
            width,
            size,
            rows,
            placements,
        };
        println!("{}", serde_json::to_string(&report)?);

        info!(width, rows, height = size.height, "pass complete");
    }

    let stats = grid.cache_stats();
    info!(
        lookups = stats.lookups,
        hits = stats.hits,
        stores = stats.stores,
        "FlowGrid smoke harness finished"
    );

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("FlowGrid smoke harness failed: {}", e);
        std::process::exit(1);
    }
}

mod chart;
mod data;
mod normalize;
mod output;

use clap::Parser;

use chart::ConfigChartData;
use data::NUM_DIMS;
use normalize::{periodic_interpolate, rescale};
use output::{print_configurations, print_error};

#[derive(Parser)]
#[command(
    name = "evalradar",
    version,
    about = "Radar chart comparing multi-scale model configurations on seen and unseen objects",
    after_help = "Examples:
  evalradar                         Render to radar.png
  evalradar -o results/radar.png    Render to a custom path
  evalradar --quiet                 Suppress the configuration listing
  evalradar --no-color              Disable colored output"
)]
struct Args {
    /// Output chart path (PNG)
    #[arg(short, long, default_value = "radar.png", value_name = "PATH")]
    output: String,

    /// Suppress the configuration listing (render only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    // Validate output path
    {
        use std::path::Path;
        if let Some(parent) = Path::new(&args.output).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            print_error(&format!("Directory does not exist: {}", parent.display()));
            std::process::exit(1);
        }
    }

    let configs = data::configurations();

    if !args.quiet {
        print_configurations(&configs);
    }

    // Rescale each 5-score series and expand it onto the 11-point angular
    // grid, keeping the curve periodic across the wrap
    let chart_data: Vec<ConfigChartData> = configs
        .iter()
        .map(|c| ConfigChartData {
            name: c.name.to_string(),
            color: c.color,
            seen: periodic_interpolate(&rescale(&c.seen), NUM_DIMS),
            unseen: periodic_interpolate(&rescale(&c.unseen), NUM_DIMS),
        })
        .collect();

    if let Err(e) = chart::render_radar_chart(&chart_data, &args.output) {
        print_error(&e);
        std::process::exit(1);
    }

    eprintln!("Chart saved to: {}", args.output);
}

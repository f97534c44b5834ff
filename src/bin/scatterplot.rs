use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use std::path::PathBuf;

use scatterplot_rs::render::svg;
use scatterplot_rs::{Bounds, Dataset, ScatterCallbacks, ScatterPlot, Series, Vector2};

#[derive(Parser, Debug)]
#[command(
    name = "scatterplot",
    version,
    about = "Lay out a scatterplot layer (markers, trajectories, labels) and render it to SVG"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a dataset to an SVG file.
    Render(RenderArgs),
    /// Print the resolved layout (positions, labels, visibility) as JSON.
    Inspect(LayoutArgs),
}

#[derive(Args, Debug)]
struct LayoutArgs {
    /// Dataset JSON file.
    #[arg(short, long)]
    input: PathBuf,
    /// Canvas width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,
    /// Canvas height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Gap between canvas edge and plot area.
    #[arg(long, default_value_t = 40)]
    margin: u32,
    /// Focused series keys, separated by comma or semicolon.
    #[arg(long)]
    focus: Option<String>,
    /// Hovered series key.
    #[arg(long, conflicts_with = "pointer")]
    hover: Option<String>,
    /// Simulate a pointer at X,Y (pixels); the nearest series becomes hovered.
    #[arg(long)]
    pointer: Option<String>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    layout: LayoutArgs,
    /// Output path (.svg).
    #[arg(short, long)]
    out: PathBuf,
}

fn parse_list(s: &str) -> Vec<String> {
    s.split([',', ';'])
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

fn parse_point(s: &str) -> Option<Vector2> {
    let (a, b) = s.split_once(',')?;
    Some(Vector2::new(a.trim().parse().ok()?, b.trim().parse().ok()?))
}

/// Logs hover changes coming out of the simulated pointer.
struct LogCallbacks;

impl ScatterCallbacks for LogCallbacks {
    fn on_mouse_over(&mut self, series: &Series) {
        info!("pointer over {:?} ({})", series.key, series.label);
    }
}

fn build_plot(args: &LayoutArgs) -> Result<ScatterPlot> {
    let dataset = Dataset::load(&args.input)
        .with_context(|| format!("reading dataset {}", args.input.display()))?;
    let m = args.margin as f64;
    let bounds = Bounds::new(
        m,
        m,
        (args.width as f64 - 2.0 * m).max(1.0),
        (args.height as f64 - 2.0 * m).max(1.0),
    );
    let mut plot = ScatterPlot::from_dataset(&dataset, bounds);

    if let Some(focus) = args.focus.as_deref() {
        plot.set_focus_keys(parse_list(focus));
    }
    if let Some(key) = args.hover.as_deref() {
        plot.set_hover_key(Some(key));
        if plot.hover_key().is_none() {
            anyhow::bail!("unknown series key for --hover: {key}");
        }
    }
    if let Some(p) = args.pointer.as_deref() {
        let pointer = parse_point(p)
            .ok_or_else(|| anyhow::anyhow!("invalid --pointer, expected X,Y"))?;
        plot.on_mouse_move(pointer);
        plot.on_frame(&mut LogCallbacks);
    }
    Ok(plot)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let mut plot = build_plot(&args.layout)?;
    let render = plot.render_data();
    svg::render_svg_file(render, &args.out, args.layout.width, args.layout.height)?;
    eprintln!("Wrote plot to {}", args.out.display());
    Ok(())
}

fn cmd_inspect(args: LayoutArgs) -> Result<()> {
    let mut plot = build_plot(&args)?;
    let json = serde_json::to_string_pretty(plot.render_data())?;
    println!("{json}");
    Ok(())
}

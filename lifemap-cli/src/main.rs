use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use lifemap_data::metric::Metric;
use lifemap_data::topology::{Topology, DEFAULT_OBJECT};
use lifemap_geometry::controller::ZoomController;
use lifemap_geometry::geo_types::{coord, Geometry, Rect};
use lifemap_geometry::projection::{EquirectangularProjection, PlanarProjection, Projection};
use lifemap_geometry::transition::ZoomTransition;
use lifemap_geometry::zoom::{ZoomConfig, ZoomTransform};
use lifemap_guides::legend::choropleth::render_legend;
use lifemap_guides::legend::config::LegendConfig;
use lifemap_scales::color::interpolate::ColorSpaceKind;
use lifemap_scales::config::ScaleSpec;
use lifemap_scales::format::LegendMode;
use lifemap_scenegraph::scene_graph::SceneGraph;
use log::info;
use serde::Serialize;

/// Red-to-green ramp used when no colors are given
const DEFAULT_COLORS: &[&str] = &["#d7191c", "#fdae61", "#ffffbf", "#a6d96a", "#1a9641"];

/// Choropleth legend rendering and zoom math for the world life expectancy map
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a color legend to SVG or PNG
    Legend(LegendArgs),

    /// Print the zoom transform that fits a bounding box into the viewport
    Zoom(ZoomArgs),
}

#[derive(clap::Args)]
struct LegendArgs {
    /// JSON scale spec file. Mutually exclusive with --topology
    #[arg(long, conflicts_with = "topology")]
    spec: Option<PathBuf>,

    /// Enriched TopoJSON file whose region values define the scale
    #[arg(long, required_unless_present = "spec")]
    topology: Option<PathBuf>,

    /// TopoJSON object holding the regions
    #[arg(long, default_value = DEFAULT_OBJECT)]
    object: String,

    #[arg(long, value_enum, default_value_t = MetricArg::LifeExpectancy)]
    metric: MetricArg,

    /// Year to read values from (all years when omitted)
    #[arg(long)]
    year: Option<u16>,

    /// Kind of scale to build from topology values
    #[arg(long, value_enum, default_value_t = ScaleKindArg::Quantile)]
    scale: ScaleKindArg,

    /// CSS colors for the scale range
    #[arg(long, value_delimiter = ',')]
    colors: Vec<String>,

    #[arg(long, value_enum, default_value_t = ColorSpaceArg::Srgb)]
    color_space: ColorSpaceArg,

    /// Axis mode (defaults to the metric's mode, or linear for spec files)
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long)]
    low_label: Option<String>,

    #[arg(long)]
    high_label: Option<String>,

    #[arg(long, default_value_t = 425.0)]
    width: f32,

    #[arg(long, default_value_t = 75.0)]
    height: f32,

    /// Output path; `.png` rasterizes, anything else writes SVG. Prints SVG when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Scale factor for PNG output
    #[arg(long, default_value_t = 2.0)]
    scale_factor: f32,
}

#[derive(clap::Args)]
struct ZoomArgs {
    /// Region bounds as x0 y0 x1 y1
    #[arg(long, num_args = 4, value_names = ["X0", "Y0", "X1", "Y1"], allow_negative_numbers = true)]
    bounds: Vec<f64>,

    /// Treat bounds as longitude/latitude degrees under a world-fitting equirectangular projection
    #[arg(long)]
    geographic: bool,

    #[arg(long, default_value_t = 960.0)]
    width: f64,

    #[arg(long, default_value_t = 480.0)]
    height: f64,

    /// Also print the transition sampled at this frame rate
    #[arg(long)]
    fps: Option<f64>,
}

#[derive(Copy, Clone, ValueEnum)]
enum MetricArg {
    LifeExpectancy,
    Population,
}

impl From<MetricArg> for Metric {
    fn from(value: MetricArg) -> Self {
        match value {
            MetricArg::LifeExpectancy => Metric::LifeExpectancy,
            MetricArg::Population => Metric::Population,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum ScaleKindArg {
    Quantile,
    Linear,
    Log,
}

#[derive(Copy, Clone, ValueEnum)]
enum ColorSpaceArg {
    Srgb,
    Hsl,
    Lab,
}

impl From<ColorSpaceArg> for ColorSpaceKind {
    fn from(value: ColorSpaceArg) -> Self {
        match value {
            ColorSpaceArg::Srgb => ColorSpaceKind::Srgb,
            ColorSpaceArg::Hsl => ColorSpaceKind::Hsl,
            ColorSpaceArg::Lab => ColorSpaceKind::Lab,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum ModeArg {
    Linear,
    Logarithmic,
}

impl From<ModeArg> for LegendMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Linear => LegendMode::Linear,
            ModeArg::Logarithmic => LegendMode::Logarithmic,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Legend(args) => run_legend(&args),
        Commands::Zoom(args) => run_zoom(&args),
    }
}

fn run_legend(args: &LegendArgs) -> anyhow::Result<()> {
    let metric = Metric::from(args.metric);
    let (spec, default_mode, mut config) = match (&args.spec, &args.topology) {
        (Some(path), _) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read scale spec {}", path.display()))?;
            (ScaleSpec::from_json(&text)?, LegendMode::Linear, LegendConfig::default())
        }
        (None, Some(path)) => {
            let topology = Topology::from_path(path)
                .with_context(|| format!("Failed to read topology {}", path.display()))?;
            let regions = topology.regions(&args.object)?;
            let values = metric.values(&regions, args.year);
            let spec = spec_from_values(args.scale, values, colors_or_default(&args.colors), args.color_space)?;
            let config = LegendConfig::default().with_labels(metric.low_label(), metric.high_label());
            (spec, metric.legend_mode(), config)
        }
        (None, None) => bail!("Either --spec or --topology is required"),
    };

    if let Some(low) = &args.low_label {
        config.low_label = low.clone();
    }
    if let Some(high) = &args.high_label {
        config.high_label = high.clone();
    }
    let mode = args.mode.map(LegendMode::from).unwrap_or(default_mode);

    let scale = spec.build()?;
    let mut scene = SceneGraph::new(args.width, args.height);
    let legend = render_legend(&mut scene, &scale, args.width, args.height, mode, &config)?;
    info!(
        "Rendered {} legend with {} segments",
        legend.kind,
        legend.segments.len()
    );

    let svg = lifemap_svg::render_svg(&scene)?;
    match &args.output {
        None => println!("{svg}"),
        Some(path) if is_png(path) => {
            let png = lifemap_svg::png::svg_to_png(&svg, args.scale_factor)?;
            fs::write(path, png).with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        Some(path) => {
            fs::write(path, svg).with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
    }
    Ok(())
}

fn colors_or_default(colors: &[String]) -> Vec<String> {
    if colors.is_empty() {
        DEFAULT_COLORS.iter().map(|c| c.to_string()).collect()
    } else {
        colors.to_vec()
    }
}

fn spec_from_values(
    kind: ScaleKindArg,
    values: Vec<f32>,
    colors: Vec<String>,
    color_space: ColorSpaceArg,
) -> anyhow::Result<ScaleSpec> {
    let spec = match kind {
        ScaleKindArg::Quantile => ScaleSpec::Quantile {
            samples: values,
            colors,
        },
        ScaleKindArg::Linear | ScaleKindArg::Log => {
            let Some(domain) = lifemap_scales::array::extent(&values) else {
                bail!("No values to build a {} scale from", kind_name(kind));
            };
            if matches!(kind, ScaleKindArg::Linear) {
                ScaleSpec::Linear {
                    domain,
                    colors,
                    color_space: color_space.into(),
                    nice: None,
                }
            } else {
                ScaleSpec::Log {
                    domain,
                    colors,
                    color_space: color_space.into(),
                    nice: false,
                }
            }
        }
    };
    Ok(spec)
}

fn kind_name(kind: ScaleKindArg) -> &'static str {
    match kind {
        ScaleKindArg::Quantile => "quantile",
        ScaleKindArg::Linear => "linear",
        ScaleKindArg::Log => "log",
    }
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

#[derive(Serialize)]
struct ZoomOutput {
    transform: ZoomTransform,
    #[serde(skip_serializing_if = "Option::is_none")]
    frames: Option<Vec<ZoomTransform>>,
}

fn run_zoom(args: &ZoomArgs) -> anyhow::Result<()> {
    let [x0, y0, x1, y1] = args.bounds[..] else {
        bail!("--bounds takes exactly four values");
    };
    let region = Geometry::Rect(Rect::new(coord! { x: x0, y: y0 }, coord! { x: x1, y: y1 }));
    let viewport = [args.width, args.height];

    let transition = if args.geographic {
        let projection = EquirectangularProjection::fit_world(args.width, args.height);
        select_region(projection, viewport, &region)?
    } else {
        select_region(PlanarProjection, viewport, &region)?
    };

    let output = ZoomOutput {
        transform: transition.to,
        frames: args.fps.map(|fps| transition.frames(fps)),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn select_region<P: Projection>(
    projection: P,
    viewport: [f64; 2],
    region: &Geometry<f64>,
) -> anyhow::Result<ZoomTransition> {
    let mut controller = ZoomController::try_new(projection, viewport, ZoomConfig::default())?;
    Ok(controller.on_region_selected(region)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_is_png() {
        assert!(is_png(Path::new("legend.PNG")));
        assert!(!is_png(Path::new("legend.svg")));
        assert!(!is_png(Path::new("legend")));
    }

    #[test]
    fn test_spec_from_values() {
        let spec = spec_from_values(
            ScaleKindArg::Linear,
            vec![52.0, 81.5, 67.0],
            colors_or_default(&[]),
            ColorSpaceArg::Lab,
        )
        .unwrap();
        match spec {
            ScaleSpec::Linear { domain, colors, color_space, .. } => {
                assert_eq!(domain, (52.0, 81.5));
                assert_eq!(colors.len(), DEFAULT_COLORS.len());
                assert_eq!(color_space, ColorSpaceKind::Lab);
            }
            other => panic!("unexpected spec {other:?}"),
        }

        assert!(spec_from_values(ScaleKindArg::Log, vec![], vec![], ColorSpaceArg::Srgb).is_err());
    }

    #[test]
    fn test_parse_zoom_args() {
        let cli = Cli::try_parse_from([
            "lifemap", "zoom", "--bounds", "-10", "40", "5", "50", "--geographic",
        ])
        .unwrap();
        let Commands::Zoom(args) = cli.command else {
            panic!("expected zoom");
        };
        assert_eq!(args.bounds, vec![-10.0, 40.0, 5.0, 50.0]);
        assert!(args.geographic);
    }
}

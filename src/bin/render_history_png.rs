#[cfg(feature = "cairo-backend")]
use coin_chart::api::{ChartEngine, ChartEngineConfig, Theme};
#[cfg(feature = "cairo-backend")]
use coin_chart::core::Viewport;
#[cfg(feature = "cairo-backend")]
use serde::Deserialize;
#[cfg(feature = "cairo-backend")]
use std::fs;
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_PATH: &str = "target/coin_chart.png";
#[cfg(feature = "cairo-backend")]
const DEFAULT_WIDTH: u32 = 800;
#[cfg(feature = "cairo-backend")]
const DEFAULT_HEIGHT: u32 = 480;

#[cfg(feature = "cairo-backend")]
#[derive(Debug, Deserialize)]
struct HistoryFile {
    label: String,
    timestamps: Vec<String>,
    prices: Vec<f64>,
}

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    input_path: Option<PathBuf>,
    output_path: PathBuf,
    viewport: Viewport,
    theme: Theme,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    use coin_chart::render::CairoRenderer;

    let args = parse_args()?;
    let history = match &args.input_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read history `{}`: {err}", path.display()))?;
            serde_json::from_str::<HistoryFile>(&raw)
                .map_err(|err| format!("failed to parse history json: {err}"))?
        }
        None => sample_history(),
    };

    let renderer = CairoRenderer::new(args.viewport.width as i32, args.viewport.height as i32)
        .map_err(|err| format!("cairo renderer init error: {err}"))?;
    let config = ChartEngineConfig::new(args.viewport).with_theme(args.theme);
    let mut engine =
        ChartEngine::new(renderer, config).map_err(|err| format!("engine init: {err}"))?;
    engine
        .set_chart_data(history.timestamps, history.prices, history.label)
        .map_err(|err| format!("invalid history: {err}"))?;
    let points = engine
        .render()
        .map_err(|err| format!("render failed: {err}"))?;

    if let Some(parent) = args.output_path.parent() {
        fs::create_dir_all(parent).map_err(|err| {
            format!("failed to create output dir `{}`: {err}", parent.display())
        })?;
    }
    engine
        .renderer()
        .write_png(&args.output_path)
        .map_err(|err| format!("png write failed: {err}"))?;

    println!(
        "done: wrote {} ({} points)",
        args.output_path.display(),
        points.len()
    );
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn sample_history() -> HistoryFile {
    HistoryFile {
        label: "Bitcoin".to_owned(),
        timestamps: [
            "Jan 01", "Jan 02", "Jan 03", "Jan 04", "Jan 05", "Jan 06", "Jan 07",
        ]
        .map(str::to_owned)
        .to_vec(),
        prices: vec![
            42_180.5, 43_020.0, 42_710.25, 44_105.8, 43_880.1, 45_210.0, 44_960.4,
        ],
    }
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut input_path = None;
    let mut output_path = PathBuf::from(DEFAULT_OUTPUT_PATH);
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut theme = Theme::default();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input_path = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = PathBuf::from(value);
            }
            "--width" => width = parse_dimension(args.next(), "--width")?,
            "--height" => height = parse_dimension(args.next(), "--height")?,
            "--dark" => theme = Theme::Dark,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        input_path,
        output_path,
        viewport: Viewport::new(width, height),
        theme,
    })
}

#[cfg(feature = "cairo-backend")]
fn parse_dimension(value: Option<String>, flag: &str) -> Result<u32, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    value
        .parse::<u32>()
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| format!("invalid value `{value}` for {flag}"))
}

#[cfg(feature = "cairo-backend")]
fn print_usage() {
    println!("{}", usage_message());
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> String {
    format!(
        "Usage: cargo run --features cairo-backend --bin render_history_png -- [options]\n\nOptions:\n  --input <path>    History json with `label`, `timestamps`, `prices` (default: built-in sample)\n  --output <path>   PNG output path (default: {DEFAULT_OUTPUT_PATH})\n  --width <px>      Surface width (default: {DEFAULT_WIDTH})\n  --height <px>     Surface height (default: {DEFAULT_HEIGHT})\n  --dark            Use the dark theme\n  -h, --help        Show this message"
    )
}

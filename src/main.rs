use anyhow::{Context, Result, anyhow};
use chitralekhan::draw::SourceImage;
use chitralekhan::input::parse_script;
use chitralekhan::{Config, DrawingSession};
use clap::{ArgAction, Parser};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "chitralekhan")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("CHITRALEKHAN_GIT_HASH"), ")"),
    about = "Annotate photos with freehand strokes, circles, rectangles and polygons"
)]
struct Cli {
    /// Photo to annotate (PNG)
    #[arg(long, short = 'i', value_name = "PNG")]
    image: PathBuf,

    /// Size the photo was displayed at while drawing (defaults to the photo size)
    #[arg(long, short = 'd', value_name = "WIDTHxHEIGHT")]
    display: Option<DisplayArg>,

    /// Gesture script, one command per line
    #[arg(long, short = 's', value_name = "FILE")]
    script: PathBuf,

    /// Where to write the rendered PNG
    #[arg(long, short = 'o', value_name = "PNG")]
    output: PathBuf,

    /// Draw the annotation over the photo instead of writing a transparent layer
    #[arg(long, action = ArgAction::SetTrue)]
    composite: bool,

    /// Config file to use instead of ~/.config/chitralekhan/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy)]
struct DisplayArg {
    width: u32,
    height: u32,
}

impl FromStr for DisplayArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| format!("invalid dimension '{v}'"))
        };
        Ok(Self {
            width: parse(w)?,
            height: parse(h)?,
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let source = SourceImage::from_png(&cli.image)
        .with_context(|| format!("Failed to load image {}", cli.image.display()))?;
    log::info!(
        "Annotating {} ({}x{})",
        cli.image.display(),
        source.width(),
        source.height()
    );

    let script = fs::read_to_string(&cli.script)
        .with_context(|| format!("Failed to read script {}", cli.script.display()))?;
    let commands = parse_script(&script)
        .with_context(|| format!("Invalid script {}", cli.script.display()))?;

    let mut session = DrawingSession::from_config(&config, source);
    let display = cli.display.unwrap_or(DisplayArg {
        width: source.width(),
        height: source.height(),
    });
    session.set_display_size(display.width, display.height);
    session.apply_all(&commands);
    log::info!(
        "Applied {} commands, {} strokes on the canvas",
        commands.len(),
        session.strokes().len()
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start render runtime")?;
    let image = runtime
        .block_on(session.render_async())
        .context("Failed to render annotation")?;

    let file = File::create(&cli.output)
        .with_context(|| format!("Failed to create {}", cli.output.display()))?;
    let mut writer = BufWriter::new(file);
    let written = if cli.composite {
        image.composite_over_png(&cli.image, &mut writer)
    } else {
        image.write_png(&mut writer)
    };
    written.map_err(|e| anyhow!("Failed to write {}: {e}", cli.output.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    log::info!("Wrote {}", cli.output.display());
    Ok(())
}

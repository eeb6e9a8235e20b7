use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "clipframe", version)]
struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the clip path for a scene.
    Path(PathArgs),
    /// Write an SVG document filling the clip path.
    Svg(OutArgs),
    /// Render the clip path coverage as a PNG.
    Frame(OutArgs),
    /// Print a flat frame path for a viewport.
    Preset(PresetArgs),
}

#[derive(Parser, Debug)]
struct PathArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Tilt the resulting path about X (degrees), without perspective.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    tilt_x: f64,

    /// Tilt the resulting path about Y (degrees), without perspective.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    tilt_y: f64,
}

#[derive(Parser, Debug)]
struct OutArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PresetArgs {
    /// Which frame to print.
    #[arg(long, value_enum, default_value_t = PresetKind::Preview)]
    kind: PresetKind,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Corner curve size of the preview frame.
    #[arg(long, default_value_t = 10.0)]
    offset: f64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetKind {
    /// Centered square sized from the viewport width.
    Preview,
    /// Collapsed frame at the viewport center.
    Empty,
    /// Whole viewport.
    Full,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Path(args) => cmd_path(args),
        Command::Svg(args) => cmd_svg(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Preset(args) => cmd_preset(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_scene_path(path: &Path) -> anyhow::Result<(clipframe::Scene, String)> {
    let scene = clipframe::Scene::from_path(path)
        .with_context(|| format!("load scene '{}'", path.display()))?;
    let mut session = scene.session()?;
    let d = session
        .update()
        .with_context(|| format!("build clip path for '{}'", path.display()))?
        .to_string();
    tracing::debug!(bounds = ?session.bounds(), "projected frame");
    Ok((scene, d))
}

fn cmd_path(args: PathArgs) -> anyhow::Result<()> {
    let (_, mut d) = load_scene_path(&args.in_path)?;
    if args.tilt_x != 0.0 || args.tilt_y != 0.0 {
        d = clipframe::tilt_path(&d, args.tilt_x.to_radians(), args.tilt_y.to_radians())?;
    }
    println!("{d}");
    Ok(())
}

fn cmd_svg(args: OutArgs) -> anyhow::Result<()> {
    let (scene, d) = load_scene_path(&args.in_path)?;
    ensure_parent_dir(&args.out)?;
    std::fs::write(&args.out, clipframe::svg_document(&d, scene.viewport))
        .with_context(|| format!("write svg '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frame(args: OutArgs) -> anyhow::Result<()> {
    let (scene, d) = load_scene_path(&args.in_path)?;
    let mask = clipframe::rasterize_mask(&d, scene.viewport)?;
    ensure_parent_dir(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &mask.to_straight_rgba8(),
        mask.width,
        mask.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_preset(args: PresetArgs) -> anyhow::Result<()> {
    let vp = clipframe::Viewport::new(args.width, args.height)?;
    let d = match args.kind {
        PresetKind::Preview => {
            clipframe::preview_frame_path(vp, clipframe::preview_length(vp), args.offset)
        }
        PresetKind::Empty => clipframe::preview_frame_path(vp, 0.0, 0.0),
        PresetKind::Full => clipframe::full_frame_path(vp),
    };
    println!("{d}");
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

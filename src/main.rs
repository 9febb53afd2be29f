use clap::{Parser, Subcommand};
use mandelbrot_explorer::{
    Complex, EngineKind, PaletteKind, PpmFilePresenter, RenderOnceController, Step, TextRender,
    ViewState, build_renderer,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mandelbrot", version, about = "Render the Mandelbrot set without a window")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Render one frame to a binary PPM file
    Render(RenderArgs),
    /// Print a 40x20 character rendering to stdout
    Ascii,
}

#[derive(clap::Args, Debug)]
struct RenderArgs {
    #[arg(long, default_value_t = mandelbrot_explorer::DEFAULT_WIDTH)]
    width: u32,

    #[arg(long, default_value_t = mandelbrot_explorer::DEFAULT_HEIGHT)]
    height: u32,

    /// Plane units per pixel
    #[arg(long, default_value_t = 0.005)]
    zoom: f64,

    #[arg(long, default_value_t = -0.5, allow_negative_numbers = true)]
    center_x: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    center_y: f64,

    /// Iteration cap in hundreds
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=9))]
    depth: u8,

    /// Block size used for subsampling, 1 is full resolution
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=9))]
    quality: u8,

    #[arg(long, default_value = PaletteKind::default().name())]
    palette: PaletteKind,

    #[arg(long, default_value = EngineKind::default().name())]
    engine: EngineKind,

    #[arg(long, short, default_value = "output/mandelbrot.ppm")]
    output: PathBuf,
}

fn step(name: &str, value: u8) -> Result<Step, String> {
    Step::new(value).ok_or_else(|| format!("{} must be between 1 and 9, got {}", name, value))
}

fn render(args: RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = mandelbrot_explorer::SessionConfig::new(args.width, args.height, args.engine)?;
    let view = ViewState::new(
        args.zoom,
        Complex::new(args.center_x, args.center_y),
        ViewState::default().iteration_cap(),
        ViewState::default().quality(),
        args.palette,
    )?
    .with_iteration_step(step("depth", args.depth)?)
    .with_quality_step(step("quality", args.quality)?);

    let renderer = build_renderer(config.engine())?;
    let mut controller = RenderOnceController::new(renderer, PpmFilePresenter::new());

    controller.generate(&view.render_request(config.width(), config.height()))?;

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    controller.write(&args.output)?;

    log::info!("wrote {}", args.output.display());

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    match Cli::parse().command {
        CliCommand::Render(args) => render(args),
        CliCommand::Ascii => {
            TextRender::default().write_to(&mut std::io::stdout().lock())?;
            Ok(())
        }
    }
}

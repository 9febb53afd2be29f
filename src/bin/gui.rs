use clap::Parser;
use mandelbrot_explorer::{DEFAULT_HEIGHT, DEFAULT_WIDTH, EngineKind, SessionConfig, run_gui};

#[derive(Parser, Debug)]
#[command(name = "gui", version, about = "Explore the Mandelbrot set in a window")]
struct Args {
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    #[arg(long, default_value = EngineKind::default().name())]
    engine: EngineKind,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let config = SessionConfig::new(args.width, args.height, args.engine)?;

    run_gui(config)?;

    Ok(())
}

use clap::Parser;
use rookery::search::SearchParams;
use rookery::uci::UciEngine;

#[derive(Parser, Debug)]
#[command(name = "rookery-uci", about = "UCI front end for Rookery")]
struct Args {
    /// Default search depth for 'go' without a depth
    #[arg(long, default_value_t = 3)]
    depth: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let mut engine = UciEngine::new(SearchParams { depth: a.depth.max(1), ..SearchParams::default() });
    engine.run_loop()?;
    Ok(())
}

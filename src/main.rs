#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;

/// Place the two-ship fleet on a 10x10 board and print the result.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    naval_placement::init_logging();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    naval_placement::deploy(&mut out)?;
    Ok(())
}

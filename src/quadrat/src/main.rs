use std::io;

use clap::Parser;
use quadrat_pipeline::Pipeline;

mod cli;
use cli::Cli;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    cli.verbosity.setup()?;

    let mut pipeline = Pipeline::new();
    if let Some(workers) = cli.workers {
        pipeline = pipeline.workers(workers);
    }

    pipeline.run(&cli.tokens, io::stdout())?;

    Ok(())
}

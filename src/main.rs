use anyhow::Context;
use clap::Parser;
use scoreboard::cli::Cli;
use scoreboard::logging::init_tracing;
use scoreboard::shutdown::ShutdownHandle;
use scoreboard::ui::runtime;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    init_tracing(&config.logging);

    let shutdown = ShutdownHandle::new();
    shutdown
        .install_signal_handlers()
        .context("Failed to install signal handlers")?;

    runtime::run(&config, shutdown).context("Terminal UI failed")?;
    Ok(())
}

use anyhow::Context;
use clap::Parser;
use primer_core::FrameWaker;
use primer_net::{ApiConfig, Backend, DEFAULT_BASE_URL};
use primer_platform::{ConsoleConfig, run_console_app};
use primer_tour::Tour;

#[derive(Parser, Debug)]
#[command(name = "primer-tour", version, about = "A console tour of UI state concepts")]
struct Cli {
    /// Base URL of the JSON test API
    #[arg(long, env = "PRIMER_API_BASE", default_value = DEFAULT_BASE_URL)]
    api_base: String,

    /// Paint width in columns
    #[arg(long, default_value_t = 72)]
    width: usize,

    /// Keep previous frames on screen instead of clearing
    #[arg(long)]
    no_clear: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    let (waker, wakes) = FrameWaker::channel();
    let backend = Backend::start(&ApiConfig::with_base_url(&cli.api_base), waker.clone())
        .context("starting network backend")?;

    run_console_app(
        ConsoleConfig {
            width: cli.width,
            clear: !cli.no_clear,
        },
        wakes,
        Tour(Some(backend), waker),
    )
}

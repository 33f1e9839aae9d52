use std::io;

use anyhow::Context;
use clap::Parser;
use todo_core::TodoService;
use todo_shell::{App, Cli, Intent};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the URL may come from the flag or the shell.
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let service = TodoService::connect(&cli.base_url);
    info!(base_url = service.base_url(), "using to-do service");

    let mut app = App::new(&service);
    let mut out = io::stdout().lock();
    match cli.command {
        Some(command) => {
            let intent = Intent::from(command);
            app.run_once(&intent, &mut out)
                .with_context(|| format!("{intent:?} against {} failed", service.base_url()))
        }
        None => app
            .run_interactive(io::stdin().lock(), &mut out, &mut io::stderr())
            .context("terminal I/O failed"),
    }
}

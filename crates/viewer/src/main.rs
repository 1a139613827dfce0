//! Status viewer entry point.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use viewer::{HttpStatusFetcher, StatusViewer, TerminalRenderer};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Logs go to stderr and stay quiet by default so they don't break the redraw.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let viewer = StatusViewer::mount(HttpStatusFetcher::new());

    let mut renderer = TerminalRenderer::new(std::io::stdout());
    renderer.draw(&viewer.state())?;
    renderer.draw(&viewer.settled().await)?;

    Ok(())
}

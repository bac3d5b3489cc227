use schemes_fetcher::{CONFIG_URL, FILE_NAME};
use std::path::Path;

#[tokio::main]
async fn main() {
    schemes_fetcher::logging::init();

    let mut stdout = std::io::stdout();
    if let Err(e) =
        schemes_fetcher::run_and_report(CONFIG_URL, Path::new(FILE_NAME), &mut stdout).await
    {
        tracing::error!("writing status output failed: {}", e);
    }
}

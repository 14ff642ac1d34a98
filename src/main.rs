use std::path::Path;

use env_logger::Env;
use rera_scrape::{
    configuration::get_configuration,
    services::{save_projects, scrape_public_dashboard, Droid, OUTPUT_FILE},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let droid = Droid::new(&configuration.webdriver).await?;

    // Quit the session before inspecting the outcome so the browser is
    // released even when the scrape aborted early.
    let outcome = scrape_public_dashboard(&droid.driver).await;
    droid.quit().await?;

    let projects = outcome?;
    save_projects(Path::new(OUTPUT_FILE), &projects)?;
    log::info!(
        "Extracted information for {} projects and saved to {}",
        projects.len(),
        OUTPUT_FILE
    );

    Ok(())
}

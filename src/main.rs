use anyhow::Context;
use clap::Parser;
use tracing::info;

use course_registry::config::Config;
use course_registry::{Courses, Registry, Server, api, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init(config.log_format, config.verbose).context("failed to install logger")?;

    let registry = Registry::with_courses(config.initial_courses()?)?;
    info!(courses = registry.len(), "registry seeded");

    Server::bind(config.addr)
        .serve(api::routes(Courses::new(registry)))
        .await?;
    Ok(())
}

mod app;
mod client;
mod config;
mod debounce;
mod models;
mod page;
mod render;

use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::app::Viewer;
use crate::client::ApiClient;
use crate::config::{Config, DEBOUNCE_MS};
use crate::debounce::Debouncer;
use crate::page::{MemoryPage, Section};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting viewer v{}", env!("CARGO_PKG_VERSION"));
    info!("API base URL: {}", config.api_base_url);

    let api = ApiClient::new(config.api_base_url.clone());
    let mut viewer = Viewer::new(api, MemoryPage::new());

    // Page-ready trigger: load and render everything once.
    viewer.load_profile().await;
    for section in Section::ALL {
        print_container(&viewer, section);
    }

    // Each stdin line is a search-input event; an empty line clears the
    // query. Events route through the debouncer, so only the last line of
    // a burst reaches the filter.
    let (mut debouncer, mut queries) = Debouncer::new(Duration::from_millis(DEBOUNCE_MS));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(query) => debouncer.schedule(query.trim().to_string()),
                None => break,
            },
            Some(query) = queries.recv() => {
                viewer.apply_filter(&query).await;
                print_container(&viewer, Section::Projects);
            }
        }
    }

    info!("stdin closed, shutting down");
    Ok(())
}

fn print_container(viewer: &Viewer<ApiClient, MemoryPage>, section: Section) {
    println!("#{}", section.element_id());
    println!("{}", viewer.page().content(section));
}

use anyhow::Result;
use dioxus::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app;
mod config;

mod domain {
    pub mod entities {
        pub mod page;
        pub mod query;
        pub mod record;
    }
}

mod infra {
    pub mod http {
        pub mod client;
    }
}

mod platform {
    pub mod desktop {
        pub mod webview;
    }
}

mod ui {
    pub mod columns;
    pub mod pagination;
    pub mod search;
    pub mod styles;
    pub mod theme;
    pub mod state {
        pub mod app_state;
    }
}

mod usecase {
    pub mod ports {
        pub mod source;
    }
    pub mod services {
        pub mod fetch_controller;
        pub mod query_service;
        pub mod response_mapping;
    }
}

#[cfg(test)]
mod tests;

use crate::app::App;
use crate::config::AppConfig;
use crate::platform::desktop::webview::default_webview_data_dir;

#[derive(Clone)]
struct StartupError(String);

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let webview_data_dir = default_webview_data_dir()?;
    let builder = dioxus::LaunchBuilder::desktop().with_cfg(
        dioxus::desktop::Config::new()
            .with_window(dioxus::desktop::WindowBuilder::new().with_title("DataViewX"))
            .with_data_directory(webview_data_dir),
    );

    match AppConfig::from_env() {
        Ok(config) => {
            info!(api_url = %config.api_url, page_size = config.page_size, "starting DataViewX");
            builder.with_context(config).launch(App);
        }
        Err(err) => {
            error!("invalid configuration: {err:#}");
            builder
                .with_context(StartupError(format!("{err:#}")))
                .launch(ConfigErrorPage);
        }
    }
    Ok(())
}

#[component]
fn ConfigErrorPage() -> Element {
    let StartupError(message) = use_context::<StartupError>();
    rsx! {
        div { style: "padding: 20px; font-family: sans-serif;",
            h2 { "Unable to start" }
            p { "Configuration error: {message}" }
            p { "Set DATAVIEWX_API_URL (and optionally DATAVIEWX_API_TOKEN) in the environment or a .env file." }
        }
    }
}

use anyhow::{anyhow, Context, Result};

use crate::infra::http::client::ParamKeys;
use crate::ui::state::app_state::ViewMode;
use crate::usecase::services::response_mapping::FieldPaths;

pub const ENV_API_URL: &str = "DATAVIEWX_API_URL";
pub const ENV_API_TOKEN: &str = "DATAVIEWX_API_TOKEN";
pub const ENV_PAGE_SIZE: &str = "DATAVIEWX_PAGE_SIZE";
pub const ENV_DISPLAY: &str = "DATAVIEWX_DISPLAY";
pub const ENV_LIST_PATH: &str = "DATAVIEWX_LIST_PATH";
pub const ENV_TOTAL_PATH: &str = "DATAVIEWX_TOTAL_PATH";
pub const ENV_PAGE_PATH: &str = "DATAVIEWX_PAGE_PATH";
pub const ENV_TOTAL_PAGES_PATH: &str = "DATAVIEWX_TOTAL_PAGES_PATH";
pub const ENV_SEARCH_KEY: &str = "DATAVIEWX_SEARCH_KEY";
pub const ENV_PAGE_KEY: &str = "DATAVIEWX_PAGE_KEY";
pub const ENV_LIMIT_KEY: &str = "DATAVIEWX_LIMIT_KEY";
pub const ENV_SORT_KEY: &str = "DATAVIEWX_SORT_KEY";

const DEFAULT_PAGE_SIZE: u32 = 10;

/// Settings for the demo window, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
    pub api_token: Option<String>,
    pub page_size: u32,
    pub display: ViewMode,
    pub field_paths: FieldPaths,
    pub param_keys: ParamKeys,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_url = get(ENV_API_URL).ok_or_else(|| anyhow!("{ENV_API_URL} is not set"))?;

        let page_size = match get(ENV_PAGE_SIZE) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("{ENV_PAGE_SIZE} must be a positive integer, got `{raw}`"))
                .and_then(|size| {
                    if size == 0 {
                        Err(anyhow!("{ENV_PAGE_SIZE} must be greater than zero"))
                    } else {
                        Ok(size)
                    }
                })?,
            None => DEFAULT_PAGE_SIZE,
        };

        let display = match get(ENV_DISPLAY).as_deref().map(str::trim) {
            None | Some("list") => ViewMode::List,
            Some("grid") => ViewMode::Grid,
            Some(other) => {
                return Err(anyhow!(
                    "{ENV_DISPLAY} must be `list` or `grid`, got `{other}`"
                ))
            }
        };

        let defaults = FieldPaths::default();
        let field_paths = FieldPaths {
            list: get(ENV_LIST_PATH).unwrap_or(defaults.list),
            total: get(ENV_TOTAL_PATH).unwrap_or(defaults.total),
            page: get(ENV_PAGE_PATH).unwrap_or(defaults.page),
            total_pages: get(ENV_TOTAL_PAGES_PATH).unwrap_or(defaults.total_pages),
        };

        let default_keys = ParamKeys::default();
        let param_keys = ParamKeys {
            page: get(ENV_PAGE_KEY).unwrap_or(default_keys.page),
            limit: get(ENV_LIMIT_KEY).unwrap_or(default_keys.limit),
            search: get(ENV_SEARCH_KEY).unwrap_or(default_keys.search),
            sort: get(ENV_SORT_KEY).unwrap_or(default_keys.sort),
        };

        Ok(Self {
            api_url,
            api_token: get(ENV_API_TOKEN),
            page_size,
            display,
            field_paths,
            param_keys,
        })
    }
}

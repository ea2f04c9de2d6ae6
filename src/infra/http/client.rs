use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::domain::entities::query::PageRequest;
use crate::usecase::ports::source::{FetchError, ListSource};

/// Query-string names used by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamKeys {
    pub page: String,
    pub limit: String,
    pub search: String,
    pub sort: String,
}

impl Default for ParamKeys {
    fn default() -> Self {
        Self {
            page: "page".to_string(),
            limit: "limit".to_string(),
            search: "search".to_string(),
            sort: "sort".to_string(),
        }
    }
}

/// Ordered query pairs for a request: page and limit always, search and
/// sort only when set.
pub fn query_pairs(request: &PageRequest, keys: &ParamKeys) -> Vec<(String, String)> {
    let mut pairs = vec![
        (keys.page.clone(), request.page.to_string()),
        (keys.limit.clone(), request.page_size.to_string()),
    ];
    if let Some(search) = request.search.as_ref().filter(|term| !term.is_empty()) {
        pairs.push((keys.search.clone(), search.clone()));
    }
    if let Some(sort) = &request.sort {
        pairs.push((keys.sort.clone(), sort.clone()));
    }
    pairs
}

/// `GET <base_url>?...` against a JSON list endpoint.
#[derive(Debug, Clone)]
pub struct HttpListSource {
    client: Client,
    base_url: String,
    token: Option<String>,
    keys: ParamKeys,
}

impl HttpListSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            token: None,
            keys: ParamKeys::default(),
        }
    }

    /// Empty tokens are treated as absent.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|token| !token.trim().is_empty());
        self
    }

    pub fn with_param_keys(mut self, keys: ParamKeys) -> Self {
        self.keys = keys;
        self
    }
}

#[async_trait]
impl ListSource for HttpListSource {
    async fn fetch(&self, request: &PageRequest) -> Result<Value, FetchError> {
        let pairs = query_pairs(request, &self.keys);
        debug!(url = %self.base_url, ?pairs, "GET list page");

        let mut builder = self.client.get(&self.base_url).query(&pairs);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        let response = builder.send().await?.error_for_status()?;
        let body = response.json::<Value>().await?;
        Ok(body)
    }

    fn describe(&self) -> String {
        format!("GET {}", self.base_url)
    }
}

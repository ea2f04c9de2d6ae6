use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::entities::page::PageResult;
use crate::domain::entities::query::PageRequest;
use crate::usecase::ports::source::{FetchError, ListSource};
use crate::usecase::services::response_mapping::{FieldPaths, ResponseMapper};

pub type TransformFn = dyn Fn(Value) -> Result<Value, FetchError> + Send + Sync;

/// Runs one page request end to end: fetch, optional reshape, extraction.
pub struct QueryService {
    source: Arc<dyn ListSource>,
    mapper: Arc<dyn ResponseMapper>,
    transform: Option<Arc<TransformFn>>,
}

impl QueryService {
    pub fn new(source: Arc<dyn ListSource>) -> Self {
        Self {
            source,
            mapper: Arc::new(FieldPaths::default()),
            transform: None,
        }
    }

    pub fn with_mapper(mut self, mapper: Arc<dyn ResponseMapper>) -> Self {
        self.mapper = mapper;
        self
    }

    pub fn with_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(Value) -> Result<Value, FetchError> + Send + Sync + 'static,
    {
        self.transform = Some(Arc::new(transform));
        self
    }

    pub async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult, FetchError> {
        debug!(source = %self.source.describe(), ?request, "fetching page");
        let body = self.source.fetch(request).await?;
        let body = match &self.transform {
            Some(transform) => (**transform)(body)?,
            None => body,
        };
        let page = self.mapper.map(&body)?;
        if let Some(reported) = page.reported_page {
            if reported != request.page {
                warn!(
                    requested = request.page,
                    reported, "server reported a different page than requested"
                );
            }
        }
        Ok(page)
    }
}

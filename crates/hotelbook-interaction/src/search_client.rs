//! Search service client.

use crate::http::ApiClient;
use async_trait::async_trait;
use hotelbook_core::Result;
use hotelbook_core::api::SearchApi;
use hotelbook_core::search::{SearchPayload, SearchQuery, SearchResult};
use reqwest::Method;

#[derive(Clone)]
pub struct HttpSearchApi {
    api: ApiClient,
}

impl HttpSearchApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl SearchApi for HttpSearchApi {
    async fn search_hotels(&self, query: &SearchQuery) -> Result<Vec<SearchResult>> {
        let request = self.api.request(Method::GET, "search/hotels")?.query(query);
        let payload: Option<SearchPayload> = self.api.send(request).await?;
        let results = payload
            .map(SearchPayload::into_results)
            .unwrap_or_default();
        tracing::debug!(city = %query.city, count = results.len(), "Search answered");
        Ok(results)
    }
}

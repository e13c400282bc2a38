//! REST implementation of [`ProductApi`]

use super::ProductApi;
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::types::{NewRecord, Record, RecordId, RecordUpdate};
use async_trait::async_trait;
use reqwest::Method;
use tracing::debug;

/// Resource path used when none is configured
pub const DEFAULT_RESOURCE: &str = "posts";

/// Product API backed by a JSON REST resource
#[derive(Debug, Clone)]
pub struct RestProductApi {
    client: HttpClient,
    resource: String,
}

impl RestProductApi {
    /// Create an API client for `resource` (e.g. `posts`)
    pub fn new(client: HttpClient, resource: impl Into<String>) -> Self {
        let resource = resource.into();
        Self {
            client,
            resource: resource.trim_matches('/').to_string(),
        }
    }

    /// Collection path
    fn collection(&self) -> String {
        format!("/{}", self.resource)
    }

    /// Item path
    fn item(&self, id: RecordId) -> String {
        format!("/{}/{}", self.resource, id)
    }
}

#[async_trait]
impl ProductApi for RestProductApi {
    async fn list(&self) -> Result<Vec<Record>> {
        let records: Vec<Record> = self.client.get_json(&self.collection()).await?;
        debug!("Listed {} records", records.len());
        Ok(records)
    }

    async fn search(&self, query: &str) -> Result<Vec<Record>> {
        let records: Vec<Record> = self
            .client
            .get_json_with_config(&self.collection(), RequestConfig::new().query("q", query))
            .await?;
        debug!("Search '{}' matched {} records", query, records.len());
        Ok(records)
    }

    async fn create(&self, record: &NewRecord) -> Result<Record> {
        let body = serde_json::to_value(record)?;
        self.client
            .request_json(
                Method::POST,
                &self.collection(),
                RequestConfig::new().json(body),
            )
            .await
    }

    async fn update(&self, record: &RecordUpdate) -> Result<()> {
        let body = serde_json::to_value(record)?;
        self.client.put(&self.item(record.id), body).await?;
        Ok(())
    }

    async fn delete(&self, id: RecordId) -> Result<()> {
        self.client.delete(&self.item(id)).await?;
        Ok(())
    }
}

//! Remote store gateway
//!
//! Translates typed operations into HTTP exchanges against the store's
//! external API (`/etapi/...`) and classifies failures into authentication,
//! not-found, and generic store errors. No retrying happens at this layer;
//! callers decide whether an operation is worth repeating.

pub mod types;

use reqwest::{header, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use crate::attrs::AttributeSpec;
use crate::config::StoreConfig;
use crate::error::{NotegateError, Result};
use types::{Attribute, CreateNoteParams, CreateNoteResponse, Note, NoteWithContent, SearchResult};

/// Error body shape the store uses for non-success responses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Search endpoint response envelope
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

/// Typed HTTP client for the remote notes store
///
/// Owns a single connection pool and the read-only connection parameters for
/// the lifetime of the process.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    config: StoreConfig,
}

impl StoreClient {
    /// Create a client from connection parameters
    pub fn new(config: StoreConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// The connection parameters this client was built with
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/etapi{}", self.config.base_url, endpoint)
    }

    /// Classify a non-success response into a typed error
    async fn ensure_success(&self, response: Response, endpoint: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|e| e.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });

        Err(match status {
            StatusCode::UNAUTHORIZED => NotegateError::Auth(message),
            StatusCode::NOT_FOUND => NotegateError::NotFound {
                endpoint: endpoint.to_string(),
                message,
            },
            _ => NotegateError::Api {
                status: status.as_u16(),
                message,
            },
        })
    }

    /// Issue a JSON request and parse the response body
    ///
    /// An empty success body deserializes as JSON `null`, so unit-returning
    /// endpoints (deletion) are an empty success rather than a parse failure.
    async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        tracing::debug!("{} {}", method, endpoint);

        let mut request = self
            .http
            .request(method, self.endpoint_url(endpoint))
            .header(header::AUTHORIZATION, &self.config.token);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let response = self.ensure_success(response, endpoint).await?;
        let text = response.text().await?;
        if text.is_empty() {
            Ok(serde_json::from_value(serde_json::Value::Null)?)
        } else {
            Ok(serde_json::from_str(&text)?)
        }
    }

    /// Fetch a note's metadata by identifier
    pub async fn get_note(&self, note_id: &str) -> Result<Note> {
        self.request_json(Method::GET, &format!("/notes/{note_id}"), None)
            .await
    }

    /// Fetch a note's raw content by identifier
    pub async fn get_note_content(&self, note_id: &str) -> Result<String> {
        let endpoint = format!("/notes/{note_id}/content");
        let response = self
            .http
            .get(self.endpoint_url(&endpoint))
            .header(header::AUTHORIZATION, &self.config.token)
            .send()
            .await?;
        let response = self.ensure_success(response, &endpoint).await?;
        Ok(response.text().await?)
    }

    /// Fetch a note's metadata and content concurrently and merge them
    pub async fn get_note_with_content(&self, note_id: &str) -> Result<NoteWithContent> {
        let (note, content) = tokio::try_join!(
            self.get_note(note_id),
            self.get_note_content(note_id)
        )?;
        Ok(NoteWithContent { note, content })
    }

    /// Resolve a note's children to full summaries
    ///
    /// Child fetches run concurrently but the result preserves the store's
    /// ordering of the child identifier list.
    pub async fn get_note_children(&self, note_id: &str) -> Result<Vec<Note>> {
        let note = self.get_note(note_id).await?;
        futures::future::try_join_all(
            note.child_note_ids
                .iter()
                .map(|child_id| self.get_note(child_id)),
        )
        .await
    }

    /// Search notes with the store's query syntax, bounded by `limit`
    pub async fn search_notes(&self, query: &str, limit: u32) -> Result<Vec<SearchResult>> {
        let endpoint = "/notes";
        let response = self
            .http
            .get(self.endpoint_url(endpoint))
            .header(header::AUTHORIZATION, &self.config.token)
            .query(&[("search", query), ("limit", &limit.to_string())])
            .send()
            .await?;
        let response = self.ensure_success(response, endpoint).await?;
        let envelope: SearchResponse = response.json().await?;
        Ok(envelope.results)
    }

    /// Create a note under a parent, returning it with its placement record
    pub async fn create_note(&self, params: &CreateNoteParams) -> Result<CreateNoteResponse> {
        self.request_json(
            Method::POST,
            "/create-note",
            Some(serde_json::to_value(params)?),
        )
        .await
    }

    /// Update a note's title
    pub async fn update_note_title(&self, note_id: &str, title: &str) -> Result<Note> {
        self.request_json(
            Method::PATCH,
            &format!("/notes/{note_id}"),
            Some(json!({ "title": title })),
        )
        .await
    }

    /// Replace a note's content with a raw text body
    pub async fn update_note_content(&self, note_id: &str, content: &str) -> Result<()> {
        let endpoint = format!("/notes/{note_id}/content");
        let response = self
            .http
            .put(self.endpoint_url(&endpoint))
            .header(header::AUTHORIZATION, &self.config.token)
            .header(header::CONTENT_TYPE, "text/plain")
            .body(content.to_string())
            .send()
            .await?;
        self.ensure_success(response, &endpoint).await?;
        Ok(())
    }

    /// Create an attribute on a note
    pub async fn create_attribute(
        &self,
        note_id: &str,
        spec: &AttributeSpec,
    ) -> Result<Attribute> {
        self.request_json(
            Method::POST,
            "/attributes",
            Some(json!({
                "noteId": note_id,
                "type": spec.kind,
                "name": spec.name,
                "value": spec.value,
                "isInheritable": spec.is_inheritable,
            })),
        )
        .await
    }

    /// Update an existing attribute's value
    pub async fn update_attribute_value(
        &self,
        attribute_id: &str,
        value: &str,
    ) -> Result<Attribute> {
        self.request_json(
            Method::PATCH,
            &format!("/attributes/{attribute_id}"),
            Some(json!({ "value": value })),
        )
        .await
    }

    /// Delete a note
    pub async fn delete_note(&self, note_id: &str) -> Result<()> {
        self.request_json(Method::DELETE, &format!("/notes/{note_id}"), None)
            .await
    }
}

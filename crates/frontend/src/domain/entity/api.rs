//! HTTP client for the entity endpoints.
//!
//! Provided to the pages through context, so a page never builds URLs itself:
//!
//! ```rust,ignore
//! let api = use_context::<EntityApi>().expect("EntityApi not found");
//! let records = api.list(EntityKind::Course, &ListQuery::default()).await?;
//! ```

use crate::shared::api_utils::{api_base, with_query};
use contracts::domain::common::{EntityKind, EntityRecord, EntitySummary, RecordDraft, RecordPatch};
use contracts::shared::crud::{EntityError, ErrorBody, ListQuery, Submission};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Why a request to the backend failed
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The backend answered with a domain error
    Entity(EntityError),
    /// The request did not reach the backend
    Network(String),
    /// Non-success status without a readable error body
    Server { status: u16, message: String },
    /// Success status, but the body did not parse
    Decode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Entity(err) => err.is_not_found(),
            Self::Server { status, .. } => *status == 404,
            _ => false,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entity(err) => write!(f, "{}", err),
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Server { status, message } => write!(f, "Server error {}: {}", status, message),
            Self::Decode(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityApi {
    base_url: String,
}

impl EntityApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client for the backend next to the current page
    pub fn from_location() -> Self {
        Self::new(api_base())
    }

    pub fn summaries_url(&self) -> String {
        format!("{}/api/schema", self.base_url)
    }

    pub fn collection_url(&self, kind: EntityKind) -> String {
        format!("{}/api/entity/{}", self.base_url, kind.slug())
    }

    pub fn record_url(&self, kind: EntityKind, id: &str) -> String {
        format!("{}/{}", self.collection_url(kind), urlencoding::encode(id))
    }

    /// Collection URL with search and filters as a flat query string
    pub fn list_url(&self, kind: EntityKind, query: &ListQuery) -> String {
        let search = query.search.trim();
        let pairs = std::iter::once(("search", search)).chain(
            query
                .filters
                .iter()
                .map(|(field, value)| (field.as_str(), value.as_str())),
        );
        with_query(self.collection_url(kind), pairs)
    }

    /// Every entity kind with its record count
    pub async fn summaries(&self) -> Result<Vec<EntitySummary>, ApiError> {
        let response = Request::get(&self.summaries_url())
            .send()
            .await
            .map_err(network)?;
        read(response).await
    }

    pub async fn list(
        &self,
        kind: EntityKind,
        query: &ListQuery,
    ) -> Result<Vec<EntityRecord>, ApiError> {
        let url = self.list_url(kind, query);
        log::debug!("Loading {}", url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(network)?;
        read(response).await
    }

    pub async fn get(&self, kind: EntityKind, id: &str) -> Result<EntityRecord, ApiError> {
        let response = Request::get(&self.record_url(kind, id))
            .send()
            .await
            .map_err(network)?;
        read(response).await
    }

    pub async fn create(
        &self,
        kind: EntityKind,
        draft: &RecordDraft,
    ) -> Result<EntityRecord, ApiError> {
        let response = Request::post(&self.collection_url(kind))
            .json(draft)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read(response).await
    }

    pub async fn update(
        &self,
        kind: EntityKind,
        id: &str,
        patch: &RecordPatch,
    ) -> Result<EntityRecord, ApiError> {
        let response = Request::put(&self.record_url(kind, id))
            .json(patch)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read(response).await
    }

    /// Send what a form produced
    pub async fn submit(
        &self,
        kind: EntityKind,
        submission: &Submission,
    ) -> Result<EntityRecord, ApiError> {
        match submission {
            Submission::Create(draft) => self.create(kind, draft).await,
            Submission::Update { id, patch } => self.update(kind, id, patch).await,
        }
    }
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()));
    }

    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => Err(error_from_body(status, body)),
        Err(_) => Err(ApiError::Server {
            status,
            message: response.status_text(),
        }),
    }
}

fn error_from_body(status: u16, body: ErrorBody) -> ApiError {
    let message = body.error.clone();
    match body.into_entity_error() {
        Some(err) => ApiError::Entity(err),
        None => ApiError::Server { status, message },
    }
}

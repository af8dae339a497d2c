use crate::models::Profile;
use crate::services::store::ProfileStore;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with Appwrite
#[derive(Debug, Error)]
pub enum AppwriteError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key or token")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Appwrite API client
///
/// Reads community profiles from the Appwrite database:
/// - Fetching a single profile by document id
/// - Listing every other profile, page by page
pub struct AppwriteClient {
    base_url: String,
    api_key: String,
    project_id: String,
    database_id: String,
    client: Client,
    collections: AppwriteCollections,
    page_size: usize,
    max_profiles: usize,
}

/// Collection IDs in Appwrite
#[derive(Debug, Clone)]
pub struct AppwriteCollections {
    pub profiles: String,
}

impl AppwriteClient {
    /// Create a new Appwrite client
    pub fn new(
        base_url: String,
        api_key: String,
        project_id: String,
        database_id: String,
        collections: AppwriteCollections,
        timeout: Duration,
    ) -> Result<Self, AppwriteError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            project_id,
            database_id,
            client,
            collections,
            page_size: 100,
            max_profiles: 1000,
        })
    }

    /// Set how many documents are requested per page and the overall cap
    pub fn with_paging(mut self, page_size: usize, max_profiles: usize) -> Self {
        self.page_size = page_size.max(1);
        self.max_profiles = max_profiles;
        self
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.base_url.trim_end_matches('/'),
            self.database_id,
            self.collections.profiles
        )
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
    }

    /// Get a single profile by user ID
    pub async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, AppwriteError> {
        let url = format!("{}/{}", self.documents_url(), urlencoding::encode(user_id));

        tracing::debug!("Fetching profile for user: {}", user_id);

        let response = self.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => return Ok(None),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(AppwriteError::Unauthorized)
            }
            status if !status.is_success() => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unable to read body".to_string());
                tracing::debug!("Profile fetch for {} failed: {} - {}", user_id, status, body);
                return Err(AppwriteError::ApiError(format!(
                    "Failed to fetch profile: {}",
                    status
                )));
            }
            _ => {}
        }

        let doc: Value = response.json().await?;
        let data = doc.get("data").unwrap_or(&doc);

        serde_json::from_value(data.clone())
            .map(Some)
            .map_err(|e| AppwriteError::InvalidResponse(format!("Failed to parse profile: {}", e)))
    }

    /// List all profiles except `exclude_id`, following cursors until exhausted
    pub async fn list_profiles_excluding(
        &self,
        exclude_id: &str,
    ) -> Result<Vec<Profile>, AppwriteError> {
        let url = self.documents_url();
        let mut profiles = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut queries = vec![
                format!("notEqual(\"$id\", {})", quote_query_value(exclude_id)), // Exclude self
                format!("limit({})", self.page_size),
            ];
            if let Some(last_id) = &cursor {
                queries.push(format!("cursorAfter({})", quote_query_value(last_id)));
            }

            let params: Vec<(&str, String)> =
                queries.into_iter().map(|q| ("queries[]", q)).collect();

            let response = self.get(&url).query(&params).send().await?;

            let status = response.status();
            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                return Err(AppwriteError::Unauthorized);
            }
            if !status.is_success() {
                return Err(AppwriteError::ApiError(format!(
                    "Failed to list profiles: {}",
                    status
                )));
            }

            let json: Value = response.json().await?;

            let documents = json
                .get("documents")
                .and_then(|d| d.as_array())
                .ok_or_else(|| AppwriteError::InvalidResponse("Missing documents array".into()))?;

            let page_len = documents.len();

            for doc in documents {
                let data = doc.get("data").unwrap_or(doc);
                match serde_json::from_value::<Profile>(data.clone()) {
                    Ok(profile) if profile.id != exclude_id => profiles.push(profile),
                    Ok(_) => {}
                    Err(e) => tracing::warn!("Skipping unreadable profile document: {}", e),
                }
            }

            cursor = documents
                .last()
                .and_then(|doc| doc.get("$id"))
                .and_then(|id| id.as_str())
                .map(str::to_string);

            if page_len < self.page_size || profiles.len() >= self.max_profiles || cursor.is_none() {
                break;
            }
        }

        profiles.truncate(self.max_profiles);

        tracing::debug!("Listed {} profiles excluding {}", profiles.len(), exclude_id);

        Ok(profiles)
    }
}

/// Quote a string argument for an Appwrite query, escaping `\` and `"`
fn quote_query_value(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

#[async_trait]
impl ProfileStore for AppwriteClient {
    type Error = AppwriteError;

    async fn fetch_profile(&self, id: &str) -> Result<Option<Profile>, Self::Error> {
        self.get_profile(id).await
    }

    async fn fetch_other_profiles(&self, exclude_id: &str) -> Result<Vec<Profile>, Self::Error> {
        self.list_profiles_excluding(exclude_id).await
    }
}

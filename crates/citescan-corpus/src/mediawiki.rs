//! MediaWiki Action API client.
//!
//! Talks to a MediaWiki endpoint to resolve the tracked-category
//! population, list category members, search for tagged documents, and
//! fetch raw wikitext. All responses are deserialized into typed DTOs;
//! API-level error payloads surface as [`CorpusError::Api`].

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use citescan_core::config::CorpusConfig;
use citescan_core::types::DocumentRef;

use crate::error::CorpusError;
use crate::supplier::DocumentSupplier;

/// Maximum category members per request (API cap for anonymous clients).
const MAX_BATCH: usize = 500;
/// Pacing between pagination requests while counting a category.
const COUNT_PACING: Duration = Duration::from_millis(100);
/// Pacing between search requests when collecting a sample.
const SEARCH_PACING: Duration = Duration::from_millis(500);
/// Search terms used by the simplified sample-collection strategy.
const SEARCH_TERMS: &[&str] = &["citation needed", "fact", "dubious"];

/// Client for a MediaWiki Action API endpoint.
pub struct MediaWikiClient {
    http: reqwest::Client,
    endpoint: String,
    category: String,
}

impl MediaWikiClient {
    pub fn new(config: &CorpusConfig) -> Result<Self, CorpusError> {
        let http = reqwest::Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(Duration::from_secs(config.effective_timeout_secs()))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.effective_endpoint().to_string(),
            category: config.effective_category().to_string(),
        })
    }

    /// Size of the tracked category, preferring the exact `categoryinfo`
    /// count and falling back to paginating the member list.
    pub async fn category_size(&self) -> Result<u64, CorpusError> {
        let title = format!("Category:{}", self.category);
        let response: ApiResponse<CategoryInfoQuery> = self
            .get(&[
                ("action", "query"),
                ("titles", title.as_str()),
                ("prop", "categoryinfo"),
                ("format", "json"),
            ])
            .await?;

        let query = response.query.ok_or(CorpusError::InvalidResponse {
            context: "categoryinfo query missing",
        })?;

        if let Some(info) = query.pages.into_values().find_map(|p| p.categoryinfo) {
            return Ok(info.pages);
        }

        self.count_category_members().await
    }

    async fn count_category_members(&self) -> Result<u64, CorpusError> {
        let title = format!("Category:{}", self.category);
        let limit = MAX_BATCH.to_string();
        let mut total: u64 = 0;
        let mut continuation: Option<String> = None;

        debug!(category = %self.category, "counting category members");

        loop {
            let mut params = vec![
                ("action", "query"),
                ("list", "categorymembers"),
                ("cmtitle", title.as_str()),
                ("cmnamespace", "0"),
                ("cmlimit", limit.as_str()),
                ("format", "json"),
            ];
            if let Some(token) = continuation.as_deref() {
                params.push(("cmcontinue", token));
            }

            let response: ApiResponse<CategoryMembersQuery> = self.get(&params).await?;
            let Some(query) = response.query else { break };
            total += query.categorymembers.len() as u64;

            match response.continuation.and_then(|c| c.cmcontinue) {
                Some(token) => continuation = Some(token),
                None => break,
            }

            if total % 1000 == 0 {
                debug!(total, "counted category members so far");
            }
            tokio::time::sleep(COUNT_PACING).await;
        }

        Ok(total)
    }

    /// One batch of category members starting at `offset`, main namespace
    /// only.
    pub async fn category_members(
        &self,
        offset: u64,
        limit: usize,
    ) -> Result<Vec<DocumentRef>, CorpusError> {
        let title = format!("Category:{}", self.category);
        let limit = limit.to_string();
        let offset = offset.to_string();

        let response: ApiResponse<CategoryMembersQuery> = self
            .get(&[
                ("action", "query"),
                ("list", "categorymembers"),
                ("cmtitle", title.as_str()),
                ("cmnamespace", "0"),
                ("cmlimit", limit.as_str()),
                ("cmstart", offset.as_str()),
                ("format", "json"),
            ])
            .await?;

        Ok(response
            .query
            .map(|q| {
                q.categorymembers
                    .into_iter()
                    .map(|p| DocumentRef::new(p.pageid, p.title))
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Documents whose source contains the given template, via an
    /// `insource` search in the main namespace.
    pub async fn search_documents(
        &self,
        term: &str,
        limit: usize,
    ) -> Result<Vec<DocumentRef>, CorpusError> {
        let srsearch = format!("insource:\"{{{{{term}}}}}\"");
        let limit = limit.to_string();

        let response: ApiResponse<SearchQuery> = self
            .get(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", srsearch.as_str()),
                ("srnamespace", "0"),
                ("srlimit", limit.as_str()),
                ("format", "json"),
            ])
            .await?;

        Ok(response
            .query
            .map(|q| {
                q.search
                    .into_iter()
                    .map(|p| DocumentRef::new(p.pageid, p.title))
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Raw wikitext of a page's latest revision.
    pub async fn page_text(&self, title: &str) -> Result<String, CorpusError> {
        let response: ApiResponse<RevisionsQuery> = self
            .get(&[
                ("action", "query"),
                ("titles", title),
                ("prop", "revisions"),
                ("rvprop", "content"),
                ("rvslots", "main"),
                ("format", "json"),
            ])
            .await?;

        let query = response.query.ok_or(CorpusError::InvalidResponse {
            context: "revisions query missing",
        })?;
        let page = query
            .pages
            .into_values()
            .next()
            .ok_or(CorpusError::InvalidResponse {
                context: "empty pages map",
            })?;

        if page.missing.is_some() {
            return Err(CorpusError::NotFound {
                title: title.to_string(),
            });
        }

        page.revisions
            .into_iter()
            .next()
            .and_then(|r| r.slots.main.content)
            .ok_or_else(|| CorpusError::MissingContent {
                title: title.to_string(),
            })
    }

    async fn get<Q>(&self, params: &[(&str, &str)]) -> Result<ApiResponse<Q>, CorpusError>
    where
        Q: serde::de::DeserializeOwned,
    {
        let response = self
            .http
            .get(&self.endpoint)
            .query(params)
            .send()
            .await?
            .error_for_status()?;

        let mut body: ApiResponse<Q> = response.json().await?;
        if let Some(error) = body.error.take() {
            return Err(CorpusError::Api {
                message: error.info,
            });
        }
        Ok(body)
    }
}

impl DocumentSupplier for MediaWikiClient {
    async fn population_size(&self) -> Result<u64, CorpusError> {
        self.category_size().await
    }

    /// Collect sample documents by searching for well-known template
    /// literals, deduplicating titles across terms.
    async fn list_sample_documents(
        &self,
        desired: usize,
    ) -> Result<Vec<DocumentRef>, CorpusError> {
        let mut documents: Vec<DocumentRef> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for &term in SEARCH_TERMS {
            if documents.len() >= desired {
                break;
            }
            debug!(term, "searching for tagged documents");

            let limit = (desired - documents.len()).min(50);
            let batch = self.search_documents(term, limit).await?;
            for doc in batch {
                if documents.len() >= desired {
                    break;
                }
                if seen.insert(doc.title.clone()) {
                    documents.push(doc);
                }
            }

            tokio::time::sleep(SEARCH_PACING).await;
        }

        Ok(documents)
    }

    async fn document_text(&self, doc: &DocumentRef) -> Result<String, CorpusError> {
        self.page_text(&doc.title).await
    }
}

// ---------------------------------------------------------------------------
// Response DTOs (legacy JSON format: content under the "*" key)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "Q: serde::de::DeserializeOwned"))]
struct ApiResponse<Q> {
    #[serde(default)]
    error: Option<ApiError>,
    #[serde(default, rename = "continue")]
    continuation: Option<Continuation>,
    #[serde(default)]
    query: Option<Q>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    info: String,
}

#[derive(Debug, Deserialize)]
struct Continuation {
    #[serde(default)]
    cmcontinue: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CategoryMembersQuery {
    #[serde(default)]
    categorymembers: Vec<PageRef>,
}

#[derive(Debug, Deserialize)]
struct PageRef {
    pageid: u64,
    title: String,
}

#[derive(Debug, Deserialize)]
struct CategoryInfoQuery {
    pages: HashMap<String, CategoryInfoPage>,
}

#[derive(Debug, Deserialize)]
struct CategoryInfoPage {
    #[serde(default)]
    categoryinfo: Option<CategoryInfo>,
}

#[derive(Debug, Deserialize)]
struct CategoryInfo {
    pages: u64,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<PageRef>,
}

#[derive(Debug, Deserialize)]
struct RevisionsQuery {
    pages: HashMap<String, RevisionPage>,
}

#[derive(Debug, Deserialize)]
struct RevisionPage {
    #[serde(default)]
    missing: Option<String>,
    #[serde(default)]
    revisions: Vec<Revision>,
}

#[derive(Debug, Deserialize)]
struct Revision {
    slots: RevisionSlots,
}

#[derive(Debug, Deserialize)]
struct RevisionSlots {
    main: MainSlot,
}

#[derive(Debug, Deserialize)]
struct MainSlot {
    #[serde(default, rename = "*")]
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categoryinfo_response_deserializes() {
        let raw = r#"{
            "query": {
                "pages": {
                    "42": {
                        "categoryinfo": { "pages": 553000, "size": 553200, "subcats": 0 }
                    }
                }
            }
        }"#;
        let response: ApiResponse<CategoryInfoQuery> = serde_json::from_str(raw).unwrap();
        let info = response
            .query
            .unwrap()
            .pages
            .into_values()
            .find_map(|p| p.categoryinfo)
            .unwrap();
        assert_eq!(info.pages, 553000);
    }

    #[test]
    fn test_revisions_response_deserializes() {
        let raw = r#"{
            "query": {
                "pages": {
                    "7": {
                        "title": "Aluminium",
                        "revisions": [
                            { "slots": { "main": { "*": "Aluminium is a metal.{{fact}}" } } }
                        ]
                    }
                }
            }
        }"#;
        let response: ApiResponse<RevisionsQuery> = serde_json::from_str(raw).unwrap();
        let page = response.query.unwrap().pages.into_values().next().unwrap();
        assert!(page.missing.is_none());
        assert_eq!(
            page.revisions[0].slots.main.content.as_deref(),
            Some("Aluminium is a metal.{{fact}}")
        );
    }

    #[test]
    fn test_missing_page_marker() {
        let raw = r#"{
            "query": { "pages": { "-1": { "title": "Ghost", "missing": "" } } }
        }"#;
        let response: ApiResponse<RevisionsQuery> = serde_json::from_str(raw).unwrap();
        let page = response.query.unwrap().pages.into_values().next().unwrap();
        assert!(page.missing.is_some());
        assert!(page.revisions.is_empty());
    }

    #[test]
    fn test_api_error_payload() {
        let raw = r#"{
            "error": { "code": "maxlag", "info": "Waiting for a database server" }
        }"#;
        let response: ApiResponse<SearchQuery> = serde_json::from_str(raw).unwrap();
        assert_eq!(
            response.error.unwrap().info,
            "Waiting for a database server"
        );
        assert!(response.query.is_none());
    }

    #[test]
    fn test_search_response_deserializes() {
        let raw = r#"{
            "query": {
                "search": [
                    { "pageid": 100, "title": "Weather", "size": 1000 },
                    { "pageid": 200, "title": "Cheese" }
                ]
            }
        }"#;
        let response: ApiResponse<SearchQuery> = serde_json::from_str(raw).unwrap();
        let search = response.query.unwrap().search;
        assert_eq!(search.len(), 2);
        assert_eq!(search[0].pageid, 100);
        assert_eq!(search[1].title, "Cheese");
    }
}

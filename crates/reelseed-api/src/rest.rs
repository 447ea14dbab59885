use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;
use url::{ParseError, Url};

use crate::error::RestError;
use crate::traits::{RecordStore, UpsertResponse};

const USER_AGENT: &str = concat!("reelseed/", env!("CARGO_PKG_VERSION"));

/// PostgREST client for a single project endpoint.
///
/// The same credential is sent as the `apikey` header and as a bearer token,
/// which is what Supabase expects for anon/service keys.
pub struct RestClient {
    base_url: Url,
    api_key: String,
    http: Client,
}

impl RestClient {
    /// Build a client with its own HTTP connection pool and a request timeout.
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RestError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Self::with_http_client(http, base_url, api_key)
    }

    /// Build a client around an existing `reqwest::Client`.
    pub fn with_http_client(
        http: Client,
        base_url: &str,
        api_key: impl Into<String>,
    ) -> Result<Self, RestError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            api_key: api_key.into(),
            http,
        })
    }

    /// `<base>/rest/v1/<table>?on_conflict=<column>`
    pub fn table_url(&self, table: &str, on_conflict: &str) -> Result<Url, RestError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RestError::Url(ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(["rest", "v1", table]);
        url.query_pairs_mut().append_pair("on_conflict", on_conflict);
        Ok(url)
    }

    async fn check_response(resp: reqwest::Response) -> Result<UpsertResponse, RestError> {
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        if status >= 400 {
            Err(RestError::Api {
                status,
                message: body,
            })
        } else {
            Ok(UpsertResponse { status, body })
        }
    }
}

impl RecordStore for RestClient {
    type Error = RestError;

    async fn upsert<T: Serialize + Sync>(
        &self,
        table: &str,
        on_conflict: &str,
        rows: &[T],
    ) -> Result<UpsertResponse, RestError> {
        let url = self.table_url(table, on_conflict)?;
        let body = serde_json::to_vec(rows)?;

        tracing::debug!(%url, rows = rows.len(), bytes = body.len(), "sending upsert");

        let resp = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .body(body)
            .send()
            .await?;

        let response = Self::check_response(resp).await?;
        tracing::info!(
            table,
            status = response.status,
            response = %response.body,
            "upsert accepted"
        );
        Ok(response)
    }
}

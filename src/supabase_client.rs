use crate::errors::AppError;
use crate::models::{ColumnRecord, RawResponse, TableColumnRecord, TableProbe, TableRecord};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Builds the fixed header set every Supabase REST call carries.
///
/// The key is sent twice: once as `apikey` and once as a bearer token. A key
/// that cannot be sent as a header value fails the request, not the process.
pub fn auth_headers(api_key: &str) -> Result<HeaderMap, AppError> {
    let invalid = |_| AppError::Http("API key contains characters not allowed in headers".into());

    let mut headers = HeaderMap::new();
    headers.insert("apikey", HeaderValue::from_str(api_key).map_err(invalid)?);
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(invalid)?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(headers)
}

/// Client for the PostgREST endpoints of a Supabase project (`{url}/rest/v1`).
#[derive(Clone)]
pub struct SupabaseRestClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SupabaseRestClient {
    /// Creates a new `SupabaseRestClient`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The project URL, without the `/rest/v1` suffix.
    /// * `api_key` - The key sent in `apikey` and `Authorization` on every request.
    pub fn new(base_url: impl Into<String>, api_key: &str) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Http(format!("Failed to create Supabase client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lists the table names in `schema` via `information_schema.tables`.
    pub async fn list_tables(&self, schema: &str) -> Result<Vec<TableRecord>, AppError> {
        let url = format!(
            "{}/rest/v1/information_schema.tables?table_schema=eq.{}&select=table_name",
            self.base_url, schema
        );
        self.get_records(&url).await
    }

    /// Lists the columns of `schema.table` via `information_schema.columns`.
    ///
    /// An empty result means the table does not exist (or is not visible to the key).
    pub async fn list_columns(
        &self,
        table: &str,
        schema: &str,
    ) -> Result<Vec<ColumnRecord>, AppError> {
        let url = format!(
            "{}/rest/v1/information_schema.columns?table_name=eq.{}&table_schema=eq.{}&select=column_name,data_type,is_nullable",
            self.base_url, table, schema
        );
        self.get_records(&url).await
    }

    /// Lists every column of every table in `schema`, ordered by table then ordinal position.
    pub async fn list_schema_columns(
        &self,
        schema: &str,
    ) -> Result<Vec<TableColumnRecord>, AppError> {
        let url = format!(
            "{}/rest/v1/information_schema.columns?table_schema=eq.{}&select=table_name,column_name,data_type,is_nullable&order=table_name.asc,ordinal_position.asc",
            self.base_url, schema
        );
        self.get_records(&url).await
    }

    /// Selects at most one row from `table` to find out whether it exists and holds data.
    ///
    /// Non-success statuses are folded into the returned [`TableProbe`]; only
    /// transport failures are errors.
    pub async fn probe_table(&self, table: &str) -> Result<TableProbe, AppError> {
        let url = format!("{}/rest/v1/{}?select=*&limit=1", self.base_url, table);
        tracing::debug!("Probing table: {}", url);

        let raw = self.get_raw(&url).await?;
        Ok(TableProbe::classify(raw.status, &raw.body))
    }

    /// Reads `realtime.subscription`, which is usually only exposed to the service key.
    ///
    /// Any status is returned as-is; only transport failures are errors.
    pub async fn probe_realtime(&self) -> Result<RawResponse, AppError> {
        let url = format!("{}/rest/v1/realtime.subscription?select=*", self.base_url);
        tracing::debug!("GET {}", url);

        self.get_raw(&url).await
    }

    async fn get_raw(&self, url: &str) -> Result<RawResponse, AppError> {
        let response = self
            .client
            .get(url)
            .headers(auth_headers(&self.api_key)?)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }

    async fn get_records<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, AppError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .headers(auth_headers(&self.api_key)?)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!("Supabase returned {} for {}", status, url);
            return Err(AppError::UnexpectedStatus { status, body });
        }

        let body = response.text().await?;
        let records = serde_json::from_str(&body)?;
        Ok(records)
    }
}

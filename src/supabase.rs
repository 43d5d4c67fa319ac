use async_trait::async_trait;
use serde::de::IgnoredAny;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::error::StoreError;
use crate::store::{DocumentStore, QuerySnapshot, EMAIL_FIELD};
use crate::types::NewSignup;

/// PostgREST-backed waitlist store. Timestamps come from the
/// `submitted_at timestamptz default now()` column.
pub struct SupabaseStore {
    url: String,
    key: String,
}

impl SupabaseStore {
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Self {
        Self { url: url.into(), key: key.into() }
    }

    fn headers(&self) -> Result<Headers, JsValue> {
        let headers = Headers::new()?;
        headers.set("apikey", &self.key)?;
        headers.set("Authorization", &format!("Bearer {}", self.key))?;
        headers.set("Content-Type", "application/json")?;
        Ok(headers)
    }

    async fn send(
        &self,
        method: &str,
        url: &str,
        body: Option<&str>,
        headers: &Headers,
    ) -> Result<Response, StoreError> {
        let window = web_sys::window().ok_or(StoreError::NoWindow)?;

        let opts = create_request_init(method, body, headers);
        let request = Request::new_with_str_and_init(url, &opts)?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        if !resp.ok() {
            return Err(StoreError::Http(resp.status()));
        }
        Ok(resp)
    }
}

fn create_request_init(method: &str, body: Option<&str>, headers: &Headers) -> RequestInit {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(b) = body {
        opts.set_body(&JsValue::from_str(b));
    }
    opts.set_headers(&JsValue::from(headers));
    opts
}

fn table_url(base: &str, collection: &str) -> String {
    format!("{}/rest/v1/{}", base, collection)
}

fn query_url(base: &str, collection: &str, field: &str, encoded_value: &str) -> String {
    format!("{}?select={}&{}=eq.{}", table_url(base, collection), EMAIL_FIELD, field, encoded_value)
}

/// Total from a `Content-Range` header such as `0-24/3573` or `*/0`.
pub fn content_range_total(header: &str) -> Option<usize> {
    let (_, total) = header.trim().rsplit_once('/')?;
    total.parse().ok()
}

#[async_trait(?Send)]
impl DocumentStore for SupabaseStore {
    async fn query(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<QuerySnapshot, StoreError> {
        let encoded: String = js_sys::encode_uri_component(value).into();
        let url = query_url(&self.url, collection, field, &encoded);
        let headers = self.headers()?;

        let resp = self.send("GET", &url, None, &headers).await?;
        let json = JsFuture::from(resp.json()?).await?;
        let rows: Vec<IgnoredAny> = serde_wasm_bindgen::from_value(json)?;

        Ok(QuerySnapshot::new(rows.len()))
    }

    async fn insert(&self, collection: &str, record: &NewSignup) -> Result<(), StoreError> {
        let body = serde_json::to_string(record)?;
        let headers = self.headers()?;
        headers.set("Prefer", "return=minimal")?;

        self.send("POST", &table_url(&self.url, collection), Some(&body), &headers).await?;
        Ok(())
    }

    async fn count(&self, collection: &str) -> Result<usize, StoreError> {
        let url = format!("{}?select={}", table_url(&self.url, collection), EMAIL_FIELD);
        let headers = self.headers()?;
        headers.set("Prefer", "count=exact")?;

        let resp = self.send("HEAD", &url, None, &headers).await?;
        let range = resp
            .headers()
            .get("content-range")?
            .ok_or_else(|| StoreError::Decode("missing Content-Range".into()))?;

        content_range_total(&range)
            .ok_or_else(|| StoreError::Decode(format!("bad Content-Range: {}", range)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_content_range_totals() {
        assert_eq!(content_range_total("0-24/3573"), Some(3573));
        assert_eq!(content_range_total("*/0"), Some(0));
        assert_eq!(content_range_total("*/*"), None);
        assert_eq!(content_range_total("garbage"), None);
    }

    #[test]
    fn builds_postgrest_urls() {
        assert_eq!(
            query_url("https://p.supabase.co", "waitlist", "email", "jane%40berkeley.edu"),
            "https://p.supabase.co/rest/v1/waitlist?select=email&email=eq.jane%40berkeley.edu"
        );
    }
}

use std::collections::HashMap;

use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

use crate::branding::info::TollFreeNumber;
use crate::config;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request to document store failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("document store answered with status {0}")]
    Status(u16),
    #[error("malformed phone document: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct FirestoreDocument {
    #[serde(default)]
    fields: HashMap<String, FirestoreValue>,
}

#[derive(Deserialize)]
struct FirestoreValue {
    #[serde(rename = "stringValue")]
    string_value: Option<String>,
}

impl FirestoreDocument {
    fn string_field(&self, name: &str) -> String {
        self.fields
            .get(name)
            .and_then(|v| v.string_value.clone())
            .unwrap_or_default()
    }
}

pub fn parse_phone_document(body: &str) -> Result<TollFreeNumber, StoreError> {
    let doc: FirestoreDocument = serde_json::from_str(body)?;
    Ok(TollFreeNumber {
        international_format: doc.string_field("numberIntl"),
        local_format: doc.string_field("numberLocal"),
    })
}

fn is_success(status: u16) -> bool {
    (200..=299).contains(&status)
}

/// Maps a document-store answer to a lookup result. 404 means no record is configured.
pub fn classify(status: u16, body: Option<&str>) -> Result<Option<TollFreeNumber>, StoreError> {
    match status {
        404 => Ok(None),
        s if is_success(s) => parse_phone_document(body.unwrap_or_default()).map(Some),
        s => Err(StoreError::Status(s)),
    }
}

/// Reads the site's phone-number document. A missing document is `Ok(None)`.
pub async fn fetch_toll_free_number() -> Result<Option<TollFreeNumber>, StoreError> {
    let response = Request::get(&config::phone_document_url()).send().await?;
    let status = response.status();
    let body = if is_success(status) {
        Some(response.text().await?)
    } else {
        None
    };
    classify(status, body.as_deref())
}

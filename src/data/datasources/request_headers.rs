use crate::constants::{
    AUTHORIZATION_SCHEME, CONTENT_TYPE_JSON, HEADER_APP_ID, HEADER_AUTHORIZATION,
    HEADER_CONTENT_MD5, HEADER_CONTENT_TYPE, HEADER_NONCE, HEADER_TIMESTAMP,
};

use super::request_signer::RequestSignature;

/// Headers attached to every Mi Global IAP API request, in the order they are
/// sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHeaders(Vec<(&'static str, String)>);

impl RequestHeaders {
    pub(crate) fn assemble(app_id: &str, signature: &RequestSignature) -> Self {
        Self::assemble_at(app_id, signature, chrono::Utc::now().timestamp())
    }

    /// The timestamp is informational only; it is not covered by the
    /// signature.
    pub(crate) fn assemble_at(app_id: &str, signature: &RequestSignature, timestamp: i64) -> Self {
        let mut headers = vec![
            (HEADER_APP_ID, app_id.to_owned()),
            (HEADER_TIMESTAMP, timestamp.to_string()),
            (HEADER_NONCE, signature.nonce.clone()),
            (HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON.to_owned()),
        ];
        if let Some(digest) = signature.content_digest.as_ref().filter(|d| !d.is_empty()) {
            headers.push((HEADER_CONTENT_MD5, digest.clone()));
        }
        headers.push((
            HEADER_AUTHORIZATION,
            format!("{AUTHORIZATION_SCHEME} {}", signature.signature),
        ));
        Self(headers)
    }

    #[cfg(test)]
    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(n, v)| (*n, v.as_str()))
    }
}

use reqwest::Method;
use uuid::Uuid;

use crate::{constants::CONTENT_TYPE_JSON, errors::MiGlobalIapError};

use super::utils::{content_digest, keyed_signature};

/// Authentication material for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RequestSignature {
    pub(crate) nonce: String,
    pub(crate) signature: String,
    /// Only set when the request carries a body.
    pub(crate) content_digest: Option<String>,
}

pub(crate) struct RequestSigner<'a> {
    app_secret: &'a str,
}

impl<'a> RequestSigner<'a> {
    pub(crate) fn new(app_secret: &'a str) -> Self {
        Self { app_secret }
    }

    /// Signs a request with a fresh random nonce.
    pub(crate) fn sign(
        &self,
        method: &Method,
        path: &str,
        body: Option<&str>,
    ) -> Result<RequestSignature, MiGlobalIapError> {
        self.sign_with_nonce(method, path, body, Uuid::new_v4().to_string())
    }

    /// Nonces must never be reused in production; a fixed nonce is only for
    /// reproducing known signatures.
    pub(crate) fn sign_with_nonce(
        &self,
        method: &Method,
        path: &str,
        body: Option<&str>,
        nonce: String,
    ) -> Result<RequestSignature, MiGlobalIapError> {
        let content_digest = match body {
            Some(body) if !body.is_empty() => Some(content_digest(body.as_bytes())?),
            _ => None,
        };
        let canonical = canonical_request(method, content_digest.as_deref(), &nonce, path);
        let signature = keyed_signature(self.app_secret.as_bytes(), canonical.as_bytes())?;
        Ok(RequestSignature {
            nonce,
            signature,
            content_digest,
        })
    }
}

/// String recomputed by the server to verify the signature. Line order and
/// blank lines must match exactly; without a body the digest line is empty.
pub(crate) fn canonical_request(
    method: &Method,
    content_digest: Option<&str>,
    nonce: &str,
    path: &str,
) -> String {
    format!(
        "{method}\n{}\n{CONTENT_TYPE_JSON}\n\nx-ias-sign-nonce:{nonce}\n{path}",
        content_digest.unwrap_or_default()
    )
}

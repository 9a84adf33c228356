use serde::Deserialize;

/// Body returned by the Mi Global IAP API with any non-200 status.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ResponseErrorModel {
    pub(crate) code: i64,
    pub(crate) message: String,
}

impl ResponseErrorModel {
    /// Falls back to code 0 with the raw body as message if the body is not
    /// the expected JSON object.
    pub(crate) fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_else(|_| Self {
            code: 0,
            message: String::from_utf8_lossy(body).into_owned(),
        })
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MiGlobalIapError {
    #[error("Invalid purchase token {0:?} (must be at least 3 characters).")]
    InvalidPurchaseToken(String),

    #[error("Missing configuration value {0}.")]
    MissingConfig(&'static str),

    #[error("Failed to sign Mi Global IAP API request.")]
    Signing(#[from] openssl::error::ErrorStack),

    #[error("Mi Global IAP API callout failed.")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The API answered with a non-200 status. `code` and `message` are taken
    /// from the response body.
    #[error("Mi Global IAP API returned with {status} status code (code:{code},message:{message}).")]
    Api {
        status: u16,
        code: i64,
        message: String,
    },

    #[error("Failed to parse Mi Global IAP API response.")]
    Decode(#[from] serde_json::Error),
}

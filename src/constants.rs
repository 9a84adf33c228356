pub(crate) const DEFAULT_BASE_URL: &str = "https://rest-iap.miglobalpay.com";

pub(crate) const ACKNOWLEDGE: &str = "acknowledge";
pub(crate) const CONSUME: &str = "consume";

pub(crate) const CONTENT_TYPE_JSON: &str = "application/json";
pub(crate) const AUTHORIZATION_SCHEME: &str = "ias";

// Header names are matched verbatim by the remote API.
pub(crate) const HEADER_APP_ID: &str = "appId";
pub(crate) const HEADER_TIMESTAMP: &str = "timestamp";
pub(crate) const HEADER_NONCE: &str = "x-ias-sign-nonce";
pub(crate) const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub(crate) const HEADER_CONTENT_MD5: &str = "Content-MD5";
pub(crate) const HEADER_AUTHORIZATION: &str = "Authorization";

pub(crate) const ENV_APP_ID: &str = "MI_GLOBAL_IAP_APP_ID";
pub(crate) const ENV_APP_KEY: &str = "MI_GLOBAL_IAP_APP_KEY";
pub(crate) const ENV_APP_SECRET: &str = "MI_GLOBAL_IAP_APP_SECRET";
pub(crate) const ENV_PACKAGE_NAME: &str = "MI_GLOBAL_IAP_PACKAGE_NAME";
pub(crate) const ENV_BASE_URL: &str = "MI_GLOBAL_IAP_BASE_URL";

use crate::{
    config::MiGlobalIapConfig,
    data::{
        datasources::{
            http_transport::ReqwestTransport,
            mi_global_iap_api_datasource::MiGlobalIapApiDatasourceImpl,
        },
        repositories::purchase_repository_impl::PurchaseRepositoryImpl,
    },
    domain::{
        entities::{purchase_result::PurchaseResult, purchase_token::PurchaseToken},
        repositories::purchase_repository::PurchaseRepository,
    },
    errors::MiGlobalIapError,
};

/// Client for the Mi Global in-app-purchase verification API.
///
/// Every call validates the purchase token before any network activity, then
/// sends a single signed request. Nothing is retried.
pub struct MiGlobalIapUtil<R: PurchaseRepository> {
    purchase_repository: R,
}

impl<R: PurchaseRepository> MiGlobalIapUtil<R> {
    /// Queries the current state of a one-time product purchase.
    pub async fn purchase_status(
        &self,
        product_id: &str,
        token: &str,
    ) -> Result<PurchaseResult, MiGlobalIapError> {
        let token = PurchaseToken::parse(token)?;
        self.purchase_repository
            .get_purchase(product_id, &token)
            .await
    }

    /// Acknowledges a purchase. `payload` is an optional raw JSON body, e.g.
    /// `{"developerPayload":"..."}`, passed through unmodified.
    pub async fn acknowledge(
        &self,
        product_id: &str,
        token: &str,
        payload: Option<&str>,
    ) -> Result<(), MiGlobalIapError> {
        let token = PurchaseToken::parse(token)?;
        self.purchase_repository
            .acknowledge_purchase(product_id, &token, payload)
            .await
    }

    /// Marks a purchase as consumed. `payload` is an optional raw JSON body,
    /// e.g. `{"developerPayload":"..."}`, passed through unmodified.
    pub async fn consume(
        &self,
        product_id: &str,
        token: &str,
        payload: Option<&str>,
    ) -> Result<(), MiGlobalIapError> {
        let token = PurchaseToken::parse(token)?;
        self.purchase_repository
            .consume_purchase(product_id, &token, payload)
            .await
    }
}

/// The production client, backed by the Mi Global IAP API over reqwest.
pub type MiGlobalIapClient =
    MiGlobalIapUtil<PurchaseRepositoryImpl<MiGlobalIapApiDatasourceImpl<ReqwestTransport>>>;

impl MiGlobalIapClient {
    pub fn new(config: MiGlobalIapConfig) -> Self {
        Self {
            purchase_repository: PurchaseRepositoryImpl::new(config),
        }
    }
}

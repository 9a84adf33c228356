use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::{
    config::MiGlobalIapConfig,
    data::models::mi_global_iap_api::{
        product_purchase_model::ProductPurchaseModel, response_error_model::ResponseErrorModel,
    },
    domain::entities::purchase_token::PurchaseToken,
    errors::MiGlobalIapError,
};

use super::{
    http_transport::{HttpRequest, HttpTransport, ReqwestTransport},
    request_headers::RequestHeaders,
    request_path::{build_request_path, PurchaseOperation},
    request_signer::RequestSigner,
};

#[async_trait]
pub trait MiGlobalIapApiDatasource: Send + Sync {
    /// purchases.products.get
    ///
    /// productId:
    ///   The in-app product SKU (for example, 'game-10').
    /// token:
    ///   The token provided to the user's device when the product was
    ///   purchased.
    async fn get_product_purchase(
        &self,
        product_id: &str,
        token: &PurchaseToken,
    ) -> Result<ProductPurchaseModel, MiGlobalIapError>;

    /// purchases.products.acknowledge
    ///
    /// payload:
    ///   Optional raw JSON body, e.g. '{"developerPayload":"..."}'.
    async fn acknowledge_product_purchase(
        &self,
        product_id: &str,
        token: &PurchaseToken,
        payload: Option<&str>,
    ) -> Result<(), MiGlobalIapError>;

    /// purchases.products.consume
    ///
    /// payload:
    ///   Optional raw JSON body, e.g. '{"developerPayload":"..."}'.
    async fn consume_product_purchase(
        &self,
        product_id: &str,
        token: &PurchaseToken,
        payload: Option<&str>,
    ) -> Result<(), MiGlobalIapError>;
}

pub struct MiGlobalIapApiDatasourceImpl<T: HttpTransport> {
    config: MiGlobalIapConfig,
    transport: T,
}

#[async_trait]
impl<T: HttpTransport> MiGlobalIapApiDatasource for MiGlobalIapApiDatasourceImpl<T> {
    async fn get_product_purchase(
        &self,
        product_id: &str,
        token: &PurchaseToken,
    ) -> Result<ProductPurchaseModel, MiGlobalIapError> {
        let body = self
            .callout(PurchaseOperation::Status, product_id, token, None)
            .await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn acknowledge_product_purchase(
        &self,
        product_id: &str,
        token: &PurchaseToken,
        payload: Option<&str>,
    ) -> Result<(), MiGlobalIapError> {
        self.callout(PurchaseOperation::Acknowledge, product_id, token, payload)
            .await?;
        Ok(())
    }

    async fn consume_product_purchase(
        &self,
        product_id: &str,
        token: &PurchaseToken,
        payload: Option<&str>,
    ) -> Result<(), MiGlobalIapError> {
        self.callout(PurchaseOperation::Consume, product_id, token, payload)
            .await?;
        Ok(())
    }
}

impl MiGlobalIapApiDatasourceImpl<ReqwestTransport> {
    pub(crate) fn new(config: MiGlobalIapConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: HttpTransport> MiGlobalIapApiDatasourceImpl<T> {
    pub(crate) fn with_transport(config: MiGlobalIapConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Signs and sends one request, returning the raw body of a 200 response.
    async fn callout(
        &self,
        operation: PurchaseOperation,
        product_id: &str,
        token: &PurchaseToken,
        payload: Option<&str>,
    ) -> Result<Vec<u8>, MiGlobalIapError> {
        let method = operation.method();
        let path = build_request_path(self.config.package_name(), product_id, token, operation);
        let body = payload.filter(|p| !p.is_empty());

        let signature = RequestSigner::new(self.config.app_secret()).sign(&method, &path, body)?;
        let headers = RequestHeaders::assemble(self.config.app_id(), &signature);

        debug!(operation = operation.name(), %method, %path, "calling Mi Global IAP API");
        let response = self
            .transport
            .send(HttpRequest {
                url: format!("{}{}", self.config.base_url(), path),
                method,
                headers,
                body: body.map(str::to_owned),
            })
            .await?;
        debug!(
            operation = operation.name(),
            status = %response.status,
            "Mi Global IAP API responded"
        );

        if response.status != StatusCode::OK {
            let error = ResponseErrorModel::from_body(&response.body);
            return Err(MiGlobalIapError::Api {
                status: response.status.as_u16(),
                code: error.code,
                message: error.message,
            });
        }
        Ok(response.body)
    }
}

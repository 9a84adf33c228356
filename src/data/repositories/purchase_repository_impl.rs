use async_trait::async_trait;

use crate::{
    config::MiGlobalIapConfig,
    data::{
        datasources::{
            http_transport::ReqwestTransport,
            mi_global_iap_api_datasource::{
                MiGlobalIapApiDatasource, MiGlobalIapApiDatasourceImpl,
            },
        },
        models::mi_global_iap_api::product_purchase_model as mp,
    },
    domain::{
        entities::{
            purchase_result::{
                AcknowledgementState, ConsumptionState, PurchaseResult, PurchaseState,
                PurchaseType,
            },
            purchase_token::PurchaseToken,
        },
        repositories::purchase_repository::PurchaseRepository,
    },
    errors::MiGlobalIapError,
};

pub struct PurchaseRepositoryImpl<D: MiGlobalIapApiDatasource> {
    mi_global_iap_api_datasource: D,
}

#[async_trait]
impl<D: MiGlobalIapApiDatasource> PurchaseRepository for PurchaseRepositoryImpl<D> {
    async fn get_purchase(
        &self,
        product_id: &str,
        token: &PurchaseToken,
    ) -> Result<PurchaseResult, MiGlobalIapError> {
        let m = self
            .mi_global_iap_api_datasource
            .get_product_purchase(product_id, token)
            .await?;
        Ok(PurchaseResult::from_product_purchase(m))
    }

    async fn acknowledge_purchase(
        &self,
        product_id: &str,
        token: &PurchaseToken,
        payload: Option<&str>,
    ) -> Result<(), MiGlobalIapError> {
        self.mi_global_iap_api_datasource
            .acknowledge_product_purchase(product_id, token, payload)
            .await
    }

    async fn consume_purchase(
        &self,
        product_id: &str,
        token: &PurchaseToken,
        payload: Option<&str>,
    ) -> Result<(), MiGlobalIapError> {
        self.mi_global_iap_api_datasource
            .consume_product_purchase(product_id, token, payload)
            .await
    }
}

impl PurchaseRepositoryImpl<MiGlobalIapApiDatasourceImpl<ReqwestTransport>> {
    pub(crate) fn new(config: MiGlobalIapConfig) -> Self {
        Self::with_datasource(MiGlobalIapApiDatasourceImpl::new(config))
    }
}

impl<D: MiGlobalIapApiDatasource> PurchaseRepositoryImpl<D> {
    pub(crate) fn with_datasource(mi_global_iap_api_datasource: D) -> Self {
        Self {
            mi_global_iap_api_datasource,
        }
    }
}

// Model conversions:
// ----------------------------

impl PurchaseResult {
    fn from_product_purchase(m: mp::ProductPurchaseModel) -> Self {
        Self {
            kind: m.kind.unwrap_or_default(),
            product_id: m.product_id.unwrap_or_default(),
            quantity: m.quantity.unwrap_or_default(),
            order_id: m.order_id.unwrap_or_default(),
            purchase_token: m.purchase_token.unwrap_or_default(),
            purchase_time: m.purchase_time_millis,
            purchase_state: m.purchase_state.unwrap_or_default().into(),
            acknowledgement_state: m.acknowledgement_state.unwrap_or_default().into(),
            consumption_state: m.consumption_state.unwrap_or_default().into(),
            purchase_type: m.purchase_type.map(|t| match t {
                0 => PurchaseType::LicenseTest,
                other => PurchaseType::Other(other),
            }),
            developer_payload: non_empty(m.developer_payload),
            obfuscated_external_account_id: non_empty(m.obfuscated_external_account_id),
            obfuscated_external_profile_id: non_empty(m.obfuscated_external_profile_id),
            region_code: m.region_code.unwrap_or_default(),
        }
    }
}

impl From<mp::PurchaseState> for PurchaseState {
    fn from(s: mp::PurchaseState) -> Self {
        match s {
            mp::PurchaseState::Purchased => PurchaseState::Purchased,
            mp::PurchaseState::Refunded => PurchaseState::Refunded,
            mp::PurchaseState::Pending => PurchaseState::Pending,
        }
    }
}

impl From<mp::AcknowledgementState> for AcknowledgementState {
    fn from(s: mp::AcknowledgementState) -> Self {
        match s {
            mp::AcknowledgementState::YetToBeAcknowledged => {
                AcknowledgementState::YetToBeAcknowledged
            }
            mp::AcknowledgementState::Acknowledged => AcknowledgementState::Acknowledged,
        }
    }
}

impl From<mp::ConsumptionState> for ConsumptionState {
    fn from(s: mp::ConsumptionState) -> Self {
        match s {
            mp::ConsumptionState::YetToBeConsumed => ConsumptionState::YetToBeConsumed,
            mp::ConsumptionState::Consumed => ConsumptionState::Consumed,
        }
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}

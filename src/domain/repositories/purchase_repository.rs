use async_trait::async_trait;

use crate::{
    domain::entities::{purchase_result::PurchaseResult, purchase_token::PurchaseToken},
    errors::MiGlobalIapError,
};

#[async_trait]
pub trait PurchaseRepository: Send + Sync {
    async fn get_purchase(
        &self,
        product_id: &str,
        token: &PurchaseToken,
    ) -> Result<PurchaseResult, MiGlobalIapError>;

    /// `payload` is a raw JSON body such as `{"developerPayload":"..."}`,
    /// sent unmodified.
    async fn acknowledge_purchase(
        &self,
        product_id: &str,
        token: &PurchaseToken,
        payload: Option<&str>,
    ) -> Result<(), MiGlobalIapError>;

    /// `payload` is a raw JSON body such as `{"developerPayload":"..."}`,
    /// sent unmodified.
    async fn consume_purchase(
        &self,
        product_id: &str,
        token: &PurchaseToken,
        payload: Option<&str>,
    ) -> Result<(), MiGlobalIapError>;
}

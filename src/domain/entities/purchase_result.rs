use chrono::{DateTime, Utc};
use rust_iso3166::CountryCode;

/// Details of a single in-app product purchase, as reported by the Mi Global
/// IAP API.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseResult {
    /// Purchase kind, "inapp" for one-time products.
    pub kind: String,
    pub product_id: String,
    pub quantity: i32,
    pub order_id: String,
    pub purchase_token: String,
    /// None if the API returned no usable purchase time.
    pub purchase_time: Option<DateTime<Utc>>,
    pub purchase_state: PurchaseState,
    pub acknowledgement_state: AcknowledgementState,
    pub consumption_state: ConsumptionState,
    /// Only set when the purchase was not made through the standard flow.
    pub purchase_type: Option<PurchaseType>,
    /// Extra information supplied when acknowledging or consuming.
    pub developer_payload: Option<String>,
    /// Account identifier set by the SDK when the purchase was launched.
    pub obfuscated_external_account_id: Option<String>,
    /// Profile identifier set by the SDK when the purchase was launched.
    pub obfuscated_external_profile_id: Option<String>,
    /// ISO 3166-1 alpha-2 region code of the purchase.
    pub region_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseState {
    Purchased,
    Refunded,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcknowledgementState {
    YetToBeAcknowledged,
    Acknowledged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumptionState {
    YetToBeConsumed,
    Consumed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseType {
    /// Bought by an account on the license-test whitelist.
    LicenseTest,
    Other(u8),
}

impl PurchaseResult {
    pub fn is_acknowledged(&self) -> bool {
        self.acknowledgement_state == AcknowledgementState::Acknowledged
    }

    pub fn is_consumed(&self) -> bool {
        self.consumption_state == ConsumptionState::Consumed
    }

    pub fn is_purchased(&self) -> bool {
        self.purchase_state == PurchaseState::Purchased
    }

    pub fn is_refunded(&self) -> bool {
        self.purchase_state == PurchaseState::Refunded
    }

    pub fn is_pending(&self) -> bool {
        self.purchase_state == PurchaseState::Pending
    }

    pub fn is_license_test(&self) -> bool {
        self.purchase_type == Some(PurchaseType::LicenseTest)
    }

    /// None if the region code is not a known ISO 3166-1 alpha-2 code.
    pub fn region(&self) -> Option<CountryCode> {
        rust_iso3166::from_alpha2(&self.region_code)
    }
}

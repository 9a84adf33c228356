use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_repr::Deserialize_repr;
use serde_with::{formats::Flexible, serde_as, DefaultOnError, TimestampMilliSeconds};

/// Data structure returned by the Mi Global IAP API when querying for a
/// product purchase.
///
/// Whether fields are nullable is not documented, so every field may be
/// missing or null. A body that is not valid JSON, or has fields of the wrong
/// type, is rejected.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPurchaseModel {
    /// Purchase kind, "inapp" for one-time products.
    pub(crate) kind: Option<String>,
    pub(crate) product_id: Option<String>,
    pub(crate) quantity: Option<i32>,
    pub(crate) order_id: Option<String>,
    pub(crate) purchase_token: Option<String>,
    /// Milliseconds since the epoch, sent as a string. Empty or unparseable
    /// values are treated as absent.
    #[serde_as(as = "DefaultOnError<Option<TimestampMilliSeconds<String, Flexible>>>")]
    pub(crate) purchase_time_millis: Option<DateTime<Utc>>,
    pub(crate) purchase_state: Option<PurchaseState>,
    pub(crate) acknowledgement_state: Option<AcknowledgementState>,
    pub(crate) consumption_state: Option<ConsumptionState>,
    /// Not returned for normal purchases. 0 means the purchase was made by a
    /// license-test account.
    pub(crate) purchase_type: Option<u8>,
    pub(crate) developer_payload: Option<String>,
    pub(crate) obfuscated_external_account_id: Option<String>,
    pub(crate) obfuscated_external_profile_id: Option<String>,
    pub(crate) region_code: Option<String>,
}

#[derive(Debug, Default, Deserialize_repr, PartialEq)]
#[repr(u8)]
pub(crate) enum PurchaseState {
    #[default]
    Purchased = 0,
    Refunded = 1,
    Pending = 2,
}

#[derive(Debug, Default, Deserialize_repr, PartialEq)]
#[repr(u8)]
pub(crate) enum AcknowledgementState {
    #[default]
    YetToBeAcknowledged = 0,
    Acknowledged = 1,
}

#[derive(Debug, Default, Deserialize_repr, PartialEq)]
#[repr(u8)]
pub(crate) enum ConsumptionState {
    #[default]
    YetToBeConsumed = 0,
    Consumed = 1,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn millis(m: &ProductPurchaseModel) -> Option<i64> {
        m.purchase_time_millis.map(|t| t.timestamp_millis())
    }

    #[test]
    fn test_parse_full_body() {
        let body = r#"{
            "kind": "inapp",
            "productId": "game-10",
            "quantity": 1,
            "orderId": "O123",
            "purchaseToken": "PID220706155637286289388715727088",
            "purchaseTimeMillis": "1657094197000",
            "purchaseState": 0,
            "acknowledgementState": 1,
            "consumptionState": 0,
            "purchaseType": 0,
            "developerPayload": "test",
            "obfuscatedExternalAccountId": "account",
            "obfuscatedExternalProfileId": "profile",
            "regionCode": "ID"
        }"#;
        let m: ProductPurchaseModel = serde_json::from_str(body).unwrap();
        assert_eq!(m.kind.as_deref(), Some("inapp"));
        assert_eq!(m.product_id.as_deref(), Some("game-10"));
        assert_eq!(millis(&m), Some(1657094197000));
        assert_eq!(m.purchase_state, Some(PurchaseState::Purchased));
        assert_eq!(
            m.acknowledgement_state,
            Some(AcknowledgementState::Acknowledged)
        );
        assert_eq!(m.consumption_state, Some(ConsumptionState::YetToBeConsumed));
        assert_eq!(m.purchase_type, Some(0));
        assert_eq!(m.region_code.as_deref(), Some("ID"));
    }

    #[test]
    fn test_missing_fields() {
        let m: ProductPurchaseModel = serde_json::from_str(r#"{"productId":"game-10"}"#).unwrap();
        assert_eq!(m.product_id.as_deref(), Some("game-10"));
        assert_eq!(m.quantity, None);
        assert_eq!(millis(&m), None);
        assert_eq!(m.purchase_type, None);
        assert_eq!(m.consumption_state, None);
    }

    #[test]
    fn test_null_fields() {
        let m: ProductPurchaseModel = serde_json::from_str(
            r#"{
                "kind": null,
                "productId": "game-10",
                "quantity": null,
                "orderId": null,
                "purchaseToken": null,
                "purchaseTimeMillis": null,
                "purchaseState": null,
                "acknowledgementState": null,
                "consumptionState": null,
                "purchaseType": null,
                "developerPayload": null,
                "obfuscatedExternalAccountId": null,
                "obfuscatedExternalProfileId": null,
                "regionCode": null
            }"#,
        )
        .unwrap();
        assert_eq!(m.product_id.as_deref(), Some("game-10"));
        assert_eq!(m.kind, None);
        assert_eq!(m.quantity, None);
        assert_eq!(millis(&m), None);
        assert_eq!(m.purchase_state, None);
        assert_eq!(m.developer_payload, None);
        assert_eq!(m.obfuscated_external_account_id, None);
        assert_eq!(m.region_code, None);
    }

    #[test]
    fn test_empty_purchase_time() {
        let m: ProductPurchaseModel =
            serde_json::from_str(r#"{"purchaseTimeMillis":"","productId":"game-10"}"#).unwrap();
        assert_eq!(millis(&m), None);
        assert_eq!(m.product_id.as_deref(), Some("game-10"));
    }

    #[test]
    fn test_numeric_purchase_time() {
        let m: ProductPurchaseModel =
            serde_json::from_str(r#"{"purchaseTimeMillis":1657094197000}"#).unwrap();
        assert_eq!(millis(&m), Some(1657094197000));
    }

    #[test]
    fn test_malformed_body_rejected() {
        assert!(serde_json::from_str::<ProductPurchaseModel>("not json").is_err());
        assert!(serde_json::from_str::<ProductPurchaseModel>(r#"{"purchaseState":7}"#).is_err());
        assert!(serde_json::from_str::<ProductPurchaseModel>(r#"{"productId":5}"#).is_err());
    }
}

use reqwest::Method;

use crate::{
    constants::{ACKNOWLEDGE, CONSUME},
    domain::entities::purchase_token::PurchaseToken,
};

/// The purchases.products calls exposed by the Mi Global IAP API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PurchaseOperation {
    Status,
    Acknowledge,
    Consume,
}

impl PurchaseOperation {
    pub(crate) fn method(self) -> Method {
        match self {
            PurchaseOperation::Status => Method::GET,
            PurchaseOperation::Acknowledge | PurchaseOperation::Consume => Method::POST,
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            PurchaseOperation::Status => "purchases.products.get",
            PurchaseOperation::Acknowledge => "purchases.products.acknowledge",
            PurchaseOperation::Consume => "purchases.products.consume",
        }
    }

    fn suffix(self) -> Option<&'static str> {
        match self {
            PurchaseOperation::Status => None,
            PurchaseOperation::Acknowledge => Some(ACKNOWLEDGE),
            PurchaseOperation::Consume => Some(CONSUME),
        }
    }
}

/// Request path, without the base URL. This exact string is also part of the
/// signed canonical request.
pub(crate) fn build_request_path(
    package_name: &str,
    product_id: &str,
    token: &PurchaseToken,
    operation: PurchaseOperation,
) -> String {
    let region = token.region();
    let token = token.as_str();
    let path = format!(
        "/{region}/developer/v1/applications/{package_name}/purchases/products/{product_id}/tokens/{token}"
    );
    match operation.suffix() {
        Some(suffix) => format!("{path}:{suffix}"),
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "PID220706155637286289388715727088";

    fn path(operation: PurchaseOperation) -> String {
        build_request_path(
            "com.iap.test",
            "game-10",
            &PurchaseToken::parse(TOKEN).unwrap(),
            operation,
        )
    }

    #[test]
    fn test_status_path() {
        assert_eq!(
            path(PurchaseOperation::Status),
            "/ID/developer/v1/applications/com.iap.test/purchases/products/game-10/tokens/PID220706155637286289388715727088"
        );
    }

    #[test]
    fn test_suffixed_paths() {
        assert_eq!(
            path(PurchaseOperation::Acknowledge),
            format!("{}:acknowledge", path(PurchaseOperation::Status))
        );
        assert_eq!(
            path(PurchaseOperation::Consume),
            format!("{}:consume", path(PurchaseOperation::Status))
        );
    }

    #[test]
    fn test_methods() {
        assert_eq!(PurchaseOperation::Status.method(), Method::GET);
        assert_eq!(PurchaseOperation::Acknowledge.method(), Method::POST);
        assert_eq!(PurchaseOperation::Consume.method(), Method::POST);
    }
}

use crate::errors::MiGlobalIapError;

/// Purchase token received on the device when buying an in-app product
/// through the Mi Global payment SDK.
///
/// The second and third characters encode the two-letter region the
/// purchase is served from, which is why only tokens of at least 3
/// characters are accepted. No further format checks are made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseToken(String);

impl PurchaseToken {
    pub fn parse(token: impl Into<String>) -> Result<Self, MiGlobalIapError> {
        let token = token.into();
        if token.chars().count() < 3 {
            return Err(MiGlobalIapError::InvalidPurchaseToken(token));
        }
        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Region code embedded in the token, e.g. "ID" for
    /// "PID220706155637286289388715727088".
    pub fn region(&self) -> &str {
        let mut boundaries = self
            .0
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(self.0.len()));
        let start = boundaries.nth(1).unwrap_or(self.0.len());
        let end = boundaries.nth(1).unwrap_or(self.0.len());
        &self.0[start..end]
    }
}

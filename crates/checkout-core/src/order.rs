//! # Order Types
//!
//! Order-creation request and the descriptor handed back to the browser.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currency used when the client omits one
pub const DEFAULT_CURRENCY: &str = "INR";

/// A validated order-creation request (amount in major units).
///
/// Constructed only after the amount has been parsed and range-checked;
/// an invalid amount never reaches a gateway.
#[derive(Debug, Clone)]
pub struct OrderRequest {
    /// Amount in major currency units (rupees for INR)
    pub amount: Decimal,

    /// ISO currency code
    pub currency: String,

    /// Caller-supplied receipt reference; gateways generate one when absent
    pub receipt: Option<String>,
}

impl OrderRequest {
    /// Create an order request, applying the currency default
    pub fn new(amount: Decimal, currency: Option<String>, receipt: Option<String>) -> Self {
        Self {
            amount,
            currency: currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            receipt,
        }
    }
}

/// A gateway-created order, returned to the browser to start checkout.
///
/// Transient: nothing is persisted locally, the gateway is the source of
/// truth for order state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDescriptor {
    /// Gateway order id (consumed by the checkout widget)
    pub order_id: String,

    /// Amount in minor units, as echoed by the gateway
    pub amount: i64,

    /// Currency, as echoed by the gateway
    pub currency: String,

    /// Public key id (safe to expose to the browser)
    pub key_id: String,

    /// Receipt reference, as echoed by the gateway
    pub receipt: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_currency_default() {
        let order = OrderRequest::new(Decimal::from_str("499").unwrap(), None, None);
        assert_eq!(order.currency, "INR");

        let order = OrderRequest::new(
            Decimal::from_str("499").unwrap(),
            Some("USD".to_string()),
            None,
        );
        assert_eq!(order.currency, "USD");
    }

    #[test]
    fn test_descriptor_wire_shape() {
        let descriptor = OrderDescriptor {
            order_id: "order_MkZ1".to_string(),
            amount: 49900,
            currency: "INR".to_string(),
            key_id: "rzp_test_abc".to_string(),
            receipt: "rcpt_1".to_string(),
        };

        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["orderId"], "order_MkZ1");
        assert_eq!(json["amount"], 49900);
        assert_eq!(json["keyId"], "rzp_test_abc");
        assert_eq!(json["receipt"], "rcpt_1");
    }
}

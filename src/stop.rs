//! Concrete delivery stop for the dispatch boundary.
//!
//! The planner itself is generic over [`crate::traits::Stop`]; this type is
//! the shape the surrounding dispatch system exchanges, with camelCase
//! field names matching its JSON contract. Address, customer name, and
//! amount are carried through planning unchanged and never used in the
//! computation.

use serde::{Deserialize, Serialize};

use crate::traits::Stop;

/// Fallback courier start location (Santo Domingo) for callers that supply
/// no origin.
pub const DEFAULT_ORIGIN: (f64, f64) = (18.4861, -69.9312);

/// One delivery destination resolved from an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryStop {
    /// Opaque order identifier; unique within one planning call.
    pub order_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub customer_name: String,
    pub total_amount: f64,
    pub is_priority: bool,
}

impl Stop for DeliveryStop {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.order_id
    }

    fn location(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    fn is_priority(&self) -> bool {
        self.is_priority
    }
}

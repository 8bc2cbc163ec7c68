//! Value-for-value (`<podcast:value>`) records.

use serde::{Deserialize, Serialize};

/// A `<podcast:value>` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueBlock {
    /// Payment model.
    pub model: Option<ValueModel>,
    /// Payment recipients.
    pub destinations: Option<Vec<ValueDestination>>,
}

/// The payment model of a value block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueModel {
    /// Payment type, e.g. `lightning`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Payment method, e.g. `keysend`.
    pub method: Option<String>,
    /// Suggested amount per minute.
    pub suggested: Option<String>,
}

/// A single recipient of a value split.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValueDestination {
    /// Recipient name.
    pub name: Option<String>,
    /// Address type, e.g. `node`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Recipient address.
    pub address: Option<String>,
    /// Share of the payment.
    pub split: Option<f64>,
    /// Whether this recipient is a fee.
    pub fee: Option<bool>,
    /// Custom TLV record key.
    pub custom_key: Option<String>,
    /// Custom TLV record value.
    pub custom_value: Option<String>,
}

impl ValueBlock {
    /// Sum of all non-fee splits.
    pub fn total_split(&self) -> f64 {
        self.destinations
            .iter()
            .flatten()
            .filter(|dest| !dest.fee.unwrap_or(false))
            .filter_map(|dest| dest.split)
            .sum()
    }
}

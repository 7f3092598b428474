//! Wire records of the packet telemetry stream

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};

/// Record type tag for received packets
pub const TYPE_RX_PACKET: &str = "rx-packet";
/// Record type tag for receive errors
pub const TYPE_RX_ERROR: &str = "rx-error";
/// Record type tag carried by computed latency records
pub const TYPE_LATENCY: &str = "latency";

/// One input line, classified by its `type` field
#[derive(Debug, Clone, PartialEq)]
pub enum InputRecord {
    /// A receive error report; the raw line is forwarded unchanged
    RxError,

    /// A received packet with its observation timestamps
    RxPacket(PacketTimestamps),

    /// Anything else; dropped without output or diagnostics
    Other,
}

impl InputRecord {
    /// Classify a parsed JSON value.
    ///
    /// Values that are not objects, carry no `type` field, or carry an
    /// unrecognized `type` classify as [`InputRecord::Other`]. An
    /// `rx-packet` without a usable `object` is a validation error.
    pub fn classify(value: &Value) -> Result<Self> {
        let record_type = match value.get("type").and_then(Value::as_str) {
            Some(record_type) => record_type,
            None => return Ok(Self::Other),
        };

        match record_type {
            TYPE_RX_ERROR => Ok(Self::RxError),
            TYPE_RX_PACKET => {
                let object = value.get("object").ok_or_else(|| {
                    AppError::validation("rx-packet record has no 'object' field")
                })?;
                let timestamps = PacketTimestamps::deserialize(object).map_err(|e| {
                    AppError::validation(format!("rx-packet object is malformed: {}", e))
                })?;
                Ok(Self::RxPacket(timestamps))
            }
            _ => Ok(Self::Other),
        }
    }
}

/// The observation timestamps attached to an `rx-packet` record.
///
/// Producers attach further fields (stream id, sequence number, send
/// interval); everything beyond the timestamps is ignored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacketTimestamps {
    /// Userspace clock at the sender when the packet was handed to the stack
    #[serde(rename = "tx-user-timestamp")]
    pub tx_user: String,

    /// Hardware clock at the receiving NIC when the packet arrived
    #[serde(rename = "rx-hw-timestamp")]
    pub rx_hw: String,

    /// Userspace clock at the receiver when the packet was read
    #[serde(rename = "rx-user-timestamp")]
    pub rx_user: String,
}

/// A computed latency record, one per well-formed `rx-packet`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyRecord {
    /// Always [`TYPE_LATENCY`]
    #[serde(rename = "type")]
    pub record_type: String,

    /// The measured values
    pub object: LatencyObject,
}

impl LatencyRecord {
    /// Wrap measured values in a tagged record
    pub fn new(object: LatencyObject) -> Self {
        Self {
            record_type: TYPE_LATENCY.to_string(),
            object,
        }
    }
}

/// Measured latencies for one packet, in whole nanoseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyObject {
    /// Sender userspace clock to receiver hardware clock
    #[serde(rename = "latency-user-hw")]
    pub user_to_hw_ns: i128,

    /// Sender userspace clock to receiver userspace clock
    #[serde(rename = "latency-user-user")]
    pub user_to_user_ns: i128,

    /// The sender timestamp exactly as it appeared on the input record,
    /// kept so latencies can be correlated back to transmissions
    #[serde(rename = "tx-user-timestamp")]
    pub tx_user: String,
}

//! Latency computation for received packets

use crate::error::Result;
use crate::models::record::{LatencyObject, LatencyRecord, PacketTimestamps};
use crate::models::timestamp::parse_timestamp;

/// Compute the latency record for one received packet.
///
/// Both latencies are measured from the sender's userspace timestamp:
/// `latency-user-hw` ends at the receiving NIC's hardware clock,
/// `latency-user-user` at the receiver's userspace clock. Values are
/// signed whole nanoseconds; skewed clocks legitimately produce negative
/// values, which pass through unclamped.
///
/// The sending NIC's hardware timestamp is not reported by producers, so
/// no transmit-side wire latency is computed.
pub fn calc_latency(packet: &PacketTimestamps) -> Result<LatencyRecord> {
    let tx_user = parse_timestamp(&packet.tx_user)?;
    let rx_hw = parse_timestamp(&packet.rx_hw)?;
    let rx_user = parse_timestamp(&packet.rx_user)?;

    Ok(LatencyRecord::new(LatencyObject {
        user_to_hw_ns: rx_hw - tx_user,
        user_to_user_ns: rx_user - tx_user,
        tx_user: packet.tx_user.clone(),
    }))
}

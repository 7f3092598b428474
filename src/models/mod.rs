//! Data models and structures for the packet latency calculator

pub mod record;
pub mod timestamp;

// Re-export main model types
pub use record::{InputRecord, LatencyObject, LatencyRecord, PacketTimestamps};
pub use timestamp::{parse_timestamp, Nanos};

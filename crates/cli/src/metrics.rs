//! Prometheus text exposition of the pipeline metrics.

use anyhow::Result;
use prometheus::{Encoder, Registry, TextEncoder};

/// Registers every pipeline metric and encodes the current values.
pub fn encode_metrics() -> Result<String> {
    let registry = Registry::new();
    for collector in carousel_core::metrics::all_metrics() {
        registry.register(collector)?;
    }

    let mut buffer = Vec::new();
    TextEncoder::new().encode(&registry.gather(), &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

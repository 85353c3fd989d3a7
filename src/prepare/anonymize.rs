use std::net::Ipv4Addr;

use ipnet::Ipv4Net;
use log::info;

use crate::args::AnonymizationMode;
use crate::errors::{PipelineError, Result};
use crate::prepare::labels::Dataset;

/// The constant every address collapses to under black-marker anonymization.
pub const BLACK_MARKER: &str = "0";

const TRUNCATION_PREFIX: u8 = 24;

/// Applies the configured anonymization to the address columns of the
/// working table. All other columns are untouched.
pub fn apply(dataset: &mut Dataset, mode: AnonymizationMode) -> Result<()> {
    match mode {
        AnonymizationMode::Disabled => Ok(()),
        AnonymizationMode::Truncate24 => {
            for record in &mut dataset.records {
                record.src_addr = truncate_host_bits(&record.src_addr)?;
                record.dst_addr = truncate_host_bits(&record.dst_addr)?;
            }
            info!("truncated addresses to /{} networks", TRUNCATION_PREFIX);
            Ok(())
        }
        AnonymizationMode::Blackmarker => {
            for record in &mut dataset.records {
                record.src_addr = BLACK_MARKER.to_string();
                record.dst_addr = BLACK_MARKER.to_string();
            }
            info!("replaced addresses with black-marker placeholder");
            Ok(())
        }
    }
}

/// Zeroes the host bits of an IPv4 address, keeping only its /24 network.
/// Two hosts in the same subnet stay indistinguishable from each other but
/// distinguishable from other subnets.
fn truncate_host_bits(addr: &str) -> Result<String> {
    let ip: Ipv4Addr = addr
        .trim()
        .parse()
        .map_err(|_| PipelineError::Format(addr.to_string()))?;
    let net = Ipv4Net::new(ip, TRUNCATION_PREFIX)
        .map_err(|_| PipelineError::Format(addr.to_string()))?;
    Ok(net.network().to_string())
}

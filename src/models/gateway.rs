//! VPN gateway record distributed per hood.

use serde::{Deserialize, Serialize};

/// One VPN endpoint of a hood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gateway {
    pub name: String,

    /// Tunnel protocol, `"fastd"` for the registry's standard gateways
    pub protocol: String,

    /// Host name or IP address
    pub address: String,

    pub port: u16,

    /// Peer public key, serialized under the wire name `key`
    #[serde(rename = "key")]
    pub public_key: String,
}

impl Gateway {
    /// Gateway speaking the registry's default `fastd` protocol
    pub fn fastd(name: &str, address: &str, port: u16, public_key: &str) -> Self {
        Self {
            name: name.to_string(),
            protocol: "fastd".to_string(),
            address: address.to_string(),
            port,
            public_key: public_key.to_string(),
        }
    }
}

use crate::att::constants::*;
use bitflags::bitflags;

bitflags! {
    /// Services to register when adding the profile
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ServiceMask: u32 {
        const CHALLENGE_SERVICE = 0x0000_0001;
    }
}

/// Challenge profile configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileConfig {
    /// Maximum number of concurrent connections; sizes the client configuration table
    pub max_connections: usize,
    /// Minimum encryption key size requested at registration
    pub min_encryption_key_size: u8,
    /// ATT_MTU assumed for notifications when the transport does not report one
    pub att_mtu: u16,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            max_connections: 3,
            min_encryption_key_size: GATT_MAX_ENCRYPT_KEY_SIZE,
            att_mtu: ATT_DEFAULT_MTU,
        }
    }
}

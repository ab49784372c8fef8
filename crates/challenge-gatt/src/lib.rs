//! challenge-gatt - A GATT service for a BLE challenge/response handshake
//!
//! This library provides the attribute table and the read/write dispatch logic of a
//! custom GATT service with three characteristics. A remote client writes a challenge,
//! the application computes a response and announces it through a notify-capable
//! status characteristic. Link management, PDU encoding and security are left to the
//! hosting GATT transport, which the profile reaches through [`gatt::GattTransport`].

pub mod att;
pub mod error;
pub mod gatt;
pub mod profile;
pub mod uuid;

// Re-export common types for convenience
pub use att::{AccessMethod, Attribute, AttributeTable, AttributeValue};
pub use error::{ProfileError, ProfileResult};
pub use gatt::{ClientConfig, ClientConfigTable, GattTransport, ProfileCallbacks};
pub use profile::{
    Characteristic, ChallengeProfile, ParameterStore, ProfileConfig, ResponseStatus, ServiceMask,
};
pub use uuid::Uuid;

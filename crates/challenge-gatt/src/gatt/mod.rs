//! GATT server plumbing for the challenge profile
//!
//! This module provides the per-connection client configuration table and the
//! traits through which the profile talks to the transport and the application.

pub mod cccd;
pub mod transport;


pub use cccd::{ClientConfig, ClientConfigEntry, ClientConfigTable};
pub use transport::{GattTransport, ProfileCallbacks};

//! Challenge/response profile
//!
//! One primary service (0xFFF0) with three characteristics: the client writes a
//! 16-byte challenge, the application publishes a 128-byte response and
//! signals progress through a 1-byte status that subscribed clients receive
//! as notifications.

pub mod characteristic;
pub mod config;
pub mod service;
pub mod store;


pub use characteristic::*;
pub use config::{ProfileConfig, ServiceMask};
pub use service::{attribute_table, ChallengeProfile};
pub use store::ParameterStore;

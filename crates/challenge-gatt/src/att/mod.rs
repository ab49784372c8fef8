//! Attribute layer for the challenge profile
//!
//! Holds the ATT constants, permission and property flags, and the ordered
//! attribute table the profile registers with the transport.

pub mod constants;
pub mod table;
pub mod types;

#[cfg(test)]
mod tests;

pub use self::constants::*;
pub use self::table::{assign_handles, Attribute, AttributeTable, AttributeValue};
pub use self::types::{AccessMethod, AttPermissions, CharacteristicProperties};

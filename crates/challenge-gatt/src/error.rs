//! Error types for the challenge profile
//!
//! Every failure is reported synchronously to the caller. Errors raised while
//! servicing a remote client map onto an ATT status byte via [`ProfileError::to_att_code`]
//! so the transport can answer with an Error Response.

use crate::att::constants::*;
use thiserror::Error;

/// Errors returned by the attribute dispatchers, the parameter accessors and
/// service registration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Attribute not found")]
    AttributeNotFound,

    #[error("Invalid handle: {0}")]
    InvalidHandle(u16),

    #[error("Read not permitted")]
    ReadNotPermitted,

    #[error("Write not permitted")]
    WriteNotPermitted,

    #[error("Invalid attribute value size")]
    InvalidValueSize,

    #[error("Attribute not long")]
    AttributeNotLong,

    #[error("Value length does not match the characteristic length")]
    InvalidRange,

    #[error("Unable to allocate the client configuration table")]
    AllocationFailure,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(u8),

    #[error("Improper client configuration value: {0:#06x}")]
    ImproperConfiguration(u16),

    #[error("Insufficient resources")]
    InsufficientResources,

    #[error("Transport error: {0}")]
    Transport(String),
}

impl ProfileError {
    /// Convert to the status byte carried in an ATT Error Response
    ///
    /// Accessor-only errors (`InvalidRange`, `InvalidParameter`,
    /// `AllocationFailure`) never reach a remote client; they map to the host
    /// status codes used for the same conditions.
    pub fn to_att_code(&self) -> u8 {
        match self {
            ProfileError::AttributeNotFound => ATT_ERROR_ATTRIBUTE_NOT_FOUND,
            ProfileError::InvalidHandle(_) => ATT_ERROR_INVALID_HANDLE,
            ProfileError::ReadNotPermitted => ATT_ERROR_READ_NOT_PERMITTED,
            ProfileError::WriteNotPermitted => ATT_ERROR_WRITE_NOT_PERMITTED,
            ProfileError::InvalidValueSize => ATT_ERROR_INVALID_ATTRIBUTE_VALUE_LENGTH,
            ProfileError::AttributeNotLong => ATT_ERROR_ATTRIBUTE_NOT_LONG,
            ProfileError::InvalidRange => HOST_STATUS_INVALID_RANGE,
            ProfileError::AllocationFailure => HOST_STATUS_MEM_ALLOC_ERROR,
            ProfileError::InvalidParameter(_) => HOST_STATUS_INVALID_PARAMETER,
            ProfileError::ImproperConfiguration(_) => ATT_ERROR_IMPROPER_CONFIGURATION,
            ProfileError::InsufficientResources => ATT_ERROR_INSUFFICIENT_RESOURCES,
            ProfileError::Transport(_) => ATT_ERROR_UNLIKELY,
        }
    }

    /// Get the handle associated with this error, if any
    pub fn handle(&self) -> Option<u16> {
        match self {
            ProfileError::InvalidHandle(handle) => Some(*handle),
            _ => None,
        }
    }
}

/// Result type used throughout the crate
pub type ProfileResult<T> = Result<T, ProfileError>;

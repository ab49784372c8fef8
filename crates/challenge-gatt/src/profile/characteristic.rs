//! The three characteristics of the challenge service
use crate::att::{AttPermissions, CharacteristicProperties};
use crate::error::ProfileError;
use crate::uuid::Uuid;
use std::convert::TryFrom;
use std::fmt;

/// Challenge service UUID
pub const CHALLENGE_SERVICE_UUID: u16 = 0xFFF0;
/// Challenge written by the client
pub const USER_CHALLENGE_UUID: u16 = 0xFFF1;
/// Response computed by the application
pub const SERVER_RESPONSE_UUID: u16 = 0xFFF2;
/// Handshake status, notify capable
pub const RESPONSE_READY_UUID: u16 = 0xFFF3;

pub const USER_CHALLENGE_LEN: usize = 16;
pub const SERVER_RESPONSE_LEN: usize = 128;
pub const RESPONSE_READY_LEN: usize = 1;

// Parameter identifiers used by the accessors and the change callback
pub const USER_CHALLENGE_PARAM: u8 = 0;
pub const SERVER_RESPONSE_PARAM: u8 = 1;
pub const RESPONSE_READY_PARAM: u8 = 2;

/// One of the fixed characteristics exposed by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Characteristic {
    UserChallenge,
    ServerResponse,
    ResponseReady,
}

impl Characteristic {
    pub const ALL: [Characteristic; 3] = [
        Characteristic::UserChallenge,
        Characteristic::ServerResponse,
        Characteristic::ResponseReady,
    ];

    /// Parameter identifier used by the application interface
    pub const fn param_id(&self) -> u8 {
        match self {
            Characteristic::UserChallenge => USER_CHALLENGE_PARAM,
            Characteristic::ServerResponse => SERVER_RESPONSE_PARAM,
            Characteristic::ResponseReady => RESPONSE_READY_PARAM,
        }
    }

    pub const fn uuid16(&self) -> u16 {
        match self {
            Characteristic::UserChallenge => USER_CHALLENGE_UUID,
            Characteristic::ServerResponse => SERVER_RESPONSE_UUID,
            Characteristic::ResponseReady => RESPONSE_READY_UUID,
        }
    }

    pub const fn uuid(&self) -> Uuid {
        Uuid::from_u16(self.uuid16())
    }

    /// Fixed value length in bytes
    pub const fn value_len(&self) -> usize {
        match self {
            Characteristic::UserChallenge => USER_CHALLENGE_LEN,
            Characteristic::ServerResponse => SERVER_RESPONSE_LEN,
            Characteristic::ResponseReady => RESPONSE_READY_LEN,
        }
    }

    pub fn properties(&self) -> CharacteristicProperties {
        match self {
            Characteristic::UserChallenge => {
                CharacteristicProperties::READ | CharacteristicProperties::WRITE
            }
            Characteristic::ServerResponse => CharacteristicProperties::READ,
            Characteristic::ResponseReady => {
                CharacteristicProperties::READ
                    | CharacteristicProperties::WRITE
                    | CharacteristicProperties::NOTIFY
            }
        }
    }

    /// Permissions of the value attribute
    pub fn permissions(&self) -> AttPermissions {
        match self {
            Characteristic::ServerResponse => AttPermissions::read_only(),
            _ => AttPermissions::read_write(),
        }
    }

    /// NUL-terminated user description
    pub const fn description(&self) -> &'static [u8] {
        match self {
            Characteristic::UserChallenge => b"User Challenge\0",
            Characteristic::ServerResponse => b"Server Response\0",
            Characteristic::ResponseReady => b"Response Status\0",
        }
    }

    /// Look up a characteristic by its 16-bit value UUID
    pub fn from_uuid16(uuid: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.uuid16() == uuid)
    }
}

impl TryFrom<u8> for Characteristic {
    type Error = ProfileError;

    fn try_from(param_id: u8) -> Result<Self, Self::Error> {
        match param_id {
            USER_CHALLENGE_PARAM => Ok(Characteristic::UserChallenge),
            SERVER_RESPONSE_PARAM => Ok(Characteristic::ServerResponse),
            RESPONSE_READY_PARAM => Ok(Characteristic::ResponseReady),
            other => Err(ProfileError::InvalidParameter(other)),
        }
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Characteristic::UserChallenge => "UserChallenge",
            Characteristic::ServerResponse => "ServerResponse",
            Characteristic::ResponseReady => "ResponseReady",
        };
        write!(f, "{} ({:#06x})", name, self.uuid16())
    }
}

/// Status byte carried in the ResponseReady characteristic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ResponseStatus {
    /// The server response is available for reading
    Ready = b'R',
    /// The client has read the response
    Read = b'D',
    NotReady = b'N',
    /// Waiting for the user to confirm on the device
    PendingUserClick = b'P',
    WaitingForChallenge = b'W',
}

impl ResponseStatus {
    pub const fn as_byte(&self) -> u8 {
        *self as u8
    }
}

impl From<ResponseStatus> for u8 {
    fn from(status: ResponseStatus) -> Self {
        status as u8
    }
}

impl TryFrom<u8> for ResponseStatus {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            b'R' => Ok(ResponseStatus::Ready),
            b'D' => Ok(ResponseStatus::Read),
            b'N' => Ok(ResponseStatus::NotReady),
            b'P' => Ok(ResponseStatus::PendingUserClick),
            b'W' => Ok(ResponseStatus::WaitingForChallenge),
            other => Err(other),
        }
    }
}

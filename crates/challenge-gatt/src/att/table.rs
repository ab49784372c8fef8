//! Attribute table for the challenge service
//!
//! The table is an ordered list of attribute records mirroring the linear GATT
//! handle space: service declaration, then for each characteristic its
//! declaration, value and descriptors. Handles are zero until the transport
//! assigns them at registration and never change afterwards.
use super::constants::*;
use super::types::{AttPermissions, CharacteristicProperties};
use crate::error::{ProfileError, ProfileResult};
use crate::profile::Characteristic;
use crate::uuid::Uuid;
use byteorder::{ByteOrder, LittleEndian};

/// Where the value of an attribute lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// Primary service declaration carrying the service UUID
    Service(Uuid),
    /// Characteristic declaration; the value handle is resolved from the table
    Declaration {
        properties: CharacteristicProperties,
        characteristic: Characteristic,
    },
    /// Characteristic value held in the parameter store
    Characteristic(Characteristic),
    /// Fixed user description string
    Description(&'static [u8]),
    /// Per-connection client configuration for a characteristic
    ClientConfig(Characteristic),
}

/// An attribute record in the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute type (UUID)
    pub type_: Uuid,
    /// Attribute permissions
    pub permissions: AttPermissions,
    /// Attribute handle, assigned by the transport
    pub handle: u16,
    /// Attribute value reference
    pub value: AttributeValue,
}

impl Attribute {
    /// Create a new attribute with an unassigned handle
    pub fn new(type_: Uuid, permissions: AttPermissions, value: AttributeValue) -> Self {
        Self {
            type_,
            permissions,
            handle: 0,
            value,
        }
    }

    pub fn service(uuid: Uuid) -> Self {
        Self::new(
            Uuid::from_u16(PRIMARY_SERVICE_UUID),
            AttPermissions::read_only(),
            AttributeValue::Service(uuid),
        )
    }

    pub fn declaration(characteristic: Characteristic) -> Self {
        Self::new(
            Uuid::from_u16(CHARACTERISTIC_UUID),
            AttPermissions::read_only(),
            AttributeValue::Declaration {
                properties: characteristic.properties(),
                characteristic,
            },
        )
    }

    pub fn value(characteristic: Characteristic) -> Self {
        Self::new(
            characteristic.uuid(),
            characteristic.permissions(),
            AttributeValue::Characteristic(characteristic),
        )
    }

    pub fn description(characteristic: Characteristic) -> Self {
        Self::new(
            Uuid::from_u16(CHAR_USER_DESC_UUID),
            AttPermissions::read_only(),
            AttributeValue::Description(characteristic.description()),
        )
    }

    pub fn client_config(characteristic: Characteristic) -> Self {
        Self::new(
            Uuid::from_u16(CLIENT_CHAR_CONFIG_UUID),
            AttPermissions::read_write(),
            AttributeValue::ClientConfig(characteristic),
        )
    }
}

/// Ordered attribute table registered with the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeTable {
    attributes: Vec<Attribute>,
}

impl AttributeTable {
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Self { attributes }
    }

    /// Number of attributes in the table
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    /// Mutable view handed to the transport so it can assign handles
    pub fn attributes_mut(&mut self) -> &mut [Attribute] {
        &mut self.attributes
    }

    /// Whether the transport has assigned handles to this table
    pub fn is_registered(&self) -> bool {
        self.attributes.iter().all(|attr| attr.handle != 0)
    }

    /// Assign consecutive handles starting at `first`, returning the last handle used
    pub fn assign_handles(&mut self, first: u16) -> ProfileResult<u16> {
        assign_handles(&mut self.attributes, first)
    }

    /// Get an attribute by handle
    pub fn get(&self, handle: u16) -> ProfileResult<&Attribute> {
        if handle == 0 {
            return Err(ProfileError::InvalidHandle(handle));
        }
        self.attributes
            .iter()
            .find(|attr| attr.handle == handle)
            .ok_or(ProfileError::InvalidHandle(handle))
    }

    /// Handle of the value attribute for a characteristic
    pub fn value_handle(&self, characteristic: Characteristic) -> Option<u16> {
        self.attributes.iter().find_map(|attr| match attr.value {
            AttributeValue::Characteristic(c) if c == characteristic => Some(attr.handle),
            _ => None,
        })
    }

    /// Handle of the client configuration attribute for a characteristic
    pub fn client_config_handle(&self, characteristic: Characteristic) -> Option<u16> {
        self.attributes.iter().find_map(|attr| match attr.value {
            AttributeValue::ClientConfig(c) if c == characteristic => Some(attr.handle),
            _ => None,
        })
    }

    /// Read the value of an attribute whose content is owned by the table.
    ///
    /// Service declarations, characteristic declarations and user descriptions
    /// are served by the transport from here; characteristic values and client
    /// configuration go through the profile dispatchers and yield `None`.
    pub fn static_value(&self, attr: &Attribute) -> Option<Vec<u8>> {
        match &attr.value {
            AttributeValue::Service(uuid) => Some(uuid.as_bytes()),
            AttributeValue::Declaration {
                properties,
                characteristic,
            } => {
                let value_handle = self.value_handle(*characteristic).unwrap_or(0);
                let uuid = characteristic.uuid();
                let mut value = Vec::with_capacity(3 + uuid.len());
                value.push(properties.bits());
                let mut handle = [0u8; 2];
                LittleEndian::write_u16(&mut handle, value_handle);
                value.extend_from_slice(&handle);
                value.extend_from_slice(&uuid.as_bytes());
                Some(value)
            }
            AttributeValue::Description(text) => Some(text.to_vec()),
            AttributeValue::Characteristic(_) | AttributeValue::ClientConfig(_) => None,
        }
    }
}

/// Assign consecutive handles starting at `first` to a registered block of
/// attributes, returning the last handle used.
///
/// Transports call this from
/// [`GattTransport::register_service`](crate::gatt::GattTransport::register_service).
pub fn assign_handles(attributes: &mut [Attribute], first: u16) -> ProfileResult<u16> {
    if first < ATT_HANDLE_MIN {
        return Err(ProfileError::InvalidHandle(first));
    }
    let count = u16::try_from(attributes.len()).map_err(|_| ProfileError::InsufficientResources)?;
    let last = first
        .checked_add(count.saturating_sub(1))
        .ok_or(ProfileError::InsufficientResources)?;
    for (handle, attr) in (first..=last).zip(attributes.iter_mut()) {
        attr.handle = handle;
    }
    Ok(last)
}

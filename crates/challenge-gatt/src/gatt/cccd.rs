//! Per-connection client characteristic configuration
use crate::att::constants::*;
use crate::error::{ProfileError, ProfileResult};
use bitflags::bitflags;
use byteorder::{ByteOrder, LittleEndian};
use log::{debug, warn};

bitflags! {
    /// Client characteristic configuration value
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ClientConfig: u16 {
        const NOTIFY = GATT_CLIENT_CFG_NOTIFY;
        const INDICATE = GATT_CLIENT_CFG_INDICATE;
    }
}

impl ClientConfig {
    pub fn to_bytes(&self) -> [u8; CLIENT_CHAR_CONFIG_LEN] {
        self.bits().to_le_bytes()
    }
}

/// One slot of the configuration table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientConfigEntry {
    /// Connection owning this slot, or `INVALID_CONN_HANDLE` when free
    pub conn_handle: u16,
    pub value: ClientConfig,
}

impl ClientConfigEntry {
    const FREE: ClientConfigEntry = ClientConfigEntry {
        conn_handle: INVALID_CONN_HANDLE,
        value: ClientConfig::empty(),
    };

    pub fn is_free(&self) -> bool {
        self.conn_handle == INVALID_CONN_HANDLE
    }
}

/// Client configuration table with one slot per supported connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfigTable {
    entries: Vec<ClientConfigEntry>,
}

impl ClientConfigTable {
    /// Allocate a table for `max_connections` concurrent links, all slots free
    pub fn new(max_connections: usize) -> ProfileResult<Self> {
        if max_connections == 0 {
            return Err(ProfileError::AllocationFailure);
        }
        let mut entries = Vec::new();
        entries
            .try_reserve_exact(max_connections)
            .map_err(|_| ProfileError::AllocationFailure)?;
        entries.resize(max_connections, ClientConfigEntry::FREE);
        Ok(Self { entries })
    }

    /// Number of connection slots
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[ClientConfigEntry] {
        &self.entries
    }

    /// Configuration for a connection; empty when it has no slot
    pub fn get(&self, conn_handle: u16) -> ClientConfig {
        self.entries
            .iter()
            .find(|entry| !entry.is_free() && entry.conn_handle == conn_handle)
            .map(|entry| entry.value)
            .unwrap_or_default()
    }

    /// Store a configuration for a connection.
    ///
    /// An empty configuration releases the connection's slot.
    pub fn set(&mut self, conn_handle: u16, value: ClientConfig) -> ProfileResult<()> {
        if conn_handle == INVALID_CONN_HANDLE {
            return Err(ProfileError::InsufficientResources);
        }

        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.conn_handle == conn_handle)
        {
            if value.is_empty() {
                *entry = ClientConfigEntry::FREE;
            } else {
                entry.value = value;
            }
            return Ok(());
        }

        if value.is_empty() {
            return Ok(());
        }

        match self.entries.iter_mut().find(|entry| entry.is_free()) {
            Some(entry) => {
                entry.conn_handle = conn_handle;
                entry.value = value;
                Ok(())
            }
            None => {
                warn!("No free client configuration slot for connection {:#06x}", conn_handle);
                Err(ProfileError::InsufficientResources)
            }
        }
    }

    /// Validate and apply a client configuration write.
    ///
    /// Only the values "off" and `allowed` are accepted.
    pub fn process_write(
        &mut self,
        conn_handle: u16,
        value: &[u8],
        offset: u16,
        allowed: ClientConfig,
    ) -> ProfileResult<ClientConfig> {
        if offset != 0 {
            return Err(ProfileError::AttributeNotLong);
        }
        if value.len() != CLIENT_CHAR_CONFIG_LEN {
            return Err(ProfileError::InvalidValueSize);
        }

        let raw = LittleEndian::read_u16(value);
        if raw != GATT_CFG_NO_OPERATION && raw != allowed.bits() {
            return Err(ProfileError::ImproperConfiguration(raw));
        }

        let config = ClientConfig::from_bits_truncate(raw);
        self.set(conn_handle, config)?;
        debug!("Connection {:#06x} client configuration set to {:?}", conn_handle, config);
        Ok(config)
    }

    /// Free the slot held by a terminated connection
    pub fn connection_terminated(&mut self, conn_handle: u16) {
        for entry in self
            .entries
            .iter_mut()
            .filter(|entry| entry.conn_handle == conn_handle)
        {
            *entry = ClientConfigEntry::FREE;
        }
    }

    /// Free every slot
    pub fn reset(&mut self) {
        self.entries.fill(ClientConfigEntry::FREE);
    }

    /// Connections that enabled all of `flags`
    pub fn subscribers(&self, flags: ClientConfig) -> impl Iterator<Item = u16> + '_ {
        self.entries
            .iter()
            .filter(move |entry| !entry.is_free() && entry.value.contains(flags))
            .map(|entry| entry.conn_handle)
    }
}

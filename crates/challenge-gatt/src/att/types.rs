//! Type definitions shared by the attribute table and the dispatchers
use super::constants::*;
use bitflags::bitflags;

bitflags! {
    /// ATT permission flags attached to each attribute
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AttPermissions: u8 {
        const READ = ATT_PERM_READ;
        const WRITE = ATT_PERM_WRITE;
        const AUTHEN_READ = ATT_PERM_AUTHEN_READ;
        const AUTHEN_WRITE = ATT_PERM_AUTHEN_WRITE;
        const AUTHOR_WRITE = ATT_PERM_AUTHOR_WRITE;
        const ENCRYPT_READ = ATT_PERM_ENCRYPT_READ;
        const ENCRYPT_WRITE = ATT_PERM_ENCRYPT_WRITE;
    }
}

impl AttPermissions {
    /// Create read-only permissions
    pub const fn read_only() -> Self {
        Self::READ
    }

    /// Create read-write permissions
    pub const fn read_write() -> Self {
        Self::READ.union(Self::WRITE)
    }

    pub fn can_read(&self) -> bool {
        self.intersects(Self::READ | Self::AUTHEN_READ | Self::ENCRYPT_READ)
    }

    pub fn can_write(&self) -> bool {
        self.intersects(Self::WRITE | Self::AUTHEN_WRITE | Self::AUTHOR_WRITE | Self::ENCRYPT_WRITE)
    }
}

bitflags! {
    /// Characteristic properties as carried in a characteristic declaration
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CharacteristicProperties: u8 {
        const BROADCAST = 0x01;
        const READ = 0x02;
        const WRITE_WITHOUT_RESPONSE = 0x04;
        const WRITE = 0x08;
        const NOTIFY = 0x10;
        const INDICATE = 0x20;
        const AUTHENTICATED_SIGNED_WRITES = 0x40;
        const EXTENDED_PROPERTIES = 0x80;
    }
}

impl CharacteristicProperties {
    pub fn can_notify(&self) -> bool {
        self.contains(Self::NOTIFY)
    }
}

/// ATT procedure that caused a dispatcher to be invoked.
///
/// The profile does not interpret it; it is forwarded for logging and so the
/// transport can tell a notification read apart from a client read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMethod {
    Read,
    ReadBlob,
    ReadByType,
    ReadMultiple,
    Write,
    WriteCommand,
    PrepareWrite,
    Notification,
}

use std::fmt;

/// Attribute type of an entry in the attribute table.
///
/// The profile only declares 16-bit UUIDs, but the transport may hand the
/// dispatchers any attribute, so 128-bit types are representable as well.
/// 128-bit values are stored in little-endian byte order, as they appear on air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Uuid {
    /// 16-bit SIG or vendor assigned UUID
    Uuid16(u16),
    /// Full 128-bit UUID (little-endian)
    Uuid128([u8; 16]),
}

impl Uuid {
    /// Convert raw little-endian bytes to a UUID based on length
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match bytes.len() {
            2 => Some(Uuid::Uuid16(u16::from_le_bytes([bytes[0], bytes[1]]))),
            16 => {
                let mut uuid = [0u8; 16];
                uuid.copy_from_slice(bytes);
                Some(Uuid::Uuid128(uuid))
            }
            _ => None,
        }
    }

    /// Create a UUID from a 16-bit value
    pub const fn from_u16(uuid: u16) -> Self {
        Uuid::Uuid16(uuid)
    }

    /// Create a UUID from a 128-bit value
    pub const fn from_u128(uuid: u128) -> Self {
        Uuid::Uuid128(uuid.to_le_bytes())
    }

    /// Number of bytes this UUID occupies on the wire
    pub fn len(&self) -> usize {
        match self {
            Uuid::Uuid16(_) => 2,
            Uuid::Uuid128(_) => 16,
        }
    }

    /// Get the little-endian bytes representation of this UUID
    pub fn as_bytes(&self) -> Vec<u8> {
        match self {
            Uuid::Uuid16(uuid) => uuid.to_le_bytes().to_vec(),
            Uuid::Uuid128(uuid) => uuid.to_vec(),
        }
    }

    /// Get the 16-bit UUID value if this is a 16-bit UUID
    pub fn as_u16(&self) -> Option<u16> {
        match self {
            Uuid::Uuid16(uuid) => Some(*uuid),
            Uuid::Uuid128(_) => None,
        }
    }
}

impl From<u16> for Uuid {
    fn from(uuid16: u16) -> Self {
        Uuid::Uuid16(uuid16)
    }
}

impl PartialEq<u16> for Uuid {
    fn eq(&self, other: &u16) -> bool {
        self.as_u16() == Some(*other)
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Uuid::Uuid16(uuid) => write!(f, "{:04x}", uuid),
            Uuid::Uuid128(uuid) => {
                let mut b = *uuid;
                b.reverse();
                write!(
                    f,
                    "{}-{}-{}-{}-{}",
                    hex::encode(&b[0..4]),
                    hex::encode(&b[4..6]),
                    hex::encode(&b[6..8]),
                    hex::encode(&b[8..10]),
                    hex::encode(&b[10..16])
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_from_bytes() {
        assert_eq!(Uuid::from_bytes(&[0xF0, 0xFF]), Some(Uuid::Uuid16(0xFFF0)));
        assert_eq!(Uuid::from_bytes(&[0u8; 16]), Some(Uuid::Uuid128([0u8; 16])));
        assert_eq!(Uuid::from_bytes(&[0u8; 4]), None);
    }

    #[test]
    fn test_uuid_display() {
        let short = Uuid::from_u16(0xFFF1);
        assert_eq!(short.to_string(), "fff1");
        assert_eq!(short.len(), 2);

        let long = Uuid::from_u128(0x0000fff0_0000_1000_8000_00805f9b34fb);
        assert_eq!(long.to_string(), "0000fff0-0000-1000-8000-00805f9b34fb");
        assert_eq!(long.len(), 16);
        assert_eq!(long.as_u16(), None);
    }
}

//! ATT and GATT constants used by the challenge profile

// ATT error codes
pub const ATT_ERROR_INVALID_HANDLE: u8 = 0x01;
pub const ATT_ERROR_READ_NOT_PERMITTED: u8 = 0x02;
pub const ATT_ERROR_WRITE_NOT_PERMITTED: u8 = 0x03;
pub const ATT_ERROR_ATTRIBUTE_NOT_FOUND: u8 = 0x0A;
pub const ATT_ERROR_ATTRIBUTE_NOT_LONG: u8 = 0x0B;
pub const ATT_ERROR_INVALID_ATTRIBUTE_VALUE_LENGTH: u8 = 0x0D;
pub const ATT_ERROR_UNLIKELY: u8 = 0x0E;
pub const ATT_ERROR_INSUFFICIENT_RESOURCES: u8 = 0x11;
pub const ATT_ERROR_IMPROPER_CONFIGURATION: u8 = 0x80;

// Host status codes for accessor calls
pub const HOST_STATUS_INVALID_PARAMETER: u8 = 0x02;
pub const HOST_STATUS_MEM_ALLOC_ERROR: u8 = 0x13;
pub const HOST_STATUS_INVALID_RANGE: u8 = 0x18;

// ATT attribute permission flags
pub const ATT_PERM_READ: u8 = 0x01;
pub const ATT_PERM_WRITE: u8 = 0x02;
pub const ATT_PERM_AUTHEN_READ: u8 = 0x04;
pub const ATT_PERM_AUTHEN_WRITE: u8 = 0x08;
pub const ATT_PERM_AUTHOR_WRITE: u8 = 0x10;
pub const ATT_PERM_ENCRYPT_READ: u8 = 0x20;
pub const ATT_PERM_ENCRYPT_WRITE: u8 = 0x40;

// ATT MTU
pub const ATT_DEFAULT_MTU: u16 = 23;

// Opcode (1) + handle (2)
pub const ATT_NOTIFICATION_HEADER_SIZE: usize = 3;

// ATT handle values
pub const ATT_HANDLE_MIN: u16 = 0x0001;
pub const INVALID_CONN_HANDLE: u16 = 0xFFFF;

// Encryption key size bounds
pub const GATT_MIN_ENCRYPT_KEY_SIZE: u8 = 7;
pub const GATT_MAX_ENCRYPT_KEY_SIZE: u8 = 16;

// GATT declaration and descriptor UUIDs
pub const PRIMARY_SERVICE_UUID: u16 = 0x2800;
pub const CHARACTERISTIC_UUID: u16 = 0x2803;
pub const CHAR_USER_DESC_UUID: u16 = 0x2901;
pub const CLIENT_CHAR_CONFIG_UUID: u16 = 0x2902;

// Client characteristic configuration values
pub const GATT_CFG_NO_OPERATION: u16 = 0x0000;
pub const GATT_CLIENT_CFG_NOTIFY: u16 = 0x0001;
pub const GATT_CLIENT_CFG_INDICATE: u16 = 0x0002;
pub const CLIENT_CHAR_CONFIG_LEN: usize = 2;

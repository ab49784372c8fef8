//! Capabilities the profile consumes from its surroundings
use crate::att::Attribute;
use crate::error::ProfileResult;
use crate::profile::Characteristic;

/// The GATT/ATT transport hosting the profile.
///
/// The transport owns link management, MTU negotiation, security and PDU
/// encoding. It routes reads and writes addressed to registered handles back
/// into the profile dispatchers.
pub trait GattTransport {
    /// Register an attribute list, assigning a handle to every record in place
    fn register_service(
        &mut self,
        attributes: &mut [Attribute],
        min_encryption_key_size: u8,
    ) -> ProfileResult<()>;

    /// Send a Handle Value Notification to one connection
    fn send_notification(&mut self, conn_handle: u16, handle: u16, value: &[u8])
        -> ProfileResult<()>;

    /// Negotiated ATT_MTU for a connection, if the transport tracks it
    fn mtu(&self, _conn_handle: u16) -> Option<u16> {
        None
    }
}

/// Application hooks invoked by the profile.
///
/// Called synchronously from the write path; implementations must not block
/// or call back into the profile's write dispatcher.
pub trait ProfileCallbacks {
    /// A characteristic value was changed by a remote client
    fn on_parameter_changed(&mut self, characteristic: Characteristic);
}

impl<F> ProfileCallbacks for F
where
    F: FnMut(Characteristic),
{
    fn on_parameter_changed(&mut self, characteristic: Characteristic) {
        self(characteristic)
    }
}

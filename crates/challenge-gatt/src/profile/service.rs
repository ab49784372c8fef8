//! Challenge service object
//!
//! Owns the attribute table, the characteristic buffers and the client
//! configuration table, and mediates between the transport and the
//! application. Every entry point runs to completion without blocking.

use super::characteristic::*;
use super::config::{ProfileConfig, ServiceMask};
use super::store::ParameterStore;
use crate::att::{
    AccessMethod, Attribute, AttributeTable, AttributeValue, ATT_NOTIFICATION_HEADER_SIZE,
    CLIENT_CHAR_CONFIG_UUID, GATT_MAX_ENCRYPT_KEY_SIZE, GATT_MIN_ENCRYPT_KEY_SIZE,
};
use crate::error::{ProfileError, ProfileResult};
use crate::gatt::{ClientConfig, ClientConfigTable, GattTransport, ProfileCallbacks};
use crate::uuid::Uuid;
use log::{debug, trace, warn};

/// Build the attribute table of the challenge service.
///
/// Layout: service declaration, then declaration/value/description for
/// UserChallenge and ServerResponse, then declaration/value/client
/// configuration/description for ResponseReady.
pub fn attribute_table() -> AttributeTable {
    let mut attributes = vec![Attribute::service(Uuid::from_u16(CHALLENGE_SERVICE_UUID))];

    for characteristic in Characteristic::ALL {
        attributes.push(Attribute::declaration(characteristic));
        attributes.push(Attribute::value(characteristic));
        if characteristic.properties().can_notify() {
            attributes.push(Attribute::client_config(characteristic));
        }
        attributes.push(Attribute::description(characteristic));
    }

    AttributeTable::new(attributes)
}

/// The challenge/response GATT service
pub struct ChallengeProfile<T: GattTransport> {
    config: ProfileConfig,
    transport: T,
    table: AttributeTable,
    store: ParameterStore,
    client_config: Option<ClientConfigTable>,
    callbacks: Option<Box<dyn ProfileCallbacks>>,
}

impl<T: GattTransport> ChallengeProfile<T> {
    /// Create a profile with the default configuration
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, ProfileConfig::default())
    }

    pub fn with_config(transport: T, config: ProfileConfig) -> Self {
        Self {
            config,
            transport,
            table: attribute_table(),
            store: ParameterStore::new(),
            client_config: None,
            callbacks: None,
        }
    }

    /// Builder form of [`register_callbacks`](Self::register_callbacks)
    pub fn with_callbacks<C: ProfileCallbacks + 'static>(mut self, callbacks: C) -> Self {
        self.register_callbacks(callbacks);
        self
    }

    /// Register the application callbacks, replacing any previous registration
    pub fn register_callbacks<C: ProfileCallbacks + 'static>(&mut self, callbacks: C) {
        if self.callbacks.is_some() {
            debug!("Replacing registered application callbacks");
        }
        self.callbacks = Some(Box::new(callbacks));
    }

    /// Allocate the client configuration table and, if requested in
    /// `services`, register the attribute table with the transport.
    ///
    /// Both happen once. Repeated calls keep the live configuration table and
    /// the assigned handles.
    pub fn add_service(&mut self, services: ServiceMask) -> ProfileResult<()> {
        let key_size = self.config.min_encryption_key_size;
        if !(GATT_MIN_ENCRYPT_KEY_SIZE..=GATT_MAX_ENCRYPT_KEY_SIZE).contains(&key_size) {
            warn!("Encryption key size {} out of range", key_size);
            return Err(ProfileError::InvalidRange);
        }

        if self.client_config.is_none() {
            self.client_config = Some(ClientConfigTable::new(self.config.max_connections)?);
        }

        if !services.contains(ServiceMask::CHALLENGE_SERVICE) {
            debug!("Challenge service not requested, skipping registration");
            return Ok(());
        }
        if self.table.is_registered() {
            debug!("Challenge service already registered");
            return Ok(());
        }

        self.transport
            .register_service(self.table.attributes_mut(), key_size)?;

        debug!(
            "Registered challenge service with {} attributes, handles {:?}",
            self.table.len(),
            self.table.iter().map(|attr| attr.handle).collect::<Vec<_>>()
        );
        Ok(())
    }

    /// Read dispatcher.
    ///
    /// Copies `min(len - offset, max_len)` bytes of the addressed
    /// characteristic into `out` and returns the number of bytes written.
    /// Reads at or past the end of the value return zero bytes.
    pub fn read_attribute(
        &self,
        conn_handle: u16,
        attr: &Attribute,
        out: &mut [u8],
        offset: u16,
        max_len: u16,
        method: AccessMethod,
    ) -> ProfileResult<usize> {
        let uuid = match attr.type_ {
            Uuid::Uuid16(uuid) => uuid,
            Uuid::Uuid128(_) => return Err(ProfileError::InvalidHandle(attr.handle)),
        };
        let characteristic =
            Characteristic::from_uuid16(uuid).ok_or(ProfileError::AttributeNotFound)?;

        let value = self.store.get(characteristic);
        let offset = (offset as usize).min(value.len());
        let len = (value.len() - offset)
            .min(max_len as usize)
            .min(out.len());
        out[..len].copy_from_slice(&value[offset..offset + len]);

        trace!(
            "Read {} by connection {:#06x} ({:?}): offset {}, {} bytes",
            characteristic,
            conn_handle,
            method,
            offset,
            len
        );
        Ok(len)
    }

    /// Write dispatcher.
    ///
    /// On success the registered application callback is invoked with the
    /// characteristic that changed before control returns to the transport.
    pub fn write_attribute(
        &mut self,
        conn_handle: u16,
        attr: &Attribute,
        value: &[u8],
        offset: u16,
        method: AccessMethod,
    ) -> ProfileResult<()> {
        let changed = self
            .dispatch_write(conn_handle, attr, value, offset)
            .map_err(|err| {
                warn!(
                    "Rejected write to {} by connection {:#06x} ({:?}): {}",
                    attr.type_, conn_handle, method, err
                );
                err
            })?;

        if let Some(characteristic) = changed {
            debug!(
                "{} written by connection {:#06x}: {}",
                characteristic,
                conn_handle,
                hex::encode(value)
            );
            if let Some(callbacks) = self.callbacks.as_mut() {
                callbacks.on_parameter_changed(characteristic);
            }
        }
        Ok(())
    }

    fn dispatch_write(
        &mut self,
        conn_handle: u16,
        attr: &Attribute,
        value: &[u8],
        offset: u16,
    ) -> ProfileResult<Option<Characteristic>> {
        let uuid = match attr.type_ {
            Uuid::Uuid16(uuid) => uuid,
            Uuid::Uuid128(_) => return Err(ProfileError::InvalidHandle(attr.handle)),
        };

        match uuid {
            USER_CHALLENGE_UUID => {
                // No long writes; a short write replaces only the leading bytes
                if offset != 0 || value.len() > USER_CHALLENGE_LEN {
                    return Err(ProfileError::InvalidValueSize);
                }
                self.store.write_prefix(Characteristic::UserChallenge, value);
                Ok(Some(Characteristic::UserChallenge))
            }
            RESPONSE_READY_UUID => {
                if offset != 0 || value.len() != RESPONSE_READY_LEN {
                    return Err(ProfileError::InvalidValueSize);
                }
                self.store.write_prefix(Characteristic::ResponseReady, value);
                Ok(Some(Characteristic::ResponseReady))
            }
            CLIENT_CHAR_CONFIG_UUID => {
                let table = self
                    .client_config
                    .as_mut()
                    .ok_or(ProfileError::AttributeNotFound)?;
                table.process_write(conn_handle, value, offset, ClientConfig::NOTIFY)?;
                Ok(None)
            }
            _ => Err(ProfileError::AttributeNotFound),
        }
    }

    /// Read an attribute of this service by handle.
    ///
    /// Serves the fixed declaration and description values from the table,
    /// the connection's client configuration, and characteristic values
    /// through the read dispatcher.
    pub fn read_by_handle(
        &self,
        conn_handle: u16,
        handle: u16,
        offset: u16,
        max_len: u16,
    ) -> ProfileResult<Vec<u8>> {
        let attr = self.table.get(handle)?;
        if !attr.permissions.can_read() {
            return Err(ProfileError::ReadNotPermitted);
        }

        match &attr.value {
            AttributeValue::Characteristic(characteristic) => {
                let mut out = vec![0u8; characteristic.value_len()];
                let len = self.read_attribute(
                    conn_handle,
                    attr,
                    &mut out,
                    offset,
                    max_len,
                    AccessMethod::Read,
                )?;
                out.truncate(len);
                Ok(out)
            }
            AttributeValue::ClientConfig(_) => {
                let value = self.read_client_config(conn_handle);
                Ok(clamp(&value, offset, max_len))
            }
            _ => {
                let value = self
                    .table
                    .static_value(attr)
                    .ok_or(ProfileError::AttributeNotFound)?;
                Ok(clamp(&value, offset, max_len))
            }
        }
    }

    /// Write an attribute of this service by handle
    pub fn write_by_handle(
        &mut self,
        conn_handle: u16,
        handle: u16,
        value: &[u8],
        offset: u16,
        method: AccessMethod,
    ) -> ProfileResult<()> {
        let attr = self.table.get(handle)?.clone();
        if !attr.permissions.can_write() {
            return Err(ProfileError::WriteNotPermitted);
        }
        self.write_attribute(conn_handle, &attr, value, offset, method)
    }

    /// Update a characteristic from the application.
    ///
    /// `value` must have exactly the characteristic's length. Setting
    /// ResponseReady also notifies every connection that enabled notifications.
    pub fn set_parameter(&mut self, param_id: u8, value: &[u8]) -> ProfileResult<()> {
        let characteristic = Characteristic::try_from(param_id)?;
        if value.len() != characteristic.value_len() {
            return Err(ProfileError::InvalidRange);
        }

        self.store.get_mut(characteristic).copy_from_slice(value);
        debug!("{} set by application: {}", characteristic, hex::encode(value));

        if characteristic == Characteristic::ResponseReady {
            self.notify_subscribers(characteristic);
        }
        Ok(())
    }

    /// Copy the current value of a characteristic into `out`, returning its length
    pub fn get_parameter(&self, param_id: u8, out: &mut [u8]) -> ProfileResult<usize> {
        let characteristic = Characteristic::try_from(param_id)?;
        let value = self.store.get(characteristic);
        if out.len() < value.len() {
            return Err(ProfileError::InvalidRange);
        }
        out[..value.len()].copy_from_slice(value);
        Ok(value.len())
    }

    /// Publish a new handshake status
    pub fn set_response_status(&mut self, status: ResponseStatus) -> ProfileResult<()> {
        self.set_parameter(RESPONSE_READY_PARAM, &[status.as_byte()])
    }

    /// Current handshake status, if the stored byte is a known status
    pub fn response_status(&self) -> Option<ResponseStatus> {
        self.store.response_status()
    }

    /// Current value of a characteristic
    pub fn parameter(&self, characteristic: Characteristic) -> &[u8] {
        self.store.get(characteristic)
    }

    /// Client configuration value for a connection, as read over the air
    pub fn read_client_config(&self, conn_handle: u16) -> [u8; 2] {
        self.client_config
            .as_ref()
            .map(|table| table.get(conn_handle))
            .unwrap_or_default()
            .to_bytes()
    }

    /// Release the configuration held by a disconnected link
    pub fn connection_terminated(&mut self, conn_handle: u16) {
        if let Some(table) = self.client_config.as_mut() {
            table.connection_terminated(conn_handle);
            debug!("Connection {:#06x} terminated, configuration released", conn_handle);
        }
    }

    /// Push the current value of `characteristic` to every subscribed
    /// connection, returning how many notifications were handed to the transport
    fn notify_subscribers(&mut self, characteristic: Characteristic) -> usize {
        let Some(table) = self.client_config.as_ref() else {
            return 0;
        };
        let subscribers: Vec<u16> = table.subscribers(ClientConfig::NOTIFY).collect();
        if subscribers.is_empty() {
            return 0;
        }

        let Some(attr) = self
            .table
            .iter()
            .find(|attr| attr.value == AttributeValue::Characteristic(characteristic))
            .filter(|attr| attr.handle != 0)
            .cloned()
        else {
            warn!("{} has no handle, service not registered", characteristic);
            return 0;
        };

        let mut sent = 0;
        for conn_handle in subscribers {
            let mtu = self
                .transport
                .mtu(conn_handle)
                .unwrap_or(self.config.att_mtu);
            let max_len = (mtu as usize).saturating_sub(ATT_NOTIFICATION_HEADER_SIZE);
            let mut payload = vec![0u8; max_len];
            let result = match self.read_attribute(
                conn_handle,
                &attr,
                &mut payload,
                0,
                max_len as u16,
                AccessMethod::Notification,
            ) {
                Ok(len) => {
                    payload.truncate(len);
                    self.transport
                        .send_notification(conn_handle, attr.handle, &payload)
                }
                Err(err) => Err(err),
            };

            match result {
                Ok(()) => sent += 1,
                Err(err) => warn!(
                    "Notification of {} to connection {:#06x} failed: {}",
                    characteristic, conn_handle, err
                ),
            }
        }
        sent
    }

    pub fn config(&self) -> &ProfileConfig {
        &self.config
    }

    pub fn attribute_table(&self) -> &AttributeTable {
        &self.table
    }

    /// Client configuration table, allocated by [`add_service`](Self::add_service)
    pub fn client_config(&self) -> Option<&ClientConfigTable> {
        self.client_config.as_ref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}

fn clamp(value: &[u8], offset: u16, max_len: u16) -> Vec<u8> {
    let offset = (offset as usize).min(value.len());
    let len = (value.len() - offset).min(max_len as usize);
    value[offset..offset + len].to_vec()
}

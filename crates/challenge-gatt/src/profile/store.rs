use super::characteristic::*;

/// Current values of the three characteristics.
///
/// Buffers have the fixed characteristic lengths and are updated in place by
/// both remote writes and application calls; the last writer wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterStore {
    user_challenge: [u8; USER_CHALLENGE_LEN],
    server_response: [u8; SERVER_RESPONSE_LEN],
    response_ready: [u8; RESPONSE_READY_LEN],
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self {
            user_challenge: [0; USER_CHALLENGE_LEN],
            server_response: [0; SERVER_RESPONSE_LEN],
            response_ready: [0; RESPONSE_READY_LEN],
        }
    }
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full fixed-length buffer of a characteristic
    pub fn get(&self, characteristic: Characteristic) -> &[u8] {
        match characteristic {
            Characteristic::UserChallenge => &self.user_challenge,
            Characteristic::ServerResponse => &self.server_response,
            Characteristic::ResponseReady => &self.response_ready,
        }
    }

    pub fn get_mut(&mut self, characteristic: Characteristic) -> &mut [u8] {
        match characteristic {
            Characteristic::UserChallenge => &mut self.user_challenge,
            Characteristic::ServerResponse => &mut self.server_response,
            Characteristic::ResponseReady => &mut self.response_ready,
        }
    }

    /// Overwrite the leading `value.len()` bytes, leaving the remainder untouched.
    ///
    /// Callers validate the length; a value longer than the buffer is truncated.
    pub fn write_prefix(&mut self, characteristic: Characteristic, value: &[u8]) {
        let buffer = self.get_mut(characteristic);
        let len = value.len().min(buffer.len());
        buffer[..len].copy_from_slice(&value[..len]);
    }

    /// Current ResponseReady status, if the stored byte is a known status
    pub fn response_status(&self) -> Option<ResponseStatus> {
        ResponseStatus::try_from(self.response_ready[0]).ok()
    }
}

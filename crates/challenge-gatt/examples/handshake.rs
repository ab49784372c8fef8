//! Example driving a full challenge/response exchange
//!
//! A loopback transport stands in for the BLE stack: it assigns handles,
//! prints notifications and lets the example play the remote client.

use challenge_gatt::att::{assign_handles, AccessMethod, Attribute, ATT_DEFAULT_MTU};
use challenge_gatt::profile::{SERVER_RESPONSE_LEN, SERVER_RESPONSE_PARAM};
use challenge_gatt::{
    Characteristic, ChallengeProfile, GattTransport, ProfileResult, ResponseStatus, ServiceMask,
};
use rand::RngCore;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

const CLIENT: u16 = 0x0040;

/// In-memory transport delivering notifications to stdout
struct LoopbackTransport {
    next_handle: u16,
}

impl GattTransport for LoopbackTransport {
    fn register_service(
        &mut self,
        attributes: &mut [Attribute],
        min_encryption_key_size: u8,
    ) -> ProfileResult<()> {
        let last = assign_handles(attributes, self.next_handle)?;
        self.next_handle = last + 1;
        println!(
            "Registered {} attributes (min key size {})",
            attributes.len(),
            min_encryption_key_size
        );
        Ok(())
    }

    fn send_notification(
        &mut self,
        conn_handle: u16,
        handle: u16,
        value: &[u8],
    ) -> ProfileResult<()> {
        println!(
            "Notification to {:#06x} on handle {:#06x}: {}",
            conn_handle,
            handle,
            hex::encode(value)
        );
        Ok(())
    }
}

fn compute_response(challenge: &[u8]) -> Vec<u8> {
    // Stand-in for the device's signing operation
    let mut response = vec![0u8; SERVER_RESPONSE_LEN];
    for (i, byte) in response.iter_mut().enumerate() {
        *byte = challenge[i % challenge.len()] ^ (i as u8).wrapping_mul(0x9D);
    }
    response
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    // Changes are queued by the callback and handled outside the write path
    let events = Rc::new(RefCell::new(VecDeque::new()));
    let queue = events.clone();
    let mut profile = ChallengeProfile::new(LoopbackTransport { next_handle: 0x0020 })
        .with_callbacks(move |c: Characteristic| queue.borrow_mut().push_back(c));
    profile.add_service(ServiceMask::CHALLENGE_SERVICE)?;
    profile.set_response_status(ResponseStatus::WaitingForChallenge)?;

    let table = profile.attribute_table().clone();
    let challenge_handle = table.value_handle(Characteristic::UserChallenge).unwrap_or_default();
    let response_handle = table.value_handle(Characteristic::ServerResponse).unwrap_or_default();
    let status_handle = table.value_handle(Characteristic::ResponseReady).unwrap_or_default();
    let cccd_handle = table
        .client_config_handle(Characteristic::ResponseReady)
        .unwrap_or_default();

    // Client subscribes and writes a random challenge
    profile.write_by_handle(CLIENT, cccd_handle, &[0x01, 0x00], 0, AccessMethod::Write)?;
    let mut challenge = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut challenge);
    println!("Client challenge: {}", hex::encode(challenge));
    profile.write_by_handle(CLIENT, challenge_handle, &challenge, 0, AccessMethod::Write)?;

    // Application side
    loop {
        let next = events.borrow_mut().pop_front();
        let Some(changed) = next else { break };
        match changed {
            Characteristic::UserChallenge => {
                let response = compute_response(profile.parameter(Characteristic::UserChallenge));
                profile.set_parameter(SERVER_RESPONSE_PARAM, &response)?;
                profile.set_response_status(ResponseStatus::Ready)?;
            }
            Characteristic::ResponseReady => {
                println!("Client reported status {:?}", profile.response_status());
            }
            Characteristic::ServerResponse => {}
        }
    }

    // Client reads the response with blob reads bounded by the MTU
    let max_len = ATT_DEFAULT_MTU - 1;
    let mut response = Vec::new();
    loop {
        let offset = response.len() as u16;
        let chunk = profile.read_by_handle(CLIENT, response_handle, offset, max_len)?;
        if chunk.is_empty() {
            break;
        }
        response.extend_from_slice(&chunk);
    }
    println!("Client received response: {}", hex::encode(&response));
    assert_eq!(response, compute_response(&challenge));

    profile.write_by_handle(
        CLIENT,
        status_handle,
        &[ResponseStatus::Read.as_byte()],
        0,
        AccessMethod::Write,
    )?;
    let remaining: Vec<Characteristic> = events.borrow_mut().drain(..).collect();
    for changed in remaining {
        println!("Application saw change of {}: {:?}", changed, profile.response_status());
    }

    profile.connection_terminated(CLIENT);
    Ok(())
}

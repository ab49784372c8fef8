//! Unit tests for the attribute table

use super::*;
use crate::error::ProfileError;
use crate::profile::{attribute_table, Characteristic};
use crate::uuid::Uuid;

#[test]
fn test_table_layout() {
    let table = attribute_table();
    assert_eq!(table.len(), 11);

    let types: Vec<Uuid> = table.iter().map(|attr| attr.type_).collect();
    assert_eq!(
        types,
        vec![
            Uuid::from_u16(PRIMARY_SERVICE_UUID),
            Uuid::from_u16(CHARACTERISTIC_UUID),
            Uuid::from_u16(0xFFF1),
            Uuid::from_u16(CHAR_USER_DESC_UUID),
            Uuid::from_u16(CHARACTERISTIC_UUID),
            Uuid::from_u16(0xFFF2),
            Uuid::from_u16(CHAR_USER_DESC_UUID),
            Uuid::from_u16(CHARACTERISTIC_UUID),
            Uuid::from_u16(0xFFF3),
            Uuid::from_u16(CLIENT_CHAR_CONFIG_UUID),
            Uuid::from_u16(CHAR_USER_DESC_UUID),
        ]
    );

    // Nothing is addressable before registration
    assert!(!table.is_registered());
    assert_eq!(table.get(1), Err(ProfileError::InvalidHandle(1)));
}

#[test]
fn test_permissions() {
    let table = attribute_table();
    let perms: Vec<AttPermissions> = table.iter().map(|attr| attr.permissions).collect();

    assert_eq!(perms[2], AttPermissions::read_write());
    assert_eq!(perms[5], AttPermissions::read_only());
    assert!(!perms[5].can_write());
    assert_eq!(perms[8], AttPermissions::read_write());
    assert_eq!(perms[9], AttPermissions::read_write());
    // Declarations and descriptions are read-only
    for index in [0, 1, 3, 4, 6, 7, 10] {
        assert!(perms[index].can_read());
        assert!(!perms[index].can_write());
    }
}

#[test]
fn test_assign_handles() {
    let mut table = attribute_table();
    let last = table.assign_handles(0x0020).unwrap();
    assert_eq!(last, 0x002A);
    assert!(table.is_registered());

    assert_eq!(table.value_handle(Characteristic::UserChallenge), Some(0x0022));
    assert_eq!(table.value_handle(Characteristic::ServerResponse), Some(0x0025));
    assert_eq!(table.value_handle(Characteristic::ResponseReady), Some(0x0028));
    assert_eq!(table.client_config_handle(Characteristic::ResponseReady), Some(0x0029));
    assert_eq!(table.client_config_handle(Characteristic::UserChallenge), None);

    assert_eq!(table.get(0x0028).unwrap().type_, Uuid::from_u16(0xFFF3));
    assert_eq!(table.get(0x0030), Err(ProfileError::InvalidHandle(0x0030)));

    assert_eq!(table.assign_handles(0), Err(ProfileError::InvalidHandle(0)));
    assert_eq!(
        table.assign_handles(0xFFFA),
        Err(ProfileError::InsufficientResources)
    );
}

#[test]
fn test_static_values() {
    let mut table = attribute_table();
    table.assign_handles(1).unwrap();

    let service = table.get(1).unwrap();
    assert_eq!(table.static_value(service), Some(vec![0xF0, 0xFF]));

    // properties | value handle | uuid
    let declaration = table.get(2).unwrap();
    assert_eq!(table.static_value(declaration), Some(vec![0x0A, 0x03, 0x00, 0xF1, 0xFF]));
    let declaration = table.get(8).unwrap();
    assert_eq!(table.static_value(declaration), Some(vec![0x1A, 0x09, 0x00, 0xF3, 0xFF]));

    let description = table.get(4).unwrap();
    assert_eq!(table.static_value(description), Some(b"User Challenge\0".to_vec()));

    // Characteristic values and configuration are not owned by the table
    assert_eq!(table.static_value(table.get(3).unwrap()), None);
    assert_eq!(table.static_value(table.get(10).unwrap()), None);
}

#[test]
fn test_declaration_handle_is_little_endian() {
    let mut table = attribute_table();
    table.assign_handles(0x1234).unwrap();
    let declaration = table.get(0x1235).unwrap();
    assert_eq!(
        table.static_value(declaration),
        Some(vec![0x0A, 0x36, 0x12, 0xF1, 0xFF])
    );
}

#[test]
fn test_assign_handles_to_slice() {
    let mut table = attribute_table();
    let last = assign_handles(table.attributes_mut(), 0x0100).unwrap();
    assert_eq!(last, 0x010A);
    assert!(table.is_registered());
    assert_eq!(table.value_handle(Characteristic::ResponseReady), Some(0x0108));

    let mut empty: Vec<Attribute> = Vec::new();
    assert_eq!(assign_handles(&mut empty, 0x0001), Ok(0x0001));
}

#[test]
fn test_characteristic_properties() {
    assert!(Characteristic::ResponseReady.properties().can_notify());
    assert!(!Characteristic::ResponseReady
        .properties()
        .contains(CharacteristicProperties::INDICATE));
    assert!(!Characteristic::UserChallenge.properties().can_notify());
    assert_eq!(
        Characteristic::ServerResponse.properties(),
        CharacteristicProperties::READ
    );
}

#![cfg(feature = "serde")]

use dis::enums::MinefieldAppearance;
use dis::pdus::{AnyPdu, CreateEntity, EntityState, Fire, MinefieldState};
use dis::protocol::{CodecConfig, PduType, ProtocolFamily};
use dis::records::{EntityId, Marking};
use dis::Pdu;

#[test]
fn test_entity_state_json() {
    let mut pdu = Pdu::new(EntityState {
        entity_id: EntityId::new(1, 2, 3),
        marking: Marking::new("JSON"),
        ..EntityState::default()
    });
    pdu.encode().unwrap();

    let json = serde_json::to_string(&pdu).unwrap();
    let back: Pdu<EntityState> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pdu);
    assert_eq!(back.header().length(), 144);
}

#[test]
fn test_json_header_type_follows_body() {
    let mut pdu = Pdu::new(Fire {
        fire_mission_index: 7,
        ..Fire::default()
    });
    pdu.encode().unwrap();

    let mut json = serde_json::to_value(&pdu).unwrap();
    json["header"]["pdu_type"] = 1.into();
    json["header"]["protocol_family"] = 5.into();

    let back: Pdu<Fire> = serde_json::from_value(json).unwrap();
    assert_eq!(back.header().pdu_type(), Some(PduType::Fire));
    assert_eq!(back.header().protocol_family(), Some(ProtocolFamily::Warfare));
    assert_eq!(back, pdu);

    let encoded = back.clone().encode().unwrap();
    assert_eq!(encoded[2], PduType::Fire.as_u8());
}

#[test]
fn test_any_pdu_json() {
    let pdu = AnyPdu::from(Pdu::new(MinefieldState {
        appearance: MinefieldAppearance::from_bits(0x2001),
        ..MinefieldState::default()
    }));

    let json = serde_json::to_value(&pdu).unwrap();
    assert!(json.get("MinefieldState").is_some());
    let back: AnyPdu = serde_json::from_value(json).unwrap();
    assert_eq!(back, pdu);

    let other = AnyPdu::from(Pdu::new(CreateEntity::default()));
    assert_ne!(serde_json::to_value(&other).unwrap(), serde_json::to_value(&pdu).unwrap());
}

#[test]
fn test_codec_config_json() {
    let config = CodecConfig::propagating();
    let json = serde_json::to_string(&config).unwrap();
    let back: CodecConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

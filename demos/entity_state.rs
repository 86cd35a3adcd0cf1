//! Build, encode and decode an Entity State PDU

use dis::enums::{DamageValue, LandPlatformAppearance};
use dis::pdus::EntityState;
use dis::protocol::{DisTimestamp, TimestampKind, reflect};
use dis::records::{EntityId, EntityType, Marking, Vector3Double, Vector3Float};
use dis::{Pdu, Structural, decode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("DIS Entity State Example");
    println!("========================\n");

    let mut appearance = LandPlatformAppearance::default();
    appearance.set_damage(DamageValue::SlightDamage.into());

    let mut pdu = Pdu::new(EntityState {
        entity_id: EntityId::new(1, 3, 101),
        force_id: 1,
        entity_type: EntityType {
            entity_kind: 1,
            domain: 1,
            country: 225,
            category: 1,
            ..EntityType::default()
        },
        entity_linear_velocity: Vector3Float::new(4.0, 0.5, 0.0),
        entity_location: Vector3Double::new(-2_707_000.0, -4_353_000.0, 3_781_000.0),
        entity_appearance: appearance.to_u32(),
        marking: Marking::new("M1A2-01"),
        ..EntityState::default()
    });
    pdu.header_mut().set_exercise_id(1);
    pdu.header_mut()
        .set_timestamp(DisTimestamp::now(TimestampKind::Absolute).raw());

    // Encode with the header length filled in
    let encoded = pdu.encode()?;
    println!("Encoded to {} bytes (header length {})", encoded.len(), pdu.header().length());

    // Decode
    let decoded: Pdu<EntityState> = decode(&encoded)?;
    println!("Decoded marking: {}", decoded.body.marking);
    println!("Equal after round trip: {}", decoded == pdu);
    println!("Fingerprint: {:#018x}\n", decoded.fingerprint());

    println!("{}", reflect("entity_state", &decoded));

    Ok(())
}

//! Entity management family

use crate::dis_record;
use crate::records::{EntityId, EntityType, NamedLocation, Relationship, Vector3Float};

dis_record! {
    /// Joins one entity to another as a part
    pub struct IsPartOf: IsPartOf {
        /// Host entity
        originating_entity_id: EntityId,
        /// Part entity
        receiving_entity_id: EntityId,
        /// Nature and position of the attachment
        relationship: Relationship,
        /// Part location in host coordinates
        part_location: Vector3Float,
        /// Station the part occupies
        named_location_id: NamedLocation,
        /// Type of the part
        part_entity_type: EntityType,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{Marshal, Pdu, PduHeader, PduType, ProtocolFamily, decode};

    #[test]
    fn test_is_part_of() {
        let mut pdu = Pdu::new(IsPartOf {
            originating_entity_id: EntityId::new(1, 1, 10),
            receiving_entity_id: EntityId::new(1, 1, 11),
            part_location: Vector3Float::new(0.0, 1.5, -2.0),
            ..IsPartOf::default()
        });
        assert_eq!(pdu.marshalled_size(), 52);

        let bytes = pdu.encode().unwrap();
        let header = PduHeader::peek(&bytes).unwrap();
        assert_eq!(header.pdu_type(), Some(PduType::IsPartOf));
        assert_eq!(header.protocol_family(), Some(ProtocolFamily::EntityManagement));
        assert_eq!(header.length(), 52);
        assert_eq!(decode::<Pdu<IsPartOf>>(&bytes).unwrap(), pdu);
    }
}

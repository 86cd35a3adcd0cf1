//! Logistics family: service, resupply and repair

use crate::dis_record;
use crate::records::{EntityId, SupplyQuantity};

dis_record! {
    /// Request for supplies or repair
    pub struct ServiceRequest: ServiceRequest {
        /// Entity needing service
        requesting_entity_id: EntityId,
        /// Entity asked to provide it
        servicing_entity_id: EntityId,
        /// Service type code
        service_type_requested: u8,
        count u8 => supplies,
        pad 2,
        /// Requested supplies
        list supplies: SupplyQuantity,
    }
}

dis_record! {
    /// Supplies offered in answer to a service request
    pub struct ResupplyOffer: ResupplyOffer {
        /// Entity receiving the supplies
        receiving_entity_id: EntityId,
        /// Entity offering them
        supplying_entity_id: EntityId,
        count u8 => supplies,
        pad 3,
        /// Offered supplies
        list supplies: SupplyQuantity,
    }
}

dis_record! {
    /// Repair finished
    pub struct RepairComplete: RepairComplete {
        /// Repaired entity
        receiving_entity_id: EntityId,
        /// Entity that made the repair
        repairing_entity_id: EntityId,
        /// Repaired system code
        repair: u16,
        pad 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{Marshal, Pdu, decode};
    use crate::records::EntityType;

    #[test]
    fn test_service_request_roundtrip() {
        let mut pdu = Pdu::new(ServiceRequest {
            requesting_entity_id: EntityId::new(1, 1, 5),
            servicing_entity_id: EntityId::new(1, 1, 9),
            service_type_requested: 1,
            supplies: vec![SupplyQuantity {
                supply_type: EntityType {
                    entity_kind: 6,
                    ..EntityType::default()
                },
                quantity: 250.5,
            }],
        });
        let bytes = pdu.encode().unwrap();

        assert_eq!(bytes.len(), 28 + 12);
        assert_eq!(bytes[25], 1);
        assert_eq!(decode::<Pdu<ServiceRequest>>(&bytes).unwrap(), pdu);
    }

    #[test]
    fn test_sizes() {
        assert_eq!(ResupplyOffer::default().marshalled_size(), 16);
        assert_eq!(RepairComplete::default().marshalled_size(), 16);
    }
}

//! Munition and supply records

use crate::dis_record;

use super::EntityType;

dis_record! {
    /// Munition type, warhead, fuse and firing rate of a burst
    pub struct BurstDescriptor {
        /// Munition type
        munition: EntityType,
        /// Warhead code
        warhead: u16,
        /// Fuse code
        fuse: u16,
        /// Rounds in the burst
        quantity: u16,
        /// Rounds per minute
        rate: u16,
    }
}

dis_record! {
    /// Supply type and amount
    pub struct SupplyQuantity {
        /// Supply type
        supply_type: EntityType,
        /// Amount, in units defined by the supply type
        quantity: f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Marshal;

    #[test]
    fn test_sizes() {
        assert_eq!(BurstDescriptor::default().marshalled_size(), 16);
        assert_eq!(SupplyQuantity::default().marshalled_size(), 12);
    }
}

//! Bit-packed enumerations
//!
//! Each word type keeps its raw integer, so unknown bit patterns round-trip
//! unchanged. Typed accessors return `None` for values the enumeration does
//! not name.

/// Declare the named values of one bit-field.
macro_rules! field_values {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $code:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u32)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $code,)*
        }

        impl TryFrom<u32> for $name {
            type Error = u32;

            fn try_from(value: u32) -> Result<Self, u32> {
                match value {
                    $($code => Ok(Self::$variant),)*
                    other => Err(other),
                }
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> Self {
                value as u32
            }
        }
    };
}

mod appearance;
mod minefield;
mod propulsion;

pub use appearance::{DamageValue, LandPlatformAppearance};
pub use minefield::{
    ActiveStatusValue, LaneValue, MinefieldAppearance, MinefieldProtocolMode, MinefieldStateValue,
    MinefieldTypeValue, ProtocolModeValue,
};
pub use propulsion::{ConfigurationValue, HullMountedMaskerValue, PropulsionPlantConfiguration};

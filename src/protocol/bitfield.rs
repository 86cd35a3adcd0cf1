//! Packed bit-field words
//!
//! DIS packs several small values into one integer (entity appearance,
//! minefield appearance, propulsion plant configuration). A bit-field type
//! stores the raw word, so bits outside every declared field survive a
//! decode/encode cycle, and exposes each field through a mask and shift:
//! unpacking is `(word & mask) >> shift`, packing is the inverse with the
//! value clipped to the mask.

/// One named field inside a packed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitField {
    /// Field name
    pub name: &'static str,
    /// Mask of the field bits within the word
    pub mask: u32,
    /// Position of the lowest field bit
    pub shift: u32,
}

impl BitField {
    /// Describe a field
    #[must_use]
    pub const fn new(name: &'static str, mask: u32, shift: u32) -> Self {
        Self { name, mask, shift }
    }

    /// Unpack this field from `word`
    #[must_use]
    pub const fn extract(self, word: u32) -> u32 {
        (word & self.mask) >> self.shift
    }

    /// Pack `value` into `word`, leaving every other bit untouched
    #[must_use]
    pub const fn insert(self, word: u32, value: u32) -> u32 {
        (word & !self.mask) | ((value << self.shift) & self.mask)
    }
}

/// Mask of the bits not covered by any of `fields`
#[must_use]
pub const fn unclaimed_bits(fields: &[BitField], width: u32) -> u32 {
    let mut claimed = 0u32;
    let mut index = 0;
    while index < fields.len() {
        claimed |= fields[index].mask;
        index += 1;
    }
    let all = if width >= 32 { u32::MAX } else { (1u32 << width) - 1 };
    all & !claimed
}

/// Declare a packed bit-field word.
///
/// Each field gives a getter, a setter, its mask and its shift. The storage
/// type (`u8`, `u16` or `u32`) is the wire width.
///
/// ```
/// use dis::dis_bitfield;
///
/// dis_bitfield! {
///     /// Light switches.
///     pub struct Lights(u8) {
///         /// Head lamps on
///         head / set_head: 0x01 >> 0,
///         /// Brightness level
///         level / set_level: 0x0E >> 1,
///     }
/// }
///
/// let mut lights = Lights::from_bits(0x80);
/// lights.set_level(5);
/// assert_eq!(lights.level(), 5);
/// assert_eq!(lights.bits(), 0x8A);
/// assert_eq!(Lights::UNCLAIMED, 0xF0);
/// ```
#[macro_export]
macro_rules! dis_bitfield {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($repr:ty) {
            $(
                $(#[$fmeta:meta])*
                $get:ident / $set:ident : $mask:literal >> $shift:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
        pub struct $name($repr);

        impl $name {
            /// Declared fields in declaration order
            pub const FIELDS: &'static [$crate::protocol::BitField] = &[
                $($crate::protocol::BitField::new(stringify!($get), $mask, $shift),)*
            ];

            /// Bits not covered by any declared field
            pub const UNCLAIMED: u32 = $crate::protocol::bitfield::unclaimed_bits(
                Self::FIELDS,
                <$repr>::BITS,
            );

            /// Wrap a raw word
            #[must_use]
            pub const fn from_bits(bits: $repr) -> Self {
                Self(bits)
            }

            /// Raw word
            #[must_use]
            pub const fn bits(self) -> $repr {
                self.0
            }

            /// Build from an unsigned 32-bit value, truncating to the storage width
            #[must_use]
            #[allow(clippy::cast_possible_truncation)]
            pub const fn from_u32(value: u32) -> Self {
                Self(value as $repr)
            }

            /// Raw word widened to 32 bits
            #[must_use]
            pub const fn to_u32(self) -> u32 {
                self.0 as u32
            }

            $(
                $(#[$fmeta])*
                #[must_use]
                pub const fn $get(self) -> u32 {
                    $crate::protocol::BitField::new(stringify!($get), $mask, $shift)
                        .extract(self.0 as u32)
                }

                #[doc = concat!("Set `", stringify!($get), "`, clipped to its mask")]
                #[allow(clippy::cast_possible_truncation)]
                pub fn $set(&mut self, value: u32) {
                    let field = $crate::protocol::BitField::new(stringify!($get), $mask, $shift);
                    self.0 = field.insert(self.0 as u32, value) as $repr;
                }
            )*
        }

        impl From<$repr> for $name {
            fn from(bits: $repr) -> Self {
                Self(bits)
            }
        }

        impl From<$name> for $repr {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl $crate::protocol::Marshal for $name {
            fn marshalled_size(&self) -> usize {
                ::core::mem::size_of::<$repr>()
            }

            fn marshal<B: $crate::protocol::BufMut>(
                &self,
                buf: &mut B,
            ) -> $crate::protocol::Result<()> {
                $crate::protocol::Marshal::marshal(&self.0, buf)
            }

            fn unmarshal_from<B: $crate::protocol::Buf>(
                &mut self,
                buf: &mut B,
            ) -> $crate::protocol::Result<()> {
                $crate::protocol::Marshal::unmarshal_from(&mut self.0, buf)
            }
        }

        impl $crate::protocol::Structural for $name {
            fn structural_eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }

            fn structural_hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(&self.0, state);
            }

            fn reflect(&self, out: &mut $crate::protocol::Reflection) {
                out.scalar(format_args!("{:#x}", self.0));
                out.indented(|out| {
                    for field in Self::FIELDS {
                        out.derived(field.name, "bits", field.extract(self.to_u32()));
                    }
                });
            }
        }
    };
}

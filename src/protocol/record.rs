//! Declarative record schemas.
//!
//! [`dis_record!`](crate::dis_record) turns a table of wire entries into a
//! struct plus its [`Marshal`](crate::protocol::Marshal) and
//! [`Structural`](crate::protocol::Structural) impls. Entries are listed in
//! wire order, each terminated by a comma:
//!
//! | entry                   | struct field   | wire                                     |
//! |-------------------------|----------------|------------------------------------------|
//! | `name: Type,`           | `name: Type`   | `Type` marshals itself                   |
//! | `count Width => list,`  | none           | `list.len()` as `Width`                  |
//! | `list name: Elem,`      | `Vec<Elem>`    | each element, count read from `count`    |
//! | `words Width,`          | none           | record size in 32-bit words as `Width`   |
//! | `pad N,`                | none           | `N` zero bytes, skipped on read          |
//!
//! A `count` entry must precede the `list` it governs. Field names `count`,
//! `words`, `list` and `pad` are reserved.
//!
//! Adding `: Kind` after the struct name also implements
//! [`PduBody`](crate::protocol::PduBody) with `PduType::Kind`.
//!
//! ```
//! use dis::dis_record;
//!
//! dis_record! {
//!     /// Sensor sweep report.
//!     pub struct Sweep {
//!         /// Sweep identifier.
//!         sweep_id: u16,
//!         count u8 => bearings,
//!         pad 1,
//!         /// Bearings in radians.
//!         list bearings: f32,
//!     }
//! }
//!
//! let sweep = Sweep { sweep_id: 7, bearings: vec![0.5, 1.5] };
//! let bytes = dis::protocol::encode(&sweep)?;
//! assert_eq!(bytes.len(), 2 + 1 + 1 + 8);
//! assert_eq!(dis::protocol::decode::<Sweep>(&bytes)?, sweep);
//! # Ok::<(), dis::protocol::Error>(())
//! ```

/// Declare a DIS record from its wire layout. See the [module docs](crate::protocol::record).
#[macro_export]
macro_rules! dis_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident : $kind:ident {
            $($body:tt)*
        }
    ) => {
        $crate::dis_record! {
            $(#[$meta])*
            pub struct $name {
                $($body)*
            }
        }

        impl $crate::protocol::PduBody for $name {
            const PDU_TYPE: $crate::protocol::PduType = $crate::protocol::PduType::$kind;
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($body:tt)*
        }
    ) => {
        $crate::__dis_fields!(@struct [$(#[$meta])*] $name [] $($body)*);

        impl $crate::protocol::Marshal for $name {
            fn marshalled_size(&self) -> usize {
                $crate::__dis_fields!(@size [self] $($body)*)
            }

            fn marshal<B: $crate::protocol::BufMut>(
                &self,
                buf: &mut B,
            ) -> $crate::protocol::Result<()> {
                $crate::__dis_fields!(@marshal [self buf] $($body)*);
                Ok(())
            }

            fn unmarshal_from<B: $crate::protocol::Buf>(
                &mut self,
                buf: &mut B,
            ) -> $crate::protocol::Result<()> {
                $crate::__dis_fields!(@unmarshal [self buf] $($body)*);
                Ok(())
            }
        }

        impl $crate::protocol::Structural for $name {
            fn structural_eq(&self, other: &Self) -> bool {
                $crate::__dis_fields!(@eq [self other] $($body)*)
            }

            fn structural_hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                $crate::__dis_fields!(@hash [self state] $($body)*);
            }

            fn reflect(&self, out: &mut $crate::protocol::Reflection) {
                out.nested(|out| {
                    $crate::__dis_fields!(@reflect [self out] $($body)*);
                });
            }
        }

        impl ::core::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $crate::protocol::Structural::structural_eq(self, other)
            }
        }

        impl ::core::cmp::Eq for $name {}

        impl ::core::hash::Hash for $name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                $crate::protocol::Structural::structural_hash(self, state);
            }
        }
    };
}

/// Per-entry code generation behind [`dis_record!`]. Not public API.
#[doc(hidden)]
#[macro_export]
macro_rules! __dis_fields {
    // ---- struct definition: keep stored entries only ----
    (@struct [$($meta:tt)*] $name:ident [$($fields:tt)*]) => {
        $($meta)*
        #[derive(Debug, Clone, Default)]
        #[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
        pub struct $name {
            $($fields)*
        }
    };
    (@struct [$($meta:tt)*] $name:ident [$($fields:tt)*]
        count $ct:ty => $list:ident, $($rest:tt)*) => {
        $crate::__dis_fields!(@struct [$($meta)*] $name [$($fields)*] $($rest)*);
    };
    (@struct [$($meta:tt)*] $name:ident [$($fields:tt)*]
        words $ct:ty, $($rest:tt)*) => {
        $crate::__dis_fields!(@struct [$($meta)*] $name [$($fields)*] $($rest)*);
    };
    (@struct [$($meta:tt)*] $name:ident [$($fields:tt)*]
        pad $n:literal, $($rest:tt)*) => {
        $crate::__dis_fields!(@struct [$($meta)*] $name [$($fields)*] $($rest)*);
    };
    (@struct [$($meta:tt)*] $name:ident [$($fields:tt)*]
        $(#[$fmeta:meta])* list $f:ident : $et:ty, $($rest:tt)*) => {
        $crate::__dis_fields!(@struct [$($meta)*] $name
            [$($fields)* $(#[$fmeta])* pub $f: ::std::vec::Vec<$et>,] $($rest)*);
    };
    (@struct [$($meta:tt)*] $name:ident [$($fields:tt)*]
        $(#[$fmeta:meta])* $f:ident : $t:ty, $($rest:tt)*) => {
        $crate::__dis_fields!(@struct [$($meta)*] $name
            [$($fields)* $(#[$fmeta])* pub $f: $t,] $($rest)*);
    };

    // ---- marshalled size ----
    (@size [$s:tt]) => { 0usize };
    (@size [$s:tt] count $ct:ty => $list:ident, $($rest:tt)*) => {
        ::core::mem::size_of::<$ct>() + $crate::__dis_fields!(@size [$s] $($rest)*)
    };
    (@size [$s:tt] words $ct:ty, $($rest:tt)*) => {
        ::core::mem::size_of::<$ct>() + $crate::__dis_fields!(@size [$s] $($rest)*)
    };
    (@size [$s:tt] pad $n:literal, $($rest:tt)*) => {
        $n + $crate::__dis_fields!(@size [$s] $($rest)*)
    };
    (@size [$s:tt] $(#[$fmeta:meta])* list $f:ident : $et:ty, $($rest:tt)*) => {
        $crate::protocol::sequence::list_size(&$s.$f)
            + $crate::__dis_fields!(@size [$s] $($rest)*)
    };
    (@size [$s:tt] $(#[$fmeta:meta])* $f:ident : $t:ty, $($rest:tt)*) => {
        $crate::protocol::Marshal::marshalled_size(&$s.$f)
            + $crate::__dis_fields!(@size [$s] $($rest)*)
    };

    // ---- marshal ----
    (@marshal [$s:tt $b:tt]) => {};
    (@marshal [$s:tt $b:tt] count $ct:ty => $list:ident, $($rest:tt)*) => {
        $crate::protocol::sequence::write_count::<$ct, _>($b, $s.$list.len(), stringify!($list))?;
        $crate::__dis_fields!(@marshal [$s $b] $($rest)*);
    };
    (@marshal [$s:tt $b:tt] words $ct:ty, $($rest:tt)*) => {
        $crate::protocol::sequence::write_count::<$ct, _>(
            $b,
            $crate::protocol::Marshal::marshalled_size($s) / 4,
            "length_in_words",
        )?;
        $crate::__dis_fields!(@marshal [$s $b] $($rest)*);
    };
    (@marshal [$s:tt $b:tt] pad $n:literal, $($rest:tt)*) => {
        $crate::protocol::sequence::write_padding($b, $n)?;
        $crate::__dis_fields!(@marshal [$s $b] $($rest)*);
    };
    (@marshal [$s:tt $b:tt] $(#[$fmeta:meta])* list $f:ident : $et:ty, $($rest:tt)*) => {
        $crate::protocol::sequence::marshal_list(&$s.$f, $b)?;
        $crate::__dis_fields!(@marshal [$s $b] $($rest)*);
    };
    (@marshal [$s:tt $b:tt] $(#[$fmeta:meta])* $f:ident : $t:ty, $($rest:tt)*) => {
        $crate::protocol::Marshal::marshal(&$s.$f, $b)?;
        $crate::__dis_fields!(@marshal [$s $b] $($rest)*);
    };

    // ---- unmarshal (counts become locals named after their list) ----
    (@unmarshal [$s:tt $b:tt]) => {};
    (@unmarshal [$s:tt $b:tt] count $ct:ty => $list:ident, $($rest:tt)*) => {
        let $list = $crate::protocol::sequence::read_count::<$ct, _>($b)?;
        $crate::__dis_fields!(@unmarshal [$s $b] $($rest)*);
    };
    (@unmarshal [$s:tt $b:tt] words $ct:ty, $($rest:tt)*) => {
        $crate::protocol::sequence::read_count::<$ct, _>($b)?;
        $crate::__dis_fields!(@unmarshal [$s $b] $($rest)*);
    };
    (@unmarshal [$s:tt $b:tt] pad $n:literal, $($rest:tt)*) => {
        $crate::protocol::sequence::skip_padding($b, $n)?;
        $crate::__dis_fields!(@unmarshal [$s $b] $($rest)*);
    };
    (@unmarshal [$s:tt $b:tt] $(#[$fmeta:meta])* list $f:ident : $et:ty, $($rest:tt)*) => {
        $crate::protocol::sequence::unmarshal_list_into(&mut $s.$f, $b, $f)?;
        $crate::__dis_fields!(@unmarshal [$s $b] $($rest)*);
    };
    (@unmarshal [$s:tt $b:tt] $(#[$fmeta:meta])* $f:ident : $t:ty, $($rest:tt)*) => {
        $crate::protocol::Marshal::unmarshal_from(&mut $s.$f, $b)?;
        $crate::__dis_fields!(@unmarshal [$s $b] $($rest)*);
    };

    // ---- structural equality ----
    (@eq [$s:tt $o:tt]) => { true };
    (@eq [$s:tt $o:tt] count $ct:ty => $list:ident, $($rest:tt)*) => {
        $crate::__dis_fields!(@eq [$s $o] $($rest)*)
    };
    (@eq [$s:tt $o:tt] words $ct:ty, $($rest:tt)*) => {
        $crate::__dis_fields!(@eq [$s $o] $($rest)*)
    };
    (@eq [$s:tt $o:tt] pad $n:literal, $($rest:tt)*) => {
        $crate::__dis_fields!(@eq [$s $o] $($rest)*)
    };
    (@eq [$s:tt $o:tt] $(#[$fmeta:meta])* list $f:ident : $et:ty, $($rest:tt)*) => {
        $crate::protocol::Structural::structural_eq(&$s.$f, &$o.$f)
            && $crate::__dis_fields!(@eq [$s $o] $($rest)*)
    };
    (@eq [$s:tt $o:tt] $(#[$fmeta:meta])* $f:ident : $t:ty, $($rest:tt)*) => {
        $crate::protocol::Structural::structural_eq(&$s.$f, &$o.$f)
            && $crate::__dis_fields!(@eq [$s $o] $($rest)*)
    };

    // ---- structural hash ----
    (@hash [$s:tt $h:tt]) => {};
    (@hash [$s:tt $h:tt] count $ct:ty => $list:ident, $($rest:tt)*) => {
        $crate::__dis_fields!(@hash [$s $h] $($rest)*);
    };
    (@hash [$s:tt $h:tt] words $ct:ty, $($rest:tt)*) => {
        $crate::__dis_fields!(@hash [$s $h] $($rest)*);
    };
    (@hash [$s:tt $h:tt] pad $n:literal, $($rest:tt)*) => {
        $crate::__dis_fields!(@hash [$s $h] $($rest)*);
    };
    (@hash [$s:tt $h:tt] $(#[$fmeta:meta])* list $f:ident : $et:ty, $($rest:tt)*) => {
        $crate::protocol::Structural::structural_hash(&$s.$f, $h);
        $crate::__dis_fields!(@hash [$s $h] $($rest)*);
    };
    (@hash [$s:tt $h:tt] $(#[$fmeta:meta])* $f:ident : $t:ty, $($rest:tt)*) => {
        $crate::protocol::Structural::structural_hash(&$s.$f, $h);
        $crate::__dis_fields!(@hash [$s $h] $($rest)*);
    };

    // ---- reflective dump ----
    (@reflect [$s:tt $w:tt]) => {};
    (@reflect [$s:tt $w:tt] count $ct:ty => $list:ident, $($rest:tt)*) => {
        $w.derived(concat!(stringify!($list), "_count"), stringify!($ct), $s.$list.len());
        $crate::__dis_fields!(@reflect [$s $w] $($rest)*);
    };
    (@reflect [$s:tt $w:tt] words $ct:ty, $($rest:tt)*) => {
        $w.derived(
            "length_in_words",
            stringify!($ct),
            $crate::protocol::Marshal::marshalled_size($s) / 4,
        );
        $crate::__dis_fields!(@reflect [$s $w] $($rest)*);
    };
    (@reflect [$s:tt $w:tt] pad $n:literal, $($rest:tt)*) => {
        $crate::__dis_fields!(@reflect [$s $w] $($rest)*);
    };
    (@reflect [$s:tt $w:tt] $(#[$fmeta:meta])* list $f:ident : $et:ty, $($rest:tt)*) => {
        $w.field(stringify!($f), concat!("Vec<", stringify!($et), ">"), &$s.$f);
        $crate::__dis_fields!(@reflect [$s $w] $($rest)*);
    };
    (@reflect [$s:tt $w:tt] $(#[$fmeta:meta])* $f:ident : $t:ty, $($rest:tt)*) => {
        $w.field(stringify!($f), stringify!($t), &$s.$f);
        $crate::__dis_fields!(@reflect [$s $w] $($rest)*);
    };
}

#[cfg(test)]
mod tests {
    use crate::dis_record;
    use crate::protocol::{Error, Marshal, Structural, decode, encode, reflect};

    dis_record! {
        /// Two-sequence record with counts ahead of the payload.
        pub struct Track {
            track_id: u16,
            count u8 => points,
            count u16 => tags,
            pad 1,
            list points: Fix,
            list tags: u32,
        }
    }

    dis_record! {
        /// Fixed-size element.
        pub struct Fix {
            x: f32,
            y: f32,
        }
    }

    dis_record! {
        /// Record that carries its own length in 32-bit words.
        pub struct Block {
            words u8,
            kind: u8,
            count u8 => values,
            pad 1,
            list values: u32,
        }
    }

    fn sample() -> Track {
        Track {
            track_id: 0x0102,
            points: vec![Fix { x: 1.0, y: -1.0 }, Fix { x: 0.5, y: 2.0 }],
            tags: vec![7],
        }
    }

    #[test]
    fn test_wire_order_and_counts() {
        let bytes = encode(&sample()).unwrap();

        assert_eq!(&bytes[..6], &[0x01, 0x02, 2, 0x00, 0x01, 0x00]);
        assert_eq!(&bytes[6..10], &1.0_f32.to_be_bytes());
        assert_eq!(&bytes[22..], &7_u32.to_be_bytes());
        assert_eq!(bytes.len(), sample().marshalled_size());
    }

    #[test]
    fn test_roundtrip_and_equality() {
        let original = sample();
        let decoded: Track = decode(&encode(&original).unwrap()).unwrap();

        assert_eq!(decoded, original);
        assert_eq!(decoded.fingerprint(), original.fingerprint());
        assert_eq!(Track::default(), Track::default());
    }

    #[test]
    fn test_count_follows_mutation() {
        let mut track = sample();
        track.points.clear();
        track.tags.extend([1, 2, 3]);

        let bytes = encode(&track).unwrap();
        assert_eq!(bytes[2], 0);
        assert_eq!(&bytes[3..5], &[0x00, 0x04]);
        assert_eq!(bytes.len(), 6 + 16);
        assert_eq!(decode::<Track>(&bytes).unwrap(), track);
    }

    #[test]
    fn test_unmarshal_replaces_stale_sequences() {
        let bytes = encode(&Track::default()).unwrap();
        let mut target = sample();
        target.unmarshal_from(&mut bytes.as_slice()).unwrap();
        assert_eq!(target, Track::default());
    }

    #[test]
    fn test_partial_state_on_truncation() {
        let bytes = encode(&sample()).unwrap();
        let mut target = Track::default();
        let result = target.unmarshal_from(&mut &bytes[..14]);

        assert!(matches!(result, Err(Error::UnexpectedEof { .. })));
        assert_eq!(target.track_id, 0x0102);
        assert_eq!(target.points, [Fix { x: 1.0, y: -1.0 }]);
        assert!(target.tags.is_empty());
    }

    #[test]
    fn test_length_in_words() {
        let block = Block {
            kind: 3,
            values: vec![10, 20],
        };
        let bytes = encode(&block).unwrap();

        assert_eq!(bytes.len(), 12);
        assert_eq!(&bytes[..4], &[3, 3, 2, 0]);
        assert_eq!(decode::<Block>(&bytes).unwrap(), block);
    }

    #[test]
    fn test_reflection_lists_fields() {
        let text = reflect("track", &sample());
        assert!(text.starts_with("track <Track>\n"));
        assert!(text.contains("  track_id <u16> = 258\n"));
        assert!(text.contains("  points_count <u8> = 2 (derived)\n"));
        assert!(text.contains("  points <Vec<Fix>> [2]\n    [0]\n      x <f32> = 1\n"));
    }
}

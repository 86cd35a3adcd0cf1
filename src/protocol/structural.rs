//! Structural equality, hashing and reflective dumps.
//!
//! Floats compare and hash by bit pattern, so a decoded NaN equals the NaN it
//! was encoded from and `a == b` always implies `hash(a) == hash(b)`.

use std::fmt::{self, Write as _};
use std::hash::{Hash, Hasher};

use xxhash_rust::xxh3::Xxh3;

/// Field-by-field comparison, hashing and dumping.
pub trait Structural {
    /// Compare every field, recursively.
    fn structural_eq(&self, other: &Self) -> bool;

    /// Feed every field, in declaration order, into `state`.
    fn structural_hash<H: Hasher>(&self, state: &mut H);

    /// Write this value into a reflective dump.
    ///
    /// Scalars finish the current line; records open a nested block.
    fn reflect(&self, out: &mut Reflection);

    /// Stable 64-bit fingerprint (xxh3 over the structural hash stream).
    #[must_use]
    fn fingerprint(&self) -> u64
    where
        Self: Sized,
    {
        let mut hasher = Xxh3::new();
        self.structural_hash(&mut hasher);
        hasher.finish()
    }
}

macro_rules! impl_structural_int {
    ($($ty:ty),*) => {$(
        impl Structural for $ty {
            #[inline]
            fn structural_eq(&self, other: &Self) -> bool {
                self == other
            }

            #[inline]
            fn structural_hash<H: Hasher>(&self, state: &mut H) {
                self.hash(state);
            }

            fn reflect(&self, out: &mut Reflection) {
                out.scalar(self);
            }
        }
    )*};
}

impl_structural_int!(u8, i8, u16, i16, u32, i32, u64, i64);

macro_rules! impl_structural_float {
    ($($ty:ty),*) => {$(
        impl Structural for $ty {
            #[inline]
            fn structural_eq(&self, other: &Self) -> bool {
                self.to_bits() == other.to_bits()
            }

            #[inline]
            fn structural_hash<H: Hasher>(&self, state: &mut H) {
                self.to_bits().hash(state);
            }

            fn reflect(&self, out: &mut Reflection) {
                out.scalar(self);
            }
        }
    )*};
}

impl_structural_float!(f32, f64);

impl<T: Structural, const N: usize> Structural for [T; N] {
    fn structural_eq(&self, other: &Self) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.structural_eq(b))
    }

    fn structural_hash<H: Hasher>(&self, state: &mut H) {
        for item in self {
            item.structural_hash(state);
        }
    }

    fn reflect(&self, out: &mut Reflection) {
        out.items(self);
    }
}

impl<T: Structural> Structural for Vec<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.structural_eq(b))
    }

    fn structural_hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self {
            item.structural_hash(state);
        }
    }

    fn reflect(&self, out: &mut Reflection) {
        out.items(self);
    }
}

/// Indented text dump of a record tree: one line per field carrying the
/// field name, its declared type and, for scalars, the value.
///
/// Purely diagnostic; the format is not meant to be parsed back.
#[derive(Debug, Default)]
pub struct Reflection {
    out: String,
    depth: usize,
}

impl Reflection {
    /// Create an empty dump.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dump a named field.
    pub fn field<T: Structural + ?Sized>(&mut self, name: &str, type_tag: &str, value: &T) {
        self.indent();
        let _ = write!(self.out, "{name} <{type_tag}>");
        value.reflect(self);
    }

    /// Dump a value that is computed at marshal time rather than stored.
    pub fn derived(&mut self, name: &str, type_tag: &str, value: impl fmt::Display) {
        self.indent();
        let _ = writeln!(self.out, "{name} <{type_tag}> = {value} (derived)");
    }

    /// Finish the current line with a scalar value.
    pub fn scalar(&mut self, value: impl fmt::Display) {
        let _ = writeln!(self.out, " = {value}");
    }

    /// Open a nested block for the fields of a record.
    pub fn nested(&mut self, fields: impl FnOnce(&mut Self)) {
        self.out.push('\n');
        self.indented(fields);
    }

    /// Write `lines` one level deeper; the current line must already be finished.
    pub fn indented(&mut self, lines: impl FnOnce(&mut Self)) {
        self.depth += 1;
        lines(self);
        self.depth -= 1;
    }

    /// Dump a sequence, one indexed entry per element.
    pub fn items<T: Structural>(&mut self, items: &[T]) {
        let _ = write!(self.out, " [{}]", items.len());
        self.nested(|out| {
            for (index, item) in items.iter().enumerate() {
                out.indent();
                let _ = write!(out.out, "[{index}]");
                item.reflect(out);
            }
        });
    }

    /// Consume the dump, returning the text.
    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
    }
}

/// Dump `value` as a root field called `name`.
#[must_use]
pub fn reflect<T: Structural>(name: &str, value: &T) -> String {
    let mut out = Reflection::new();
    out.field(name, &short_type_name::<T>(), value);
    out.finish()
}

/// `std::any::type_name` with every module path stripped.
fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut start = 0;
    for (index, c) in full.char_indices() {
        if matches!(c, '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&') {
            out.push_str(last_segment(&full[start..index]));
            out.push(c);
            start = index + c.len_utf8();
        }
    }
    out.push_str(last_segment(&full[start..]));
    out
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

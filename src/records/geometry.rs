//! Vectors, orientations and points

use crate::dis_record;

dis_record! {
    /// Three single-precision components (velocities, entity coordinates)
    pub struct Vector3Float {
        /// X component
        x: f32,
        /// Y component
        y: f32,
        /// Z component
        z: f32,
    }
}

impl Vector3Float {
    /// Create a vector
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

dis_record! {
    /// Three double-precision components (world coordinates)
    pub struct Vector3Double {
        /// X component
        x: f64,
        /// Y component
        y: f64,
        /// Z component
        z: f64,
    }
}

impl Vector3Double {
    /// Create a vector
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

dis_record! {
    /// Euler angles in radians
    pub struct Orientation {
        /// Heading
        psi: f32,
        /// Pitch
        theta: f32,
        /// Roll
        phi: f32,
    }
}

dis_record! {
    /// Two-dimensional point relative to a minefield location
    pub struct Point {
        /// X offset in meters
        x: f32,
        /// Y offset in meters
        y: f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{Marshal, Structural, decode, encode};

    #[test]
    fn test_vector_wire_bytes() {
        let bytes = encode(&Vector3Float::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(
            bytes,
            [
                0x3F, 0x80, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00, 0x40, 0x40, 0x00, 0x00
            ]
        );
    }

    #[test]
    fn test_nan_components_roundtrip_equal() {
        let vector = Vector3Double::new(f64::NAN, -0.0, f64::INFINITY);
        let decoded: Vector3Double = decode(&encode(&vector).unwrap()).unwrap();

        assert_eq!(decoded, vector);
        assert_eq!(decoded.fingerprint(), vector.fingerprint());
        assert_ne!(vector, Vector3Double::new(f64::NAN, 0.0, f64::INFINITY));
    }

    #[test]
    fn test_sizes() {
        assert_eq!(Vector3Double::default().marshalled_size(), 24);
        assert_eq!(Orientation::default().marshalled_size(), 12);
        assert_eq!(Point::default().marshalled_size(), 8);
    }
}

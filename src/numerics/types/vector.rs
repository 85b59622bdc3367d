// src/numerics/types/vector.rs
// Vector3 generic implementation with default precision f64.
// Uses the FloatingPoint trait from super::traits.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use byteorder::ByteOrder;
use serde::{Serialize, Deserialize};

use super::frozen::{Frozen, Singleton};
use super::traits::{FloatingPoint, Planar};
use super::vector2::Vector2;
use crate::error::{Axis, VectorError};
use crate::numerics::config::NumericsConfig;
use crate::numerics::wire;

/// Vector3 is a simple 3D vector type with template-able numeric type.
///
/// Used for positions, velocities and orientations of networked entities.
/// The set of fields is fixed; the values are public and may change. The
/// canonical [`Vector3::ZERO`] and [`Vector3::ONE`] are wrapped in
/// [`Frozen`] and cannot be changed at all.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector3<T: FloatingPoint = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// Shared zero vector at the default precision.
pub static VECTOR3_ZERO: Frozen<Vector3<f64>> = Vector3::<f64>::ZERO;

/// Shared all-ones vector at the default precision.
pub static VECTOR3_ONE: Frozen<Vector3<f64>> = Vector3::<f64>::ONE;

// Conditional impls for serde. Encoded as a bare (x, y, z) tuple so the
// bincode form matches the f32 wire layout. Decoding applies the same strict
// component check as `read_le_bytes`.
impl<T> Serialize for Vector3<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Vector3<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z) = <(T, T, T)>::deserialize(deserializer)?;
        let policy = NumericsConfig::strict().component_policy;
        let check = |axis, value| {
            policy
                .check(axis, value)
                .map_err(<D::Error as serde::de::Error>::custom)
        };
        Ok(Vector3 {
            x: check(Axis::X, x)?,
            y: check(Axis::Y, y)?,
            z: check(Axis::Z, z)?,
        })
    }
}

impl<T: FloatingPoint> Vector3<T> {
    /// Canonical zero vector.
    pub const ZERO: Frozen<Self> = Frozen::new(
        Singleton::Zero,
        Vector3 { x: T::ZERO, y: T::ZERO, z: T::ZERO },
    );

    /// Canonical all-ones vector.
    pub const ONE: Frozen<Self> = Frozen::new(
        Singleton::One,
        Vector3 { x: T::ONE, y: T::ONE, z: T::ONE },
    );

    /// Construct a new Vector3 from all three components.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Vector with every component set to `value`.
    pub fn splat(value: T) -> Self {
        Self::new(value, value, value)
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    /// Vector of all ones
    pub fn one() -> Self {
        Self::splat(T::ONE)
    }

    /// Build a vector from optional components.
    ///
    /// A missing `y` or `z` takes the value of `x`; a missing `x` is zero.
    /// So `(Some(5), None, None)` gives `{5, 5, 5}` and `(Some(1), Some(2), None)`
    /// gives `{1, 2, 1}`. Components are checked against the default
    /// [`NumericsConfig`], which rejects NaN.
    pub fn from_components(x: Option<T>, y: Option<T>, z: Option<T>) -> Result<Self, VectorError> {
        Self::from_components_with(&NumericsConfig::default(), x, y, z)
    }

    /// Same as [`Vector3::from_components`] with an explicit validation policy.
    pub fn from_components_with(
        config: &NumericsConfig,
        x: Option<T>,
        y: Option<T>,
        z: Option<T>,
    ) -> Result<Self, VectorError> {
        let policy = config.component_policy;
        let first = policy.check(Axis::X, x.unwrap_or(T::ZERO))?;
        Ok(Self {
            x: first,
            y: policy.check(Axis::Y, y.unwrap_or(first))?,
            z: policy.check(Axis::Z, z.unwrap_or(first))?,
        })
    }

    /// Component-wise sum `a + b`.
    pub fn add(a: &Self, b: &Self) -> Self {
        Self::new(a.x + b.x, a.y + b.y, a.z + b.z)
    }

    /// Component-wise difference `a - b`.
    pub fn subtract(a: &Self, b: &Self) -> Self {
        Self::new(a.x - b.x, a.y - b.y, a.z - b.z)
    }

    /// Component-wise product.
    pub fn mult(a: &Self, b: &Self) -> Self {
        Self::new(a.x * b.x, a.y * b.y, a.z * b.z)
    }

    /// `a` with every component multiplied by `scalar`.
    pub fn scale(a: &Self, scalar: T) -> Self {
        Self::new(a.x * scalar, a.y * scalar, a.z * scalar)
    }

    /// Right-handed cross product `self × b`.
    pub fn cross(&self, b: &Self) -> Self {
        Self::new(
            self.y * b.z - self.z * b.y,
            self.z * b.x - self.x * b.z,
            self.x * b.y - self.y * b.x,
        )
    }

    /// Sum of the pairwise component products.
    pub fn dot(&self, b: &Self) -> T {
        self.x * b.x + self.y * b.y + self.z * b.z
    }

    /// Euclidean length.
    pub fn len(&self) -> T {
        self.len2().sqrt()
    }

    /// Squared length (avoids sqrt)
    pub fn len2(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns the vector scaled to unit length. The zero vector stays zero.
    pub fn normalize(&self) -> Self {
        let len = self.divisor();
        Self::new(self.x / len, self.y / len, self.z / len)
    }

    /// Like [`Vector3::normalize`] but with every component made non-negative.
    pub fn unit(&self) -> Self {
        let len = self.divisor();
        Self::new((self.x / len).abs(), (self.y / len).abs(), (self.z / len).abs())
    }

    fn divisor(&self) -> T {
        let len = self.len();
        if len == T::ZERO {
            T::ONE
        } else {
            len
        }
    }

    /// Add `addend` to this vector in place.
    pub fn add_mut(&mut self, addend: &Self) -> &mut Self {
        self.x = self.x + addend.x;
        self.y = self.y + addend.y;
        self.z = self.z + addend.z;
        self
    }

    /// Subtract `subtrahend` from this vector in place.
    pub fn subtract_mut(&mut self, subtrahend: &Self) -> &mut Self {
        self.x = self.x - subtrahend.x;
        self.y = self.y - subtrahend.y;
        self.z = self.z - subtrahend.z;
        self
    }

    /// Multiply component-wise by `factor` in place.
    pub fn mult_mut(&mut self, factor: &Self) -> &mut Self {
        self.x = self.x * factor.x;
        self.y = self.y * factor.y;
        self.z = self.z * factor.z;
        self
    }

    /// Scale in place.
    pub fn scale_mut(&mut self, scalar: T) -> &mut Self {
        self.x = self.x * scalar;
        self.y = self.y * scalar;
        self.z = self.z * scalar;
        self
    }

    /// Copy every component of `source` into this vector.
    pub fn set(&mut self, source: &Self) -> &mut Self {
        *self = *source;
        self
    }

    /// Overwrite the components using the same fallback and validation rules
    /// as [`Vector3::from_components`]. On error the vector is left unchanged.
    pub fn set_components(
        &mut self,
        x: Option<T>,
        y: Option<T>,
        z: Option<T>,
    ) -> Result<&mut Self, VectorError> {
        self.set_components_with(&NumericsConfig::default(), x, y, z)
    }

    /// Same as [`Vector3::set_components`] with an explicit validation policy.
    pub fn set_components_with(
        &mut self,
        config: &NumericsConfig,
        x: Option<T>,
        y: Option<T>,
        z: Option<T>,
    ) -> Result<&mut Self, VectorError> {
        *self = Self::from_components_with(config, x, y, z)?;
        Ok(self)
    }

    /// Drop the z component.
    pub fn truncate(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    /// Render with the precision from `config`.
    pub fn display_with(&self, config: &NumericsConfig) -> String {
        format!("{:.*}", config.display_precision, self)
    }

    /// Components as f32 in `x, y, z` order.
    pub fn to_buffer(&self) -> [f32; 3] {
        [self.x.to_f32(), self.y.to_f32(), self.z.to_f32()]
    }

    /// Inverse of [`Vector3::to_buffer`]; values are taken as given.
    pub fn from_buffer(buffer: [f32; 3]) -> Self {
        Self::new(T::from_f32(buffer[0]), T::from_f32(buffer[1]), T::from_f32(buffer[2]))
    }

    /// The 12-byte little-endian wire form.
    pub fn to_le_bytes(&self) -> [u8; 12] {
        let mut bytes = [0u8; 12];
        byteorder::LittleEndian::write_f32_into(&self.to_buffer(), &mut bytes);
        bytes
    }

    /// Write the wire form into the front of `out`, returning the byte count.
    pub fn write_le_bytes(&self, out: &mut [u8]) -> Result<usize, VectorError> {
        wire::write_f32s(&self.to_buffer(), out)
    }

    /// Read the wire form from the front of `bytes`.
    ///
    /// Non-finite components are rejected since they never come from a
    /// well-behaved peer.
    pub fn read_le_bytes(bytes: &[u8]) -> Result<Self, VectorError> {
        let [x, y, z] = wire::read_f32s::<3>(bytes)?;
        let policy = NumericsConfig::strict().component_policy;
        Ok(Self::new(
            T::from_f32(policy.check(Axis::X, x)?),
            T::from_f32(policy.check(Axis::Y, y)?),
            T::from_f32(policy.check(Axis::Z, z)?),
        ))
    }
}

impl<T: FloatingPoint> Default for Vector3<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: FloatingPoint> Planar<T> for Vector3<T> {
    fn x(&self) -> T {
        self.x
    }

    fn y(&self) -> T {
        self.y
    }

    fn set_x(&mut self, value: T) {
        self.x = value;
    }

    fn set_y(&mut self, value: T) {
        self.y = value;
    }
}

/// Fixed-decimal `{x, y, z}`. Uses the formatter precision when given
/// (`{:.4}`), otherwise [`NumericsConfig::DEFAULT_DISPLAY_PRECISION`].
impl<T: FloatingPoint> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(NumericsConfig::DEFAULT_DISPLAY_PRECISION);
        write!(f, "{{{:.*}, {:.*}, {:.*}}}", p, self.x, p, self.y, p, self.z)
    }
}

// Operators mirror the pure associated functions.

impl<T: FloatingPoint> Add for Vector3<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: FloatingPoint> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: FloatingPoint> Mul for Vector3<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }
}

impl<T: FloatingPoint> Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl<T: FloatingPoint> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: FloatingPoint> AddAssign for Vector3<T> {
    fn add_assign(&mut self, other: Self) {
        self.add_mut(&other);
    }
}

impl<T: FloatingPoint> SubAssign for Vector3<T> {
    fn sub_assign(&mut self, other: Self) {
        self.subtract_mut(&other);
    }
}

impl<T: FloatingPoint> MulAssign for Vector3<T> {
    fn mul_assign(&mut self, other: Self) {
        self.mult_mut(&other);
    }
}

impl<T: FloatingPoint> MulAssign<T> for Vector3<T> {
    fn mul_assign(&mut self, scalar: T) {
        self.scale_mut(scalar);
    }
}

// Conversions between Vector3<T> and tuples

impl<T: FloatingPoint> From<(T, T, T)> for Vector3<T> {
    fn from(tuple: (T, T, T)) -> Self {
        Self {
            x: tuple.0,
            y: tuple.1,
            z: tuple.2,
        }
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for (T, T, T) {
    fn from(v: Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

// Conversions between Vector3<T> and arrays [T; 3]

impl<T: FloatingPoint> From<[T; 3]> for Vector3<T> {
    fn from(array: [T; 3]) -> Self {
        Self {
            x: array[0],
            y: array[1],
            z: array[2],
        }
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

// Reverse conversions from references

impl<T: FloatingPoint> From<&Vector3<T>> for (T, T, T) {
    fn from(v: &Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

impl<T: FloatingPoint> From<&Vector3<T>> for [T; 3] {
    fn from(v: &Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn assert_close(a: &Vector3<f64>, b: &Vector3<f64>) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
        assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-9);
    }

    #[test]
    fn test_construction_fallbacks() {
        assert_eq!(Vector3::<f64>::from_components(None, None, None).unwrap(), Vector3::zero());
        assert_eq!(
            Vector3::from_components(Some(5.0), None, None).unwrap(),
            Vector3::new(5.0, 5.0, 5.0)
        );
        assert_eq!(
            Vector3::from_components(Some(1.0), Some(2.0), None).unwrap(),
            Vector3::new(1.0, 2.0, 1.0)
        );
        assert_eq!(
            Vector3::from_components(None, Some(2.0), None).unwrap(),
            Vector3::new(0.0, 2.0, 0.0)
        );
        // An explicit zero is a value, not a missing component.
        assert_eq!(
            Vector3::from_components(Some(3.0), Some(0.0), Some(0.0)).unwrap(),
            Vector3::new(3.0, 0.0, 0.0)
        );
        assert_eq!(Vector3::splat(5.0_f32), Vector3::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn test_construction_rejects_nan() {
        let err = Vector3::from_components(Some(1.0), Some(f64::NAN), None).unwrap_err();
        assert!(matches!(err, VectorError::InvalidComponent { axis: Axis::Y, .. }));

        // A NaN x would leak into y and z through the fallback; it is caught on x.
        let err = Vector3::<f32>::from_components(Some(f32::NAN), None, None).unwrap_err();
        assert!(matches!(err, VectorError::InvalidComponent { axis: Axis::X, .. }));

        let inf = Vector3::from_components(Some(f64::INFINITY), None, None);
        assert!(inf.is_ok());
        let strict = Vector3::from_components_with(
            &NumericsConfig::strict(), Some(f64::INFINITY), None, None);
        assert!(strict.is_err());
        let permissive = Vector3::from_components_with(
            &NumericsConfig::permissive(), Some(f64::NAN), None, None);
        assert!(permissive.unwrap().x.is_nan());
    }

    #[test]
    fn test_pure_ops_leave_operands_alone() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(Vector3::add(&a, &b), Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(Vector3::subtract(&a, &b), Vector3::new(-3.0, -3.0, -3.0));
        assert_eq!(Vector3::mult(&a, &b), Vector3::new(4.0, 10.0, 18.0));
        assert_eq!(Vector3::scale(&a, 2.0), Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(a, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(b, Vector3::new(4.0, 5.0, 6.0));

        assert_eq!(a + b, Vector3::add(&a, &b));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vector3::mult(&a, &b));
        assert_eq!(a * 3.0_f64, Vector3::new(3.0, 6.0, 9.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_in_place_ops_chain() {
        let mut v = Vector3::new(1.0, 1.0, 1.0);
        v.add_mut(&Vector3::new(1.0, 2.0, 3.0))
            .scale_mut(2.0)
            .subtract_mut(&Vector3::splat(1.0))
            .mult_mut(&Vector3::new(1.0, 0.5, -1.0));
        assert_eq!(v, Vector3::new(3.0, 2.5, -7.0));

        let mut w = Vector3::new(1.0_f32, 2.0, 3.0);
        w += Vector3::splat(1.0);
        w -= Vector3::new(0.0, 1.0, 2.0);
        w *= 2.0;
        w *= Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(w, Vector3::new(4.0, 8.0, 12.0));
    }

    #[test]
    fn test_set_copies_and_validates() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v.set(&Vector3::new(7.0, 8.0, 9.0));
        assert_eq!(v, Vector3::new(7.0, 8.0, 9.0));

        v.set_components(Some(4.0), None, Some(6.0)).unwrap().scale_mut(0.5);
        assert_eq!(v, Vector3::new(2.0, 2.0, 3.0));

        assert!(v.set_components(Some(1.0), None, Some(f64::NAN)).is_err());
        assert_eq!(v, Vector3::new(2.0, 2.0, 3.0));
    }

    #[test]
    fn test_clone_is_independent() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let mut c = v.clone();
        assert_eq!(c, v);
        c.x = 100.0;
        assert_eq!(v.x, 1.0);
    }

    #[test]
    fn test_cross_of_basis_vectors() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(a.cross(&b), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(b.cross(&a), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_length_and_normalize() {
        let a = Vector3::new(1.0_f32, 2.0, 2.0);
        assert_eq!(a.len2(), 9.0);
        assert_eq!(a.len(), 3.0);

        let n = Vector3::new(0.0, -3.0, 4.0).normalize();
        assert_close(&n, &Vector3::new(0.0, -0.6, 0.8));
        assert_abs_diff_eq!(n.len(), 1.0, epsilon = 1e-12);

        let u = Vector3::new(0.0, -3.0, 4.0).unit();
        assert_close(&u, &Vector3::new(0.0, 0.6, 0.8));
    }

    #[test]
    fn test_normalize_zero_vector() {
        let z = Vector3::<f64>::zero();
        let n = z.normalize();
        assert_eq!(n, z);
        assert!(!n.x.is_nan() && !n.y.is_nan() && !n.z.is_nan());
        assert_eq!(z.unit(), z);
    }

    #[test]
    fn test_display_precision() {
        let v = Vector3::new(1.0, 2.5, -3.14159);
        assert_eq!(v.to_string(), "{1.00, 2.50, -3.14}");
        assert_eq!(format!("{:.1}", v), "{1.0, 2.5, -3.1}");
        assert_eq!(format!("{:.0}", Vector3::new(0.9, 2.2, -3.7)), "{1, 2, -4}");
        let config = NumericsConfig::default().with_display_precision(3);
        assert_eq!(v.display_with(&config), "{1.000, 2.500, -3.142}");
    }

    #[test]
    fn test_canonical_constants_are_frozen() {
        assert_eq!(Vector3::<f64>::ZERO, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(Vector3::<f32>::ONE, Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(VECTOR3_ZERO.singleton(), Singleton::Zero);
        assert_eq!(VECTOR3_ONE.len2(), 3.0);

        let err = VECTOR3_ZERO.try_set(&Vector3::new(1.0, 1.0, 1.0)).unwrap_err();
        assert_eq!(err, VectorError::FrozenMutation { singleton: Singleton::Zero });
        let err = VECTOR3_ONE.try_update(|v| { v.scale_mut(2.0); }).unwrap_err();
        assert_eq!(err, VectorError::FrozenMutation { singleton: Singleton::One });
        assert_eq!(VECTOR3_ONE, Vector3::one());

        // Pure operations on the singletons return new values.
        let doubled = Vector3::scale(VECTOR3_ONE.get(), 2.0);
        assert_eq!(doubled, Vector3::splat(2.0));
        let mut thawed = VECTOR3_ONE.thaw();
        thawed.add_mut(&VECTOR3_ONE);
        assert_eq!(thawed, Vector3::splat(2.0));
        assert_eq!(VECTOR3_ONE, Vector3::one());
    }

    #[test]
    fn test_truncate_and_planar() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.truncate(), Vector2::new(1.0, 2.0));
        Planar::set_y(&mut v, 9.0);
        assert_eq!(Planar::y(&v), 9.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_buffer_layout() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.to_buffer(), [1.0f32, 2.0, 3.0]);
        assert_eq!(Vector3::<f64>::from_buffer([1.0, 2.0, 3.0]), v);

        let bytes = v.to_le_bytes();
        assert_eq!(&bytes[0..4], &1.0f32.to_le_bytes());
        assert_eq!(&bytes[4..8], &2.0f32.to_le_bytes());
        assert_eq!(&bytes[8..12], &3.0f32.to_le_bytes());
        assert_eq!(Vector3::<f64>::read_le_bytes(&bytes).unwrap(), v);

        let mut out = [0u8; 16];
        assert_eq!(v.write_le_bytes(&mut out).unwrap(), 12);
        assert_eq!(&out[..12], &bytes);
        assert_eq!(&out[12..], &[0u8; 4]);
    }

    #[test]
    fn test_read_rejects_short_or_non_finite() {
        let err = Vector3::<f32>::read_le_bytes(&[0u8; 8]).unwrap_err();
        assert_eq!(err, VectorError::BufferTooShort { expected: 12, actual: 8 });

        let bytes = Vector3::new(1.0_f32, f32::INFINITY, 0.0).to_le_bytes();
        let err = Vector3::<f32>::read_le_bytes(&bytes).unwrap_err();
        assert!(matches!(err, VectorError::InvalidComponent { axis: Axis::Y, .. }));
    }

    #[test]
    fn test_bincode_matches_wire_layout() {
        let v = Vector3::new(1.0f32, -2.0f32, 3.5f32);
        let encoded = wire::encode(&v).unwrap();
        assert_eq!(encoded, v.to_le_bytes().to_vec());

        let decoded: Vector3<f32> = wire::decode(&encoded).unwrap();
        assert_eq!(decoded, v);

        let v64 = Vector3::new(10.0f64, 20.0f64, 30.0f64);
        let decoded: Vector3<f64> = wire::decode(&wire::encode(&v64).unwrap()).unwrap();
        assert_eq!(decoded, v64);
    }

    #[test]
    fn test_decode_rejects_non_finite_components() {
        let bytes = Vector3::new(1.0_f32, f32::NAN, f32::INFINITY).to_le_bytes();

        let result: Result<Vector3<f32>, _> = wire::decode(&bytes);
        match result {
            Err(VectorError::Decode(message)) => assert!(message.contains("y = NaN"), "{}", message),
            other => panic!("expected Decode error, got {:?}", other),
        }

        let bytes = Vector3::new(1.0_f32, 2.0, f32::NEG_INFINITY).to_le_bytes();
        let result: Result<Vector3<f32>, _> = wire::decode(&bytes);
        assert!(matches!(result, Err(VectorError::Decode(_))));
    }

    #[test]
    fn test_tuple_and_array_conversions() {
        let v: Vector3<f32> = (1.0, 2.0, 3.0).into();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        let back: (f32, f32, f32) = v.into();
        assert_eq!(back, (1.0, 2.0, 3.0));

        let v: Vector3<f32> = [7.0, 8.0, 9.0].into();
        let arr: [f32; 3] = (&v).into();
        assert_eq!(arr, [7.0, 8.0, 9.0]);
        let tup: (f32, f32, f32) = (&v).into();
        assert_eq!(tup, (7.0, 8.0, 9.0));
    }

    fn component() -> impl Strategy<Value = f64> {
        -1.0e3..1.0e3
    }

    fn vector() -> impl Strategy<Value = Vector3<f64>> {
        (component(), component(), component()).prop_map(|(x, y, z)| Vector3::new(x, y, z))
    }

    proptest! {
        #[test]
        fn prop_add_then_subtract_restores(a in vector(), b in vector()) {
            let back = Vector3::subtract(&Vector3::add(&a, &b), &b);
            prop_assert!((back - a).len() < 1e-9);
        }

        #[test]
        fn prop_scale_identity_and_zero(v in vector()) {
            prop_assert_eq!(Vector3::scale(&v, 1.0), v);
            prop_assert_eq!(Vector3::scale(&v, 0.0).len2(), 0.0);
        }

        #[test]
        fn prop_dot_commutes(a in vector(), b in vector()) {
            prop_assert_eq!(a.dot(&b), b.dot(&a));
        }

        #[test]
        fn prop_cross_anticommutes_and_is_orthogonal(a in vector(), b in vector()) {
            let ab = a.cross(&b);
            prop_assert!((ab + b.cross(&a)).len() < 1e-6);
            let scale = a.len() * a.len() * b.len() + 1.0;
            prop_assert!((a.dot(&ab) / scale).abs() < 1e-9);
        }

        #[test]
        fn prop_len2_is_self_dot(v in vector()) {
            prop_assert_eq!(v.len2(), v.dot(&v));
        }

        #[test]
        fn prop_unit_is_non_negative(v in vector()) {
            let u = v.unit();
            prop_assert!(u.x >= 0.0 && u.y >= 0.0 && u.z >= 0.0);
        }
    }
}

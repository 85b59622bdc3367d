// src/numerics/types/vector2.rs
// Vector2: the planar counterpart of Vector3, without z and without cross.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use byteorder::ByteOrder;
use serde::{Serialize, Deserialize};

use super::frozen::{Frozen, Singleton};
use super::traits::{FloatingPoint, Planar};
use super::vector::Vector3;
use crate::error::{Axis, VectorError};
use crate::numerics::config::NumericsConfig;
use crate::numerics::wire;

/// Two-component vector with template-able numeric type.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector2<T: FloatingPoint = f64> {
    pub x: T,
    pub y: T,
}

/// Shared zero vector at the default precision.
pub static VECTOR2_ZERO: Frozen<Vector2<f64>> = Vector2::<f64>::ZERO;

/// Shared all-ones vector at the default precision.
pub static VECTOR2_ONE: Frozen<Vector2<f64>> = Vector2::<f64>::ONE;

// Same tuple form and decode-time check as Vector3.
impl<T> Serialize for Vector2<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Vector2<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y) = <(T, T)>::deserialize(deserializer)?;
        let policy = NumericsConfig::strict().component_policy;
        let check = |axis, value| {
            policy
                .check(axis, value)
                .map_err(<D::Error as serde::de::Error>::custom)
        };
        Ok(Vector2 {
            x: check(Axis::X, x)?,
            y: check(Axis::Y, y)?,
        })
    }
}

impl<T: FloatingPoint> Vector2<T> {
    /// Canonical zero vector.
    pub const ZERO: Frozen<Self> = Frozen::new(Singleton::Zero, Vector2 { x: T::ZERO, y: T::ZERO });
    /// Canonical all-ones vector.
    pub const ONE: Frozen<Self> = Frozen::new(Singleton::One, Vector2 { x: T::ONE, y: T::ONE });

    /// Construct a new Vector2 from both components.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Vector with both components set to `value`.
    pub fn splat(value: T) -> Self {
        Self::new(value, value)
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    /// Vector of all ones
    pub fn one() -> Self {
        Self::splat(T::ONE)
    }

    /// Build a vector from optional components. A missing `y` takes the
    /// value of `x`; a missing `x` is zero. NaN is rejected.
    pub fn from_components(x: Option<T>, y: Option<T>) -> Result<Self, VectorError> {
        Self::from_components_with(&NumericsConfig::default(), x, y)
    }

    /// Same as [`Vector2::from_components`] with an explicit validation policy.
    pub fn from_components_with(
        config: &NumericsConfig,
        x: Option<T>,
        y: Option<T>,
    ) -> Result<Self, VectorError> {
        let policy = config.component_policy;
        let first = policy.check(Axis::X, x.unwrap_or(T::ZERO))?;
        Ok(Self {
            x: first,
            y: policy.check(Axis::Y, y.unwrap_or(first))?,
        })
    }

    /// Component-wise sum `a + b`.
    pub fn add(a: &Self, b: &Self) -> Self {
        Self::new(a.x + b.x, a.y + b.y)
    }

    /// Component-wise difference `a - b`.
    pub fn subtract(a: &Self, b: &Self) -> Self {
        Self::new(a.x - b.x, a.y - b.y)
    }

    /// Component-wise product.
    pub fn mult(a: &Self, b: &Self) -> Self {
        Self::new(a.x * b.x, a.y * b.y)
    }

    /// `a` with both components multiplied by `scalar`.
    pub fn scale(a: &Self, scalar: T) -> Self {
        Self::new(a.x * scalar, a.y * scalar)
    }

    /// Sum of the pairwise component products.
    pub fn dot(&self, b: &Self) -> T {
        self.x * b.x + self.y * b.y
    }

    /// Euclidean length.
    pub fn len(&self) -> T {
        self.len2().sqrt()
    }

    /// Squared length (avoids sqrt)
    pub fn len2(&self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// Unit-length copy; the zero vector stays zero.
    pub fn normalize(&self) -> Self {
        let len = self.divisor();
        Self::new(self.x / len, self.y / len)
    }

    /// Unit-length copy with both components non-negative.
    pub fn unit(&self) -> Self {
        let len = self.divisor();
        Self::new((self.x / len).abs(), (self.y / len).abs())
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
        self
    }

    /// Subtract `subtrahend` from this vector in place.
    pub fn subtract_mut(&mut self, subtrahend: &Self) -> &mut Self {
        self.x = self.x - subtrahend.x;
        self.y = self.y - subtrahend.y;
        self
    }

    /// Multiply component-wise by `factor` in place.
    pub fn mult_mut(&mut self, factor: &Self) -> &mut Self {
        self.x = self.x * factor.x;
        self.y = self.y * factor.y;
        self
    }

    /// Scale in place.
    pub fn scale_mut(&mut self, scalar: T) -> &mut Self {
        self.x = self.x * scalar;
        self.y = self.y * scalar;
        self
    }

    /// Copy `x` and `y` from any planar source. A `Vector3` source has its
    /// `z` ignored.
    pub fn set<P: Planar<T>>(&mut self, source: &P) -> &mut Self {
        self.x = source.x();
        self.y = source.y();
        self
    }

    /// Overwrite the components; see [`Vector2::from_components`]. On error
    /// the vector is left unchanged.
    pub fn set_components(&mut self, x: Option<T>, y: Option<T>) -> Result<&mut Self, VectorError> {
        self.set_components_with(&NumericsConfig::default(), x, y)
    }

    /// Same as [`Vector2::set_components`] with an explicit validation policy.
    pub fn set_components_with(
        &mut self,
        config: &NumericsConfig,
        x: Option<T>,
        y: Option<T>,
    ) -> Result<&mut Self, VectorError> {
        *self = Self::from_components_with(config, x, y)?;
        Ok(self)
    }

    /// Lift into three dimensions with the given `z`.
    pub fn extend(&self, z: T) -> Vector3<T> {
        Vector3::new(self.x, self.y, z)
    }

    /// Render with the precision from `config`.
    pub fn display_with(&self, config: &NumericsConfig) -> String {
        format!("{:.*}", config.display_precision, self)
    }

    /// Components as f32 in `x, y` order.
    pub fn to_buffer(&self) -> [f32; 2] {
        [self.x.to_f32(), self.y.to_f32()]
    }

    /// Inverse of [`Vector2::to_buffer`]; values are taken as given.
    pub fn from_buffer(buffer: [f32; 2]) -> Self {
        Self::new(T::from_f32(buffer[0]), T::from_f32(buffer[1]))
    }

    /// The 8-byte little-endian wire form.
    pub fn to_le_bytes(&self) -> [u8; 8] {
        let mut bytes = [0u8; 8];
        byteorder::LittleEndian::write_f32_into(&self.to_buffer(), &mut bytes);
        bytes
    }

    /// Write the wire form into the front of `out`, returning the byte count.
    pub fn write_le_bytes(&self, out: &mut [u8]) -> Result<usize, VectorError> {
        wire::write_f32s(&self.to_buffer(), out)
    }

    /// Read the wire form from the front of `bytes`, rejecting non-finite components.
    pub fn read_le_bytes(bytes: &[u8]) -> Result<Self, VectorError> {
        let [x, y] = wire::read_f32s::<2>(bytes)?;
        let policy = NumericsConfig::strict().component_policy;
        Ok(Self::new(
            T::from_f32(policy.check(Axis::X, x)?),
            T::from_f32(policy.check(Axis::Y, y)?),
        ))
    }
}

impl<T: FloatingPoint> Default for Vector2<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: FloatingPoint> Planar<T> for Vector2<T> {
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

impl<T: FloatingPoint> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(NumericsConfig::DEFAULT_DISPLAY_PRECISION);
        write!(f, "{{{:.*}, {:.*}}}", p, self.x, p, self.y)
    }
}

impl<T: FloatingPoint> Add for Vector2<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: FloatingPoint> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<T: FloatingPoint> Mul for Vector2<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }
}

impl<T: FloatingPoint> Mul<T> for Vector2<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl<T: FloatingPoint> Neg for Vector2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: FloatingPoint> AddAssign for Vector2<T> {
    fn add_assign(&mut self, other: Self) {
        self.add_mut(&other);
    }
}

impl<T: FloatingPoint> SubAssign for Vector2<T> {
    fn sub_assign(&mut self, other: Self) {
        self.subtract_mut(&other);
    }
}

impl<T: FloatingPoint> MulAssign for Vector2<T> {
    fn mul_assign(&mut self, other: Self) {
        self.mult_mut(&other);
    }
}

impl<T: FloatingPoint> MulAssign<T> for Vector2<T> {
    fn mul_assign(&mut self, scalar: T) {
        self.scale_mut(scalar);
    }
}

impl<T: FloatingPoint> From<(T, T)> for Vector2<T> {
    fn from(tuple: (T, T)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}

impl<T: FloatingPoint> From<[T; 2]> for Vector2<T> {
    fn from(array: [T; 2]) -> Self {
        Self::new(array[0], array[1])
    }
}

impl<T: FloatingPoint> From<Vector2<T>> for (T, T) {
    fn from(v: Vector2<T>) -> Self {
        (v.x, v.y)
    }
}

impl<T: FloatingPoint> From<Vector2<T>> for [T; 2] {
    fn from(v: Vector2<T>) -> Self {
        [v.x, v.y]
    }
}

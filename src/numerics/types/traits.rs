// src/numerics/types/traits.rs
// Scalar trait for the vector types and the {x, y} capability both variants share.

/// FloatingPoint is the scalar trait used by the numerics types.
///
/// Note: We require Copy, PartialOrd, Display and the basic arithmetic ops on
/// Self. The associated constants let the canonical vectors be built in const
/// context.
pub trait FloatingPoint:
Copy + PartialOrd + core::fmt::Debug + core::fmt::Display
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Div<Output = Self>
+ core::ops::Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn is_nan(self) -> bool;
    fn is_finite(self) -> bool;

    /// Narrow to the f32 wire representation.
    fn to_f32(self) -> f32;
    fn from_f32(value: f32) -> Self;

    /// Widen for error reporting.
    fn to_f64(self) -> f64;
}

impl FloatingPoint for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn sqrt(self) -> Self { f32::sqrt(self) }
    fn abs(self) -> Self { f32::abs(self) }
    fn is_nan(self) -> bool { f32::is_nan(self) }
    fn is_finite(self) -> bool { f32::is_finite(self) }
    fn to_f32(self) -> f32 { self }
    fn from_f32(value: f32) -> Self { value }
    fn to_f64(self) -> f64 { self as f64 }
}

impl FloatingPoint for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn sqrt(self) -> Self { f64::sqrt(self) }
    fn abs(self) -> Self { f64::abs(self) }
    fn is_nan(self) -> bool { f64::is_nan(self) }
    fn is_finite(self) -> bool { f64::is_finite(self) }
    fn to_f32(self) -> f32 { self as f32 }
    fn from_f32(value: f32) -> Self { value as f64 }
    fn to_f64(self) -> f64 { self }
}

/// Minimal read/write access to the `x` and `y` components.
///
/// Both `Vector2` and `Vector3` implement it, which is what lets
/// `Vector2::set` copy from either variant without the two being
/// substitutable for each other.
pub trait Planar<T: FloatingPoint> {
    fn x(&self) -> T;
    fn y(&self) -> T;
    fn set_x(&mut self, value: T);
    fn set_y(&mut self, value: T);
}

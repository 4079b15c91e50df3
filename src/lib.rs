//! 2D and 3D `f64` vectors for graphics, physics and simulation code.
//!
//! [`Vector2`] and [`Vector3`] are plain `Copy` values with public fields.
//! In-place arithmetic goes through the compound assignment operators
//! (`+=`, `-=`, component-wise `*=` and `/=`), queries take `self` by value.

pub mod vec;
pub mod convert;
pub mod error;

pub use error::VectorError;
pub use vec::{Vector2, Vector3};

/// Operations shared by [`Vector2`] and [`Vector3`], for code that works on
/// either dimension.
pub trait Vector:
    Copy
    + Default
    + PartialEq
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<f64, Output = Self>
    + core::ops::Neg<Output = Self>
{
    const DIM: usize;

    fn dot(self, b: Self) -> f64;
    fn magnitude_squared(self) -> f64;
    fn angle_radians(self) -> f64;
    fn is_zero(self) -> bool;
    fn normalize(&mut self);
    fn lerp(&mut self, b: Self, t: f64);
    fn clamp_magnitude(&mut self, max_value: f64);

    fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    fn distance(self, b: Self) -> f64 {
        (self - b).magnitude()
    }
}

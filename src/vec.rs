use core::ops;
use core::fmt;

use bytemuck::{Pod, Zeroable};
use log::trace;

macro_rules! vec_op_impl {
    ($trait: ident, $func: ident, $v: ident, $($e: ident),*) => {
        impl ops::$trait<$v> for $v {
            type Output = $v;

            #[inline]
            fn $func(self, rhs: $v) -> $v {
                $v { $( $e: ops::$trait::$func(self.$e, rhs.$e), )* }
            }
        }
    }
}

macro_rules! vec_assign_op_impl {
    ($trait: ident, $func: ident, $v: ident, $($e: ident),*) => {
        impl ops::$trait<$v> for $v {
            #[inline]
            fn $func(&mut self, rhs: $v) {
                $( ops::$trait::$func(&mut self.$e, rhs.$e); )*
            }
        }
    }
}

macro_rules! scalar_op_impl {
    ($trait: ident, $func: ident, $v: ident, $($e: ident),*) => {
        impl ops::$trait<f64> for $v {
            type Output = $v;

            #[inline]
            fn $func(self, rhs: f64) -> $v {
                $v { $( $e: ops::$trait::$func(self.$e, rhs), )* }
            }
        }
    }
}

macro_rules! scalar_assign_op_impl {
    ($trait: ident, $func: ident, $v: ident, $($e: ident),*) => {
        impl ops::$trait<f64> for $v {
            #[inline]
            fn $func(&mut self, rhs: f64) {
                $( ops::$trait::$func(&mut self.$e, rhs); )*
            }
        }
    }
}

macro_rules! vec_impl {
    ($(#[$meta: meta])* $v: ident, $n: expr, $($e: ident),*) => {

        $(#[$meta])*
        #[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
        #[repr(C)]
        pub struct $v {
            $( pub $e: f64, )*
        }

        impl $v {
            pub const ZERO: $v = $v { $( $e: 0.0, )* };

            #[inline]
            pub const fn new($( $e: f64, )*) -> $v {
                $v { $( $e, )* }
            }

            #[inline]
            pub const fn splat(a: f64) -> $v {
                $v { $( $e: a, )* }
            }

            #[inline]
            pub fn to_array(self) -> [f64; $n] {
                bytemuck::cast(self)
            }

            #[inline]
            pub fn as_array(&self) -> &[f64; $n] {
                bytemuck::cast_ref(self)
            }

            #[inline]
            pub fn min(self, b: $v) -> $v {
                $v { $( $e: self.$e.min(b.$e), )* }
            }

            #[inline]
            pub fn max(self, b: $v) -> $v {
                $v { $( $e: self.$e.max(b.$e), )* }
            }

            /// Multiplies every component by `s`.
            #[inline]
            pub fn scale(&mut self, s: f64) {
                $( self.$e *= s; )*
            }

            /// Negates every component, flipping the direction while keeping
            /// the magnitude.
            #[inline]
            pub fn bounce(&mut self) {
                $( self.$e = -self.$e; )*
            }

            #[inline]
            pub fn clear(&mut self) {
                $( self.$e = 0.0; )*
            }

            /// True only when every component is exactly zero.
            #[inline]
            pub fn is_zero(self) -> bool {
                $( self.$e == 0.0 )&&*
            }

            #[inline]
            pub fn dot(self, b: $v) -> f64 {
                // Adding negative zero (-0.0) is a nop in IEEE 754 floating
                // point, while adding positive zero can change the sign of
                // negative zero, thus llvm only optimizes out (-0.0).
                $( self.$e * b.$e + )* (-0.0)
            }

            #[inline]
            pub fn magnitude_squared(self) -> f64 {
                $v::dot(self, self)
            }

            #[inline]
            pub fn magnitude(self) -> f64 {
                $v::magnitude_squared(self).sqrt()
            }

            #[inline]
            pub fn distance_squared(self, b: $v) -> f64 {
                (self - b).magnitude_squared()
            }

            #[inline]
            pub fn distance(self, b: $v) -> f64 {
                (self - b).magnitude()
            }

            /// Angle from the positive X axis in radians, in `(-π, π]`.
            /// Only `x` and `y` take part.
            #[inline]
            pub fn angle_radians(self) -> f64 {
                self.y.atan2(self.x)
            }

            /// Angle from the positive X axis in degrees, wrapped into `[0, 360)`.
            #[inline]
            pub fn angle_degrees(self) -> f64 {
                (self.angle_radians().to_degrees() + 360.0) % 360.0
            }

            /// Rescales to unit length. The zero vector is left untouched.
            pub fn normalize(&mut self) {
                let length2 = self.magnitude_squared();
                if length2 == 0.0 {
                    trace!("{} normalize on zero vector ignored", stringify!($v));
                    return;
                }

                let length = length2.sqrt();
                $( self.$e /= length; )*
            }

            #[inline]
            pub fn normalized(mut self) -> $v {
                self.normalize();
                self
            }

            /// Moves towards `b` by `t`. `t` is not clamped, values outside
            /// `[0, 1]` extrapolate.
            #[inline]
            pub fn lerp(&mut self, b: $v, t: f64) {
                $( self.$e += (b.$e - self.$e) * t; )*
            }

            #[inline]
            pub fn lerped(mut self, b: $v, t: f64) -> $v {
                self.lerp(b, t);
                self
            }

            /// Caps the magnitude at `max_value`, keeping the direction.
            ///
            /// Vectors already within the limit, the zero vector included, are
            /// not modified. The comparison is done on squared magnitudes so a
            /// negative `max_value` acts like its absolute value and flips the
            /// direction of vectors it shortens.
            pub fn clamp_magnitude(&mut self, max_value: f64) {
                if max_value < 0.0 {
                    trace!("{} clamp_magnitude with negative limit {}", stringify!($v), max_value);
                }

                let length2 = self.magnitude_squared();
                if length2 <= max_value * max_value {
                    return;
                }

                let s = max_value / length2.sqrt();
                $( self.$e *= s; )*
            }

            #[inline]
            pub fn clamped_magnitude(mut self, max_value: f64) -> $v {
                self.clamp_magnitude(max_value);
                self
            }
        }

        impl crate::Vector for $v {
            const DIM: usize = $n;

            fn dot(self, b: $v) -> f64 { $v::dot(self, b) }
            fn magnitude_squared(self) -> f64 { $v::magnitude_squared(self) }
            fn angle_radians(self) -> f64 { $v::angle_radians(self) }
            fn is_zero(self) -> bool { $v::is_zero(self) }
            fn normalize(&mut self) { $v::normalize(self) }
            fn lerp(&mut self, b: $v, t: f64) { $v::lerp(self, b, t) }
            fn clamp_magnitude(&mut self, max_value: f64) { $v::clamp_magnitude(self, max_value) }
        }

        impl fmt::Display for $v {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}({})", stringify!($v),
                        vec![$(
                           format!("{:.prec$}", self.$e, prec = f.precision().unwrap_or(3)),
                        )*].join(", "))
            }
        }

        impl ops::Neg for $v {
            type Output = $v;

            #[inline]
            fn neg(self) -> $v {
                $v { $( $e: -self.$e, )* }
            }
        }

        impl ops::Mul<$v> for f64 {
            type Output = $v;

            #[inline]
            fn mul(self, rhs: $v) -> $v {
                $v { $( $e: self * rhs.$e, )* }
            }
        }

        vec_op_impl!(Add, add, $v, $($e),*);
        vec_op_impl!(Sub, sub, $v, $($e),*);
        vec_op_impl!(Mul, mul, $v, $($e),*);
        vec_op_impl!(Div, div, $v, $($e),*);

        vec_assign_op_impl!(AddAssign, add_assign, $v, $($e),*);
        vec_assign_op_impl!(SubAssign, sub_assign, $v, $($e),*);
        vec_assign_op_impl!(MulAssign, mul_assign, $v, $($e),*);
        vec_assign_op_impl!(DivAssign, div_assign, $v, $($e),*);

        scalar_op_impl!(Mul, mul, $v, $($e),*);
        scalar_op_impl!(Div, div, $v, $($e),*);

        scalar_assign_op_impl!(MulAssign, mul_assign, $v, $($e),*);
        scalar_assign_op_impl!(DivAssign, div_assign, $v, $($e),*);
    }
}

vec_impl!(
    /// A 2D vector of `f64` components.
    ///
    /// Arithmetic between vectors is component-wise. Division is not guarded:
    /// dividing by a zero component yields an infinity or NaN.
    Vector2, 2, x, y
);

vec_impl!(
    /// A 3D vector of `f64` components. Same operation set as [`Vector2`],
    /// angles are measured on the XY plane.
    Vector3, 3, x, y, z
);

impl Vector2 {
    pub const X: Vector2 = Vector2::new(1.0, 0.0);
    pub const Y: Vector2 = Vector2::new(0.0, 1.0);
}

impl Vector3 {
    pub const X: Vector3 = Vector3::new(1.0, 0.0, 0.0);
    pub const Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    pub const Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    #[inline]
    pub fn cross(self, b: Vector3) -> Vector3 {
        Vector3 {
            x: self.y * b.z - self.z * b.y,
            y: self.z * b.x - self.x * b.z,
            z: self.x * b.y - self.y * b.x,
        }
    }
}

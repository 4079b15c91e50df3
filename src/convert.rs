use crate::error::VectorError;
use crate::vec::{Vector2, Vector3};

impl Vector2 {
    /// Lifts into 3D with `z = 0`.
    #[inline]
    pub fn to_vector3(self) -> Vector3 {
        self.extend(0.0)
    }

    #[inline]
    pub fn extend(self, z: f64) -> Vector3 {
        Vector3 { x: self.x, y: self.y, z }
    }
}

impl Vector3 {
    /// Drops `z`. Use `Vector2::try_from` when `z` must be zero.
    #[inline]
    pub fn to_vector2(self) -> Vector2 {
        Vector2 { x: self.x, y: self.y }
    }
}

impl From<Vector2> for Vector3 {
    fn from(v: Vector2) -> Vector3 {
        v.to_vector3()
    }
}

impl TryFrom<Vector3> for Vector2 {
    type Error = VectorError;

    fn try_from(v: Vector3) -> Result<Vector2, VectorError> {
        if v.z != 0.0 {
            return Err(VectorError::NonZeroZ { z: v.z });
        }
        Ok(v.to_vector2())
    }
}

macro_rules! array_convert_impl {
    ($v: ident, $n: expr) => {
        impl From<[f64; $n]> for $v {
            #[inline]
            fn from(a: [f64; $n]) -> $v {
                bytemuck::cast(a)
            }
        }

        impl From<$v> for [f64; $n] {
            #[inline]
            fn from(v: $v) -> [f64; $n] {
                v.to_array()
            }
        }

        impl TryFrom<&[f64]> for $v {
            type Error = VectorError;

            fn try_from(s: &[f64]) -> Result<$v, VectorError> {
                if s.len() != $n {
                    return Err(VectorError::LengthMismatch { expected: $n, actual: s.len() });
                }
                let mut a = [0.0; $n];
                a.copy_from_slice(s);
                Ok(a.into())
            }
        }
    }
}

array_convert_impl!(Vector2, 2);
array_convert_impl!(Vector3, 3);

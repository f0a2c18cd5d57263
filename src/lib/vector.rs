//! Homogeneous vector definition

use super::{DefaultType, DEFAULT_DIM};

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use paste::paste;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
/// Vector operation error.
pub enum Error {
    #[error("Cannot normalize a zero-length vector")]
    /// The vector has no direction (e.g. a ray built with a null direction).
    ZeroLength,
}

#[derive(PartialEq, Clone, Copy, Debug)]
/// DIM-dimensional vector of TYPE values.
pub struct Vector<const DIM: usize = DEFAULT_DIM, TYPE = DefaultType> {
    /// Coordinate vector.
    pub inner: [TYPE; DIM],
}

/// Homogeneous coordinate: `w = 1` for positions, `w = 0` for directions.
pub type Vec4 = Vector<4, f64>;

impl<const DIM: usize, TYPE: Default + Copy> Default for Vector<DIM, TYPE> {
    fn default() -> Self {
        Self {
            inner: [TYPE::default(); DIM],
        }
    }
}

impl<const DIM: usize, TYPE> Index<usize> for Vector<DIM, TYPE> {
    type Output = TYPE;

    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl<const DIM: usize, TYPE> IndexMut<usize> for Vector<DIM, TYPE> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.inner[index]
    }
}

macro_rules! into_primitive_array {
    ($($target:ty),+ $(,)?) => {
        $(
            impl<const DIM: usize> From<Vector<DIM, $target>> for [$target; DIM] {
                fn from(value: Vector<DIM, $target>) -> Self {
                    value.inner
                }
            }

            impl<const DIM: usize> From<[$target; DIM]> for Vector<DIM, $target> {
                fn from(value: [$target; DIM]) -> Self {
                    Self {
                        inner: value
                    }
                }
            }
        )+
    };
}

into_primitive_array!(f64);

macro_rules! impl_vec_vec_op {
    ($trait:ident, $function:ident, $($op:tt)+) => {
        paste! {
            impl<const DIM: usize, TYPE: Copy + [<$trait Assign>]<TYPE>> [<$trait Assign>]<Self> for Vector<DIM, TYPE> {
                fn [<$function _assign>](&mut self, rhs: Self) {
                    for (l, r) in self.inner.iter_mut().zip(rhs.inner.iter()) {
                        *l $($op)+ *r;
                    }
                }
            }

            impl<const DIM: usize, TYPE: Copy + [<$trait Assign>]<TYPE>> $trait<Self> for Vector<DIM, TYPE> {
                type Output = Self;

                fn $function(mut self, rhs: Self) -> Self::Output {
                    self $($op)+ rhs;
                    self
                }
            }
        }
    }
}

impl_vec_vec_op! (Add, add, +=);
impl_vec_vec_op! (Sub, sub, -=);

macro_rules! impl_vec_type_op {
    ($trait:ident, $function:ident, $($op:tt)+) => {
        paste! {
            impl<const DIM: usize, TYPE: Copy + [<$trait Assign>]<TYPE>> [<$trait Assign>]<TYPE> for Vector<DIM, TYPE> {
                fn [<$function _assign>](&mut self, rhs: TYPE) {
                    for v in self.inner.as_mut_slice() {
                        *v $($op)+ rhs;
                    }
                }
            }

            impl<const DIM: usize, TYPE: Copy + [<$trait Assign>]<TYPE>> $trait<TYPE> for Vector<DIM, TYPE> {
                type Output = Self;

                fn $function(mut self, rhs: TYPE) -> Self::Output {
                    self $($op)+ rhs;
                    self
                }
            }
        }
    }
}

impl_vec_type_op! (Mul, mul, *=);
impl_vec_type_op! (Div, div, /=);

impl<const DIM: usize, TYPE: Copy + Neg<Output = TYPE>> Neg for Vector<DIM, TYPE> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        for v in self.inner.iter_mut() {
            *v = -*v;
        }

        self
    }
}

impl<const DIM: usize, TYPE: Copy + Default + Add<Output = TYPE> + Mul<Output = TYPE>>
    Vector<DIM, TYPE>
{
    #[inline]
    /// Get squared length of the vector, slightly faster than [Vector::len].
    pub fn len_sq(&self) -> TYPE {
        self.dot_product(self)
    }

    /// Perform dot product with `other`.
    pub fn dot_product(&self, other: &Self) -> TYPE {
        self.inner
            .iter()
            .zip(other.inner.iter())
            .fold(TYPE::default(), |acc, cur| acc + *cur.0 * *cur.1)
    }
}

impl<const DIM: usize> Vector<DIM, f64> {
    #[inline]
    /// Get length of the vector.
    pub fn len(&self) -> f64 {
        self.len_sq().sqrt()
    }

    /// Get normalized vector pointing in the same direction.
    pub fn normalize(&self) -> Result<Self, Error> {
        let len = self.len();

        if len == 0. {
            Err(Error::ZeroLength)
        } else {
            Ok(*self / len)
        }
    }

    /// Component-wise comparison within an absolute `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.inner
            .iter()
            .zip(other.inner.iter())
            .all(|(l, r)| (l - r).abs() <= tolerance)
    }
}

impl Vector<4, f64> {
    /// Create a homogeneous vector from raw components.
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self {
            inner: [x, y, z, w],
        }
    }

    /// Create a position (`w = 1`).
    pub const fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.)
    }

    /// Create a direction (`w = 0`).
    pub const fn direction(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.)
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn x(&self) -> f64 {
        self.inner[0]
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn y(&self) -> f64 {
        self.inner[1]
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn z(&self) -> f64 {
        self.inner[2]
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn w(&self) -> f64 {
        self.inner[3]
    }

    /// Whether this is a position.
    pub fn is_point(&self) -> bool {
        self.w() == 1.
    }

    /// Whether this is a direction.
    pub fn is_direction(&self) -> bool {
        self.w() == 0.
    }

    /// Perform cross product with `other`, ignoring `w`. The result is always a direction.
    pub fn cross_product(&self, other: &Self) -> Self {
        Self::direction(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }

    /// Mirror this direction around `normal`: `v - n * 2 * (v . n)`.
    pub fn reflect(&self, normal: &Self) -> Self {
        *self - *normal * 2. * self.dot_product(normal)
    }
}

//! Square matrices, cofactor-expansion inversion and 3D transformation builders.

use std::ops::Mul;

use crate::{
    vector::{self, Vec4},
    EPSILON,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
/// Matrix operation error.
pub enum Error {
    #[error("Matrix is not invertible (determinant is 0): {0:?}")]
    /// Tried to invert a matrix whose determinant is exactly 0.
    Singular(Mat4),

    #[error("Degenerate view orientation: {0}")]
    /// View transform with no defined orientation, e.g. an up vector along the line of sight.
    View(#[from] vector::Error),
}

macro_rules! square_matrix {
    {$($(#[$attr:meta])* $name:ident : $dim:literal),+ $(,)?} => {
        $(
            #[derive(Clone, Copy, Debug, PartialEq)]
            $(#[$attr])*
            pub struct $name {
                /// Row-major matrix data.
                pub inner: [[f64; $dim]; $dim],
            }

            impl $name {
                /// Create a matrix from row-major data.
                pub const fn new(inner: [[f64; $dim]; $dim]) -> Self {
                    Self { inner }
                }

                /// Identity matrix.
                pub fn identity() -> Self {
                    let mut res = Self::new([[0.; $dim]; $dim]);

                    for i in 0..$dim {
                        res.inner[i][i] = 1.;
                    }

                    res
                }

                /// Swap rows and columns.
                pub fn transpose(&self) -> Self {
                    let mut res = *self;

                    for i in 0..$dim {
                        for j in 0..$dim {
                            res.inner[i][j] = self.inner[j][i];
                        }
                    }

                    res
                }

                /// Component-wise comparison within an absolute `tolerance`.
                pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
                    self.inner
                        .iter()
                        .flatten()
                        .zip(other.inner.iter().flatten())
                        .all(|(l, r)| (l - r).abs() <= tolerance)
                }
            }

            impl Default for $name {
                fn default() -> Self {
                    Self::identity()
                }
            }

            impl Mul<$name> for $name {
                type Output = $name;

                fn mul(self, rhs: $name) -> Self::Output {
                    let mut res = Self::new([[0.; $dim]; $dim]);

                    for i in 0..$dim {
                        for j in 0..$dim {
                            for k in 0..$dim {
                                res.inner[i][j] += self.inner[i][k] * rhs.inner[k][j];
                            }
                        }
                    }

                    res
                }
            }
        )+
    };
}

square_matrix! {
    /// 2x2 matrix, base case of the cofactor expansion.
    Mat2: 2,
    /// 3x3 matrix.
    Mat3: 3,
    /// 4x4 matrix operating on homogeneous coordinates.
    Mat4: 4,
}

impl Mat2 {
    /// Get the determinant.
    pub fn determinant(&self) -> f64 {
        self.inner[0][0] * self.inner[1][1] - self.inner[0][1] * self.inner[1][0]
    }
}

macro_rules! cofactor_expansion {
    ($($name:ident ($dim:literal) => $sub:ident),+ $(,)?) => {
        $(
            impl $name {
                /// Copy of the matrix with `row` and `col` removed.
                pub fn submatrix(&self, row: usize, col: usize) -> $sub {
                    let mut res = $sub::new([[0.; $dim - 1]; $dim - 1]);

                    for (i, src_row) in (0..$dim).filter(|&i| i != row).enumerate() {
                        for (j, src_col) in (0..$dim).filter(|&j| j != col).enumerate() {
                            res.inner[i][j] = self.inner[src_row][src_col];
                        }
                    }

                    res
                }

                /// Determinant of the submatrix at `row`, `col`.
                pub fn minor(&self, row: usize, col: usize) -> f64 {
                    self.submatrix(row, col).determinant()
                }

                /// Signed minor.
                pub fn cofactor(&self, row: usize, col: usize) -> f64 {
                    let minor = self.minor(row, col);

                    if (row + col) % 2 == 0 {
                        minor
                    } else {
                        -minor
                    }
                }

                /// Get the determinant by cofactor expansion along the first row.
                pub fn determinant(&self) -> f64 {
                    (0..$dim)
                        .map(|col| self.inner[0][col] * self.cofactor(0, col))
                        .sum()
                }
            }
        )+
    };
}

cofactor_expansion! {
    Mat3 (3) => Mat2,
    Mat4 (4) => Mat3,
}

impl Mat4 {
    /// Invert through the adjugate. Fails if the determinant is exactly 0.
    pub fn inverse(&self) -> Result<Self, Error> {
        let determinant = self.determinant();

        if determinant == 0. {
            return Err(Error::Singular(*self));
        }

        let mut res = Self::identity();

        for row in 0..4 {
            for col in 0..4 {
                res.inner[col][row] = self.cofactor(row, col) / determinant;
            }
        }

        Ok(res)
    }

    /// Apply a translation after the current transformation.
    pub fn translate(self, x: f64, y: f64, z: f64) -> Self {
        translation(x, y, z) * self
    }

    /// Apply a scaling after the current transformation.
    pub fn scale(self, x: f64, y: f64, z: f64) -> Self {
        scaling(x, y, z) * self
    }

    /// Apply a rotation around the X axis after the current transformation.
    pub fn rotate_x(self, angle: f64) -> Self {
        rotation_x(angle) * self
    }

    /// Apply a rotation around the Y axis after the current transformation.
    pub fn rotate_y(self, angle: f64) -> Self {
        rotation_y(angle) * self
    }

    /// Apply a rotation around the Z axis after the current transformation.
    pub fn rotate_z(self, angle: f64) -> Self {
        rotation_z(angle) * self
    }

    /// Apply a shear after the current transformation.
    pub fn shear(self, xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Self {
        shearing(xy, xz, yx, yz, zx, zy) * self
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Self::Output {
        let mut res = Vec4::default();

        for (i, row) in self.inner.iter().enumerate() {
            res[i] = row.iter().zip(rhs.inner.iter()).map(|(m, v)| m * v).sum();
        }

        res
    }
}

/// Translation by `(x, y, z)`. Directions are left untouched.
pub fn translation(x: f64, y: f64, z: f64) -> Mat4 {
    Mat4::new([
        [1., 0., 0., x],
        [0., 1., 0., y],
        [0., 0., 1., z],
        [0., 0., 0., 1.],
    ])
}

/// Axis-aligned scaling.
pub fn scaling(x: f64, y: f64, z: f64) -> Mat4 {
    Mat4::new([
        [x, 0., 0., 0.],
        [0., y, 0., 0.],
        [0., 0., z, 0.],
        [0., 0., 0., 1.],
    ])
}

/// Rotation of `angle` radians around the X axis.
pub fn rotation_x(angle: f64) -> Mat4 {
    let (sin, cos) = angle.sin_cos();

    Mat4::new([
        [1., 0., 0., 0.],
        [0., cos, -sin, 0.],
        [0., sin, cos, 0.],
        [0., 0., 0., 1.],
    ])
}

/// Rotation of `angle` radians around the Y axis.
pub fn rotation_y(angle: f64) -> Mat4 {
    let (sin, cos) = angle.sin_cos();

    Mat4::new([
        [cos, 0., sin, 0.],
        [0., 1., 0., 0.],
        [-sin, 0., cos, 0.],
        [0., 0., 0., 1.],
    ])
}

/// Rotation of `angle` radians around the Z axis.
pub fn rotation_z(angle: f64) -> Mat4 {
    let (sin, cos) = angle.sin_cos();

    Mat4::new([
        [cos, -sin, 0., 0.],
        [sin, cos, 0., 0.],
        [0., 0., 1., 0.],
        [0., 0., 0., 1.],
    ])
}

/// Shear, each component moving in proportion to the two others.
pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Mat4 {
    Mat4::new([
        [1., xy, xz, 0.],
        [yx, 1., yz, 0.],
        [zx, zy, 1., 0.],
        [0., 0., 0., 1.],
    ])
}

/// World-to-eye transform of an observer at `from` looking at `to`, with `up` roughly upwards.
pub fn view_transform(from: Vec4, to: Vec4, up: Vec4) -> Result<Mat4, Error> {
    let forward = (to - from).normalize()?;
    let left = forward.cross_product(&up.normalize()?);
    if left.len_sq() < EPSILON * EPSILON {
        return Err(vector::Error::ZeroLength.into());
    }
    let true_up = left.cross_product(&forward);

    let orientation = Mat4::new([
        [left.x(), left.y(), left.z(), 0.],
        [true_up.x(), true_up.y(), true_up.z(), 0.],
        [-forward.x(), -forward.y(), -forward.z(), 0.],
        [0., 0., 0., 1.],
    ]);

    Ok(orientation * translation(-from.x(), -from.y(), -from.z()))
}

#[derive(Clone, Debug, PartialEq)]
/// Invertible 3D transformation, with its inverse and inverse-transpose computed once.
pub struct Transform {
    matrix: Mat4,
    inverse: Mat4,
    inverse_transpose: Mat4,
}

impl Transform {
    /// Cache the inverse of `matrix`, failing if it is singular.
    pub fn new(matrix: Mat4) -> Result<Self, Error> {
        let inverse = matrix.inverse()?;

        Ok(Self {
            matrix,
            inverse,
            inverse_transpose: inverse.transpose(),
        })
    }

    #[allow(missing_docs)]
    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    #[allow(missing_docs)]
    pub fn inverse(&self) -> &Mat4 {
        &self.inverse
    }

    #[allow(missing_docs)]
    pub fn inverse_transpose(&self) -> &Mat4 {
        &self.inverse_transpose
    }

    /// Map a world-space point or direction to local space.
    pub fn to_local(&self, value: Vec4) -> Vec4 {
        self.inverse * value
    }

    /// Map a local-space normal back to world space. The result is a unit direction.
    pub fn normal_to_world(&self, normal: Vec4) -> Vec4 {
        let mut normal = self.inverse_transpose * normal;
        normal[3] = 0.;
        normal.normalize().unwrap_or(normal)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            matrix: Mat4::identity(),
            inverse: Mat4::identity(),
            inverse_transpose: Mat4::identity(),
        }
    }
}

impl TryFrom<Mat4> for Transform {
    type Error = Error;

    fn try_from(value: Mat4) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

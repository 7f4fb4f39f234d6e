//! Row-major 4x4 pose matrix.
//!
//! [`PoseMatrix`] stores its elements as four explicit rows. Products follow the
//! column-vector convention: a point `p` maps to `M * p` and the translation of a
//! rigid pose lives in column 3 (`m[0][3]`, `m[1][3]`, `m[2][3]`).
//!
//! Conversion to and from `glam` types goes through [`PoseMatrix::to_dmat4`] and
//! [`PoseMatrix::from_dmat4`], which take care of glam's column-major layout.

use std::ops::Mul;

use glam::{DMat3, DMat4, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::{PoseBridgeError, Result};

/// Number of values in a flattened 4x4 matrix.
pub const MATRIX_LEN: usize = 16;

/// A 4x4 matrix of `f64` values with explicit row-major storage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoseMatrix {
    rows: [[f64; 4]; 4],
}

impl Default for PoseMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PoseMatrix {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Creates a matrix from four rows.
    #[must_use]
    pub const fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self { rows }
    }

    /// Assembles a matrix from 16 values taken four at a time as rows 0 to 3.
    ///
    /// Only the count is checked here; finiteness is the converter's concern.
    pub fn from_row_major(values: &[f64]) -> Result<Self> {
        if values.len() != MATRIX_LEN {
            return Err(PoseBridgeError::invalid_input(format!(
                "expected {MATRIX_LEN} values, got {}",
                values.len()
            )));
        }

        let mut rows = [[0.0; 4]; 4];
        for (row, chunk) in rows.iter_mut().zip(values.chunks_exact(4)) {
            row.copy_from_slice(chunk);
        }
        Ok(Self { rows })
    }

    /// Flattens the matrix back into 16 row-major values.
    #[must_use]
    pub fn to_row_major(&self) -> [f64; MATRIX_LEN] {
        let mut values = [0.0; MATRIX_LEN];
        for (chunk, row) in values.chunks_exact_mut(4).zip(self.rows.iter()) {
            chunk.copy_from_slice(row);
        }
        values
    }

    /// Returns all four rows.
    #[must_use]
    pub fn rows(&self) -> &[[f64; 4]; 4] {
        &self.rows
    }

    /// Returns row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 4`.
    #[must_use]
    pub fn row(&self, index: usize) -> [f64; 4] {
        self.rows[index]
    }

    /// Returns the element at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= 4`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    /// Returns the transposed matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut rows = [[0.0; 4]; 4];
        for (i, row) in self.rows.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                rows[j][i] = *value;
            }
        }
        Self { rows }
    }

    /// Matrix product `self * rhs`.
    #[must_use]
    pub fn mul_mat(&self, rhs: &Self) -> Self {
        let mut rows = [[0.0; 4]; 4];
        for (i, out_row) in rows.iter_mut().enumerate() {
            for (j, out) in out_row.iter_mut().enumerate() {
                *out = (0..4).map(|k| self.rows[i][k] * rhs.rows[k][j]).sum();
            }
        }
        Self { rows }
    }

    /// Rotation of `angle` radians about the X axis.
    #[must_use]
    pub fn rotation_x(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, cos, -sin, 0.0],
            [0.0, sin, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Upper-left 3x3 block.
    #[must_use]
    pub fn rotation_block(&self) -> DMat3 {
        let r = &self.rows;
        DMat3::from_cols(
            DVec3::new(r[0][0], r[1][0], r[2][0]),
            DVec3::new(r[0][1], r[1][1], r[2][1]),
            DVec3::new(r[0][2], r[1][2], r[2][2]),
        )
    }

    /// Determinant of the upper-left 3x3 block.
    #[must_use]
    pub fn determinant3(&self) -> f64 {
        self.rotation_block().determinant()
    }

    /// Translation stored in column 3.
    #[must_use]
    pub fn translation(&self) -> DVec3 {
        DVec3::new(self.rows[0][3], self.rows[1][3], self.rows[2][3])
    }

    /// Returns true when every element is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.rows.iter().flatten().all(|v| v.is_finite())
    }

    /// Returns true for a proper rigid transform: orthonormal rotation block with
    /// determinant +1 and a homogeneous last row, within `tolerance`.
    #[must_use]
    pub fn is_rigid(&self, tolerance: f64) -> bool {
        let rotation = self.rotation_block();
        let gram = rotation.transpose() * rotation;
        let orthonormal = gram.abs_diff_eq(DMat3::IDENTITY, tolerance);
        let proper = (rotation.determinant() - 1.0).abs() <= tolerance;
        let homogeneous = self.rows[3]
            .iter()
            .zip([0.0, 0.0, 0.0, 1.0])
            .all(|(a, b)| (a - b).abs() <= tolerance);
        orthonormal && proper && homogeneous
    }

    /// Element-wise comparison within `tolerance`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    /// Converts to a `glam` matrix (same mathematical matrix, column-major storage).
    #[must_use]
    pub fn to_dmat4(&self) -> DMat4 {
        // Rows read as columns give the transpose.
        DMat4::from_cols_array_2d(&self.rows).transpose()
    }

    /// Converts from a `glam` matrix.
    #[must_use]
    pub fn from_dmat4(matrix: DMat4) -> Self {
        Self {
            rows: matrix.transpose().to_cols_array_2d(),
        }
    }
}

impl Mul for PoseMatrix {
    type Output = PoseMatrix;

    fn mul(self, rhs: PoseMatrix) -> PoseMatrix {
        self.mul_mat(&rhs)
    }
}

impl Mul<&PoseMatrix> for &PoseMatrix {
    type Output = PoseMatrix;

    fn mul(self, rhs: &PoseMatrix) -> PoseMatrix {
        self.mul_mat(rhs)
    }
}

impl From<PoseMatrix> for DMat4 {
    fn from(matrix: PoseMatrix) -> Self {
        matrix.to_dmat4()
    }
}

impl From<DMat4> for PoseMatrix {
    fn from(matrix: DMat4) -> Self {
        Self::from_dmat4(matrix)
    }
}

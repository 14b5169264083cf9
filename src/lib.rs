//! # versor
//!
//! Generic quaternions for 3D rotations, no-std compatible. Construction,
//! normalization, inversion, axis-angle and rotation-matrix conversion, all
//! numerically robust at the extremes: tiny angles, magnitudes near
//! `MIN_POSITIVE`, and matrices that are only approximately orthogonal.
//!
//! ## Quick start
//!
//! ```
//! use versor::{Quaternion, Vector3};
//!
//! // Quarter turn about z
//! let z = Vector3::from_array([0.0_f64, 0.0, 1.0]);
//! let q = Quaternion::from_axis_angle(z, core::f64::consts::FRAC_PI_2);
//!
//! let x = Vector3::from_array([1.0, 0.0, 0.0]);
//! let y = Vector3::from_array([0.0, 1.0, 0.0]);
//! assert!((q * x).equal_with_abs_error(&y, 1e-15));
//! assert!((x * q.to_matrix33()).equal_with_abs_error(&y, 1e-15));
//!
//! let back = Quaternion::from_rotation_matrix(&q.to_matrix33());
//! assert!((back.angle() - q.angle()).abs() < 1e-15);
//! ```
//!
//! ## Conventions
//!
//! - `q` rotates `p` as `q · (0, p) · q⁻¹`, right-handed.
//! - Vectors are rows and matrices apply on the right: `p * m`. The matrix
//!   of `a * b` is `b.to_matrix33() * a.to_matrix33()`.
//!
//! ## Modules
//!
//! - [`quaternion`]: [`Quaternion<T>`] with real part `r` and vector part `v`.
//!   Hamilton product, conjugate, inverse, robust length and normalization,
//!   axis-angle and shortest-arc construction, `ln`/`exp`, matrix
//!   conversion ([`extract_quat`], [`rotation_matrix`]), and precision
//!   conversion between `f32` and `f64`.
//!
//! - [`matrix`]: Fixed-size `Matrix<T, M, N>` with const-generic dimensions,
//!   stack-allocated. [`Vector<T, N>`] is a 1-row matrix; [`Vector3`],
//!   [`Matrix3`] and [`Matrix4`] are the shapes rotations use.
//!
//! - [`compare`]: Absolute and relative tolerance comparison. `Matrix` and
//!   `Quaternion` also implement the `approx` traits.
//!
//! - [`traits`]: Element traits:
//!   - [`Scalar`]: all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`]: real floats (`Scalar + Float` plus `approx`), used by quaternions
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm, `std::error::Error` for `QuaternionError` |
//!
//! Without `std`, floats go through num-traits' pure-Rust `libm` backend,
//! which is always enabled.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod compare;
pub mod matrix;
pub mod quaternion;
pub mod traits;

pub use matrix::aliases::{Matrix3, Matrix4};
pub use matrix::vector::{Vector, Vector3, Vector4};
pub use matrix::Matrix;
pub use quaternion::{extract_quat, rotation_matrix, Quaternion, QuaternionError};
pub use traits::{FloatScalar, Scalar};

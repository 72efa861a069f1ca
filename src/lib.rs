//! # mat4gen: deterministic reference fixtures for 4x4 matrix math
//!
//! mat4gen generates expected-value test fixtures for a 4x4 matrix library:
//! random column-major matrices (and 4-vectors), their exact products, and a
//! C++ array-initializer rendering of the triples, written to stdout for an
//! external test suite to compile against.
//!
//! ## Conventions
//!
//! Everything the consuming harness depends on is fixed here:
//!
//! - **Layout**: column-major, element (r, c) at index `c*4 + r`.
//! - **Arithmetic**: products accumulate in index order k = 0..3, one
//!   rounded `f32` multiply and add per term.
//! - **Randomness**: ChaCha8 seeded via `seed_from_u64`, drawn uniformly
//!   from [-5.0, 5.0); one seed maps to one byte-exact output.
//! - **Text**: six fractional digits, `f` suffix, `vec::fmat4` /
//!   `vec::fvec4` brace literals.
//!
//! ## Usage
//!
//! ```
//! use mat4gen::{emit_fixtures, CaseKind, ValueSource};
//!
//! let mut source = ValueSource::from_seed(42);
//! let mut out = Vec::new();
//! emit_fixtures(&mut source, CaseKind::MatMat, 8, &mut out).unwrap();
//! ```
//!
//! The `generate` binary wraps this as `generate [count] [--seed N] [--vec4]`.

pub mod constants;
pub mod emit;
pub mod format;
pub mod matrix;
pub mod random;

// Re-export primary components
pub use emit::{emit_fixtures, CaseKind};
pub use format::{format_case, format_mat4, format_scalar, format_vec4};
pub use matrix::{mat4_multiply, mat4_vec4_multiply, Matrix4, Vector4};
pub use random::ValueSource;

/// Version information for the mat4gen library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Centralized constants for the mat4gen fixture generator
//!
//! This module contains all hardcoded constants used throughout the codebase.
//! All new constants should be added here rather than scattered throughout the code.
//! The emitted text constants are a contract with the consuming test harness
//! and must not change without updating it.

// ============================================================================
// VALUE GENERATION
// ============================================================================

/// Lower bound (inclusive) of the uniform draw range for operand values
pub const VALUE_RANGE_MIN: f32 = -5.0;

/// Upper bound (exclusive) of the uniform draw range for operand values
pub const VALUE_RANGE_MAX: f32 = 5.0;

/// Number of test cases emitted when no count argument is given
pub const DEFAULT_CASE_COUNT: i64 = 8;

// ============================================================================
// FIXTURE TEXT FORMAT
// ============================================================================

/// Fractional digits printed for each scalar literal
pub const SCALAR_FRACTION_DIGITS: usize = 6;

/// Emitted C++ type name for 4x4 matrix literals
pub const MAT4_TYPE_NAME: &str = "vec::fmat4";

/// Emitted C++ type name for 4-vector literals
pub const VEC4_TYPE_NAME: &str = "vec::fvec4";

/// Header comment above the matrix-by-matrix fixture array
pub const MAT_MULTIPLY_HEADER: &str = "// Generated mat4_multiply_test initializer";

/// Array declaration opening the matrix-by-matrix fixture block
pub const MAT_MULTIPLY_DECL: &str = "static const mat4_multiply_test tests[] = {";

/// Header comment above the matrix-by-vector fixture array
pub const MAT_VEC_MULTIPLY_HEADER: &str = "// Generated mat4_vec4_multiply_test initializer";

/// Array declaration opening the matrix-by-vector fixture block
pub const MAT_VEC_MULTIPLY_DECL: &str = "static const mat4_vec4_multiply_test tests[] = {";

/// Closing delimiter terminating a fixture array block
pub const ARRAY_CLOSE: &str = "};";

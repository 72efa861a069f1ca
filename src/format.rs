//! Fixed-format rendering of scalars and aggregate literals
//!
//! Output is a contract with the consuming C++ test harness: every scalar is
//! printed with exactly six fractional digits and an `f` suffix, aggregates
//! use the harness's brace-literal syntax with fixed type names. Rust's
//! formatter is locale-independent and never switches to exponential
//! notation at this precision within the generation range, so the text is
//! byte-stable across platforms.

use crate::constants::{MAT4_TYPE_NAME, SCALAR_FRACTION_DIGITS, VEC4_TYPE_NAME};
use crate::matrix::{Matrix4, Vector4};

/// Renders one scalar as a C++ float literal, e.g. `1.000000f`
pub fn format_scalar(value: f32) -> String {
    format!("{:.*}f", SCALAR_FRACTION_DIGITS, value)
}

fn format_elements(values: &[f32]) -> String {
    values
        .iter()
        .map(|&value| format_scalar(value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders a matrix as a `vec::fmat4{...}` literal in storage order
pub fn format_mat4(matrix: &Matrix4<f32>) -> String {
    format!("{}{{{}}}", MAT4_TYPE_NAME, format_elements(&matrix.values))
}

/// Renders a vector as a `vec::fvec4{...}` literal
pub fn format_vec4(vector: &Vector4<f32>) -> String {
    format!("{}{{{}}}", VEC4_TYPE_NAME, format_elements(&vector.values))
}

/// Renders one fixture line: `    { a, b, expected },`
///
/// The operands are already-rendered aggregate literals; field order
/// (a, b, expected) matches the struct the harness compiles against.
pub fn format_case(a: &str, b: &str, expected: &str) -> String {
    format!("    {{ {}, {}, {} }},", a, b, expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_formatting() {
        assert_eq!(format_scalar(1.0), "1.000000f");
        assert_eq!(format_scalar(-2.759_193_2), "-2.759193f");
        assert_eq!(format_scalar(0.5), "0.500000f");
        assert_eq!(format_scalar(-0.0), "-0.000000f");
    }

    #[test]
    fn test_scalar_rounding() {
        // 6 fractional digits, round to nearest
        assert_eq!(format_scalar(1.234_567_8), "1.234568f");
    }

    #[test]
    fn test_identity_matrix_literal() {
        let rendered = format_mat4(&Matrix4::identity());
        assert_eq!(
            rendered,
            "vec::fmat4{1.000000f, 0.000000f, 0.000000f, 0.000000f, \
             0.000000f, 1.000000f, 0.000000f, 0.000000f, \
             0.000000f, 0.000000f, 1.000000f, 0.000000f, \
             0.000000f, 0.000000f, 0.000000f, 1.000000f}"
        );
    }

    #[test]
    fn test_vec4_literal() {
        let v = Vector4::new([1.5f32, -2.0, 0.0, 4.25]);
        assert_eq!(
            format_vec4(&v),
            "vec::fvec4{1.500000f, -2.000000f, 0.000000f, 4.250000f}"
        );
    }

    #[test]
    fn test_case_line() {
        assert_eq!(format_case("A", "B", "E"), "    { A, B, E },");
    }
}

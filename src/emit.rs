//! Fixture emission pipeline
//!
//! A linear generate-format-emit loop: draw operands, compute the expected
//! product, render one array-initializer line per case. The whole block is
//! bounded by a fixed header comment and declaration and a fixed closing
//! delimiter.

use std::io::{self, Write};

use crate::constants::{
    ARRAY_CLOSE, MAT_MULTIPLY_DECL, MAT_MULTIPLY_HEADER, MAT_VEC_MULTIPLY_DECL,
    MAT_VEC_MULTIPLY_HEADER,
};
use crate::format::{format_case, format_mat4, format_vec4};
use crate::matrix::{mat4_multiply, mat4_vec4_multiply};
use crate::random::ValueSource;

/// The kind of product a fixture block records
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseKind {
    /// 4x4 matrix times 4x4 matrix
    MatMat,
    /// 4x4 matrix times 4-vector
    MatVec,
}

impl CaseKind {
    /// The header comment opening this kind's fixture block
    pub fn header(&self) -> &'static str {
        match self {
            CaseKind::MatMat => MAT_MULTIPLY_HEADER,
            CaseKind::MatVec => MAT_VEC_MULTIPLY_HEADER,
        }
    }

    /// The array declaration opening this kind's fixture block
    pub fn declaration(&self) -> &'static str {
        match self {
            CaseKind::MatMat => MAT_MULTIPLY_DECL,
            CaseKind::MatVec => MAT_VEC_MULTIPLY_DECL,
        }
    }
}

/// Emits a complete fixture array block with `count` generated cases
///
/// Draws operands from `source` (operand A first, then operand B), computes
/// the expected product, and writes one initializer line per case between
/// the fixed opening and closing lines. A negative `count` is clamped to 0,
/// emitting just the empty array block.
pub fn emit_fixtures<W: Write>(
    source: &mut ValueSource,
    kind: CaseKind,
    count: i64,
    out: &mut W,
) -> io::Result<()> {
    let count = count.max(0);

    writeln!(out, "{}", kind.header())?;
    writeln!(out, "{}", kind.declaration())?;

    for _ in 0..count {
        let line = match kind {
            CaseKind::MatMat => {
                let a = source.mat4();
                let b = source.mat4();
                let expected = mat4_multiply(&a, &b);
                format_case(&format_mat4(&a), &format_mat4(&b), &format_mat4(&expected))
            }
            CaseKind::MatVec => {
                let a = source.mat4();
                let b = source.vec4();
                let expected = mat4_vec4_multiply(&a, &b);
                format_case(&format_mat4(&a), &format_vec4(&b), &format_vec4(&expected))
            }
        };
        writeln!(out, "{}", line)?;
    }

    writeln!(out, "{}", ARRAY_CLOSE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit_to_string(seed: u64, kind: CaseKind, count: i64) -> String {
        let mut source = ValueSource::from_seed(seed);
        let mut out = Vec::new();
        emit_fixtures(&mut source, kind, count, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_zero_count_emits_empty_block() {
        let output = emit_to_string(1, CaseKind::MatMat, 0);
        assert_eq!(
            output,
            "// Generated mat4_multiply_test initializer\n\
             static const mat4_multiply_test tests[] = {\n\
             };\n"
        );
    }

    #[test]
    fn test_negative_count_clamps_to_zero() {
        assert_eq!(
            emit_to_string(1, CaseKind::MatMat, -3),
            emit_to_string(1, CaseKind::MatMat, 0)
        );
    }

    #[test]
    fn test_line_structure() {
        let output = emit_to_string(9, CaseKind::MatMat, 5);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "// Generated mat4_multiply_test initializer");
        assert_eq!(lines[1], "static const mat4_multiply_test tests[] = {");
        assert_eq!(lines[7], "};");
        for line in &lines[2..7] {
            assert!(line.starts_with("    { vec::fmat4{"));
            assert!(line.ends_with("} },"));
        }
    }

    #[test]
    fn test_mat_vec_line_structure() {
        let output = emit_to_string(9, CaseKind::MatVec, 2);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "// Generated mat4_vec4_multiply_test initializer");
        assert_eq!(lines[1], "static const mat4_vec4_multiply_test tests[] = {");
        for line in &lines[2..4] {
            // a is a matrix literal, b and expected are vector literals
            assert!(line.starts_with("    { vec::fmat4{"));
            assert_eq!(line.matches("vec::fvec4{").count(), 2);
        }
    }

    #[test]
    fn test_seeded_emission_is_deterministic() {
        assert_eq!(
            emit_to_string(7, CaseKind::MatMat, 4),
            emit_to_string(7, CaseKind::MatMat, 4)
        );
        assert_eq!(
            emit_to_string(7, CaseKind::MatVec, 4),
            emit_to_string(7, CaseKind::MatVec, 4)
        );
    }
}

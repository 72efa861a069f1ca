// Matrix data structures and multiplication kernels

pub mod mat4;
pub mod multiply;

pub use mat4::{Matrix4, Vector4};
pub use multiply::{mat4_multiply, mat4_vec4_multiply};

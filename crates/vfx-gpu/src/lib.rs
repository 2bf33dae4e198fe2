//! GLSL source generation for Y'CbCr inputs.
//!
//! Turns the constants derived by `vfx-ycbcr` into shader text that an
//! effect chain can link into its fragment program. Compilation, linking
//! and texture upload are left to the caller.
//!
//! # Architecture
//!
//! ```text
//! YCbCrInputShader
//!     ├── vfx_ycbcr::ycbcr_to_rgb      -> mat3 + vec3 offset
//!     ├── vfx_ycbcr::chroma_geometries -> vec2 scale/offset per plane
//!     └── shaders::YCBCR_INPUT         -> sampling function
//!             └── replace_prefix (PREFIX(name) -> prefix_name)
//! ```
//!
//! # Example
//!
//! ```rust
//! use vfx_gpu::YCbCrInputShader;
//! use vfx_ycbcr::{LumaStandard, YCbCrFormat};
//!
//! let format = YCbCrFormat::new(LumaStandard::Rec601, false, 256).with_subsampling(2, 1);
//! let shader = YCbCrInputShader::new(format, 720, 576);
//! assert_eq!(shader.chroma_size().unwrap(), (360, 576));
//! let glsl = shader.fragment("input0").unwrap();
//! assert!(glsl.contains("input0_cb_offset"));
//! ```

pub mod glsl;
pub mod shaders;
mod ycbcr;

pub use glsl::{glsl_float, output_glsl_float, output_glsl_mat3, output_glsl_vec2, output_glsl_vec3};
pub use ycbcr::{replace_prefix, YCbCrInputShader};

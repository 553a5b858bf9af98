//! Safe plumbing between host code and the CUDA runtime's texture
//! subsystem: status-code translation with call-site capture, alignment
//! predicates for wide device memory transactions, a compile-time texel
//! format table, and 2-D texture reference binding.
//!
//! Nothing here allocates, copies, or synchronizes device memory; the
//! layer exists so the image kernels above it can bind memory safely and
//! report native failures uniformly. Every component is stateless and
//! callable from any thread; per-thread device selection stays with the
//! caller.
//!
//! Runtime calls go through the [`RuntimeApi`] seam. The real backend
//! (`CudaRuntime`, feature `cuda`) links against the CUDA runtime via
//! `cudatex-sys`; tests substitute recording doubles.

pub mod align;
pub mod border;
pub mod error;
pub mod format;
pub mod image;
pub mod runtime;
pub mod status;
pub mod texture;

pub use border::BorderMode;
pub use error::{CallSite, GpuError, Result};
pub use format::{ChannelFormatDesc, ChannelFormatKind, TexElement};
pub use image::DeviceImage2d;
pub use runtime::{RuntimeApi, TexRef};
pub use status::CudaStatus;
pub use texture::{bind_texture_2d, unbind_texture};

#[cfg(feature = "cuda")]
pub use runtime::CudaRuntime;

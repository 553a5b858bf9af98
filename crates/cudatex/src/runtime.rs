use crate::format::ChannelFormatDesc;
use crate::status::CudaStatus;

/// Opaque handle to a hardware texture reference.
///
/// Crossed as a raw integer for FFI-safety, like device pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TexRef(u64);

impl TexRef {
    pub fn from_raw(raw: u64) -> Self {
        TexRef(raw)
    }

    pub fn as_raw(self) -> u64 {
        self.0
    }
}

/// The native runtime surface this layer consumes.
///
/// Which device a call targets is the calling thread's ambient binding,
/// managed outside this crate; implementations carry no device state of
/// their own. Passing the runtime explicitly keeps the layer free of
/// hidden globals and lets tests substitute a recording double.
pub trait RuntimeApi {
    /// Human-readable description for a status code.
    fn error_string(&self, status: CudaStatus) -> String;

    /// Synchronously bind a pitched 2-D region to a texture reference.
    /// Returns the runtime's verdict; translation is the caller's job.
    fn bind_texture_2d(
        &self,
        tex: TexRef,
        desc: ChannelFormatDesc,
        ptr: u64,
        width: usize,
        height: usize,
        stride_bytes: usize,
    ) -> CudaStatus;

    /// Release an existing texture reference binding.
    fn unbind_texture(&self, tex: TexRef) -> CudaStatus;
}

#[cfg(feature = "cuda")]
mod cuda {
    use std::ffi::{c_void, CStr};

    use super::{RuntimeApi, TexRef};
    use crate::format::ChannelFormatDesc;
    use crate::status::CudaStatus;

    /// Backend calling directly into the CUDA runtime library.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct CudaRuntime;

    impl CudaRuntime {
        pub fn new() -> Self {
            CudaRuntime
        }
    }

    impl RuntimeApi for CudaRuntime {
        fn error_string(&self, status: CudaStatus) -> String {
            let ptr = unsafe { cudatex_sys::cudaGetErrorString(status.raw()) };
            if ptr.is_null() {
                return format!("unknown error {}", status.raw());
            }
            unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
        }

        fn bind_texture_2d(
            &self,
            tex: TexRef,
            desc: ChannelFormatDesc,
            ptr: u64,
            width: usize,
            height: usize,
            stride_bytes: usize,
        ) -> CudaStatus {
            let raw_desc = cudatex_sys::cudaChannelFormatDesc {
                x: desc.x,
                y: desc.y,
                z: desc.z,
                w: desc.w,
                f: desc.kind.as_raw(),
            };
            let code = unsafe {
                cudatex_sys::cudaBindTexture2D(
                    std::ptr::null_mut(),
                    tex.as_raw() as *const c_void,
                    ptr as *const c_void,
                    &raw_desc,
                    width,
                    height,
                    stride_bytes,
                )
            };
            CudaStatus::new(code)
        }

        fn unbind_texture(&self, tex: TexRef) -> CudaStatus {
            let code = unsafe { cudatex_sys::cudaUnbindTexture(tex.as_raw() as *const c_void) };
            CudaStatus::new(code)
        }
    }
}

#[cfg(feature = "cuda")]
pub use cuda::CudaRuntime;

use std::fmt;
use std::marker::PhantomData;

use crate::align::{is_ptr_aligned, is_stride_aligned};
use crate::error::{GpuError, Result};
use crate::format::TexElement;

/// Descriptor of a pitched 2-D region in device memory.
///
/// A non-owning handle: allocation and lifetime belong to the image
/// container that produced the region. The pointer crosses this boundary
/// as a `u64` for FFI-safety.
#[derive(Clone, Copy)]
pub struct DeviceImage2d<T: TexElement> {
    ptr: u64,
    width: usize,
    height: usize,
    stride_bytes: usize,
    _marker: PhantomData<T>,
}

impl<T: TexElement> DeviceImage2d<T> {
    /// Describe a region, validating the descriptor invariants: positive
    /// dimensions and `stride_bytes >= width * size_of::<T>()`.
    ///
    /// The pointer itself is not validated here — the runtime is the
    /// authority on device addresses and rejects bad ones at bind time.
    pub fn new(ptr: u64, width: usize, height: usize, stride_bytes: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GpuError::InvalidDescriptor(format!(
                "empty region: {width}x{height}"
            )));
        }
        let row_bytes = width * std::mem::size_of::<T>();
        if stride_bytes < row_bytes {
            return Err(GpuError::InvalidDescriptor(format!(
                "stride {stride_bytes} shorter than row ({row_bytes} bytes)"
            )));
        }
        Ok(Self::from_raw_parts(ptr, width, height, stride_bytes))
    }

    /// Describe a region without invariant checks.
    ///
    /// Exists so callers can hand a questionable region straight to the
    /// runtime and let it issue the rejection.
    pub fn from_raw_parts(ptr: u64, width: usize, height: usize, stride_bytes: usize) -> Self {
        Self {
            ptr,
            width,
            height,
            stride_bytes,
            _marker: PhantomData,
        }
    }

    /// Raw device pointer as `u64`.
    pub fn device_ptr(&self) -> u64 {
        self.ptr
    }

    /// Raw device pointer as `*const T` for kernel launches.
    pub fn as_ptr(&self) -> *const T {
        self.ptr as *const T
    }

    /// Width in elements.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row stride in bytes. Exceeds `width * size_of::<T>()` for pitched
    /// allocations.
    pub fn stride_bytes(&self) -> usize {
        self.stride_bytes
    }

    /// Total footprint in bytes, last row counted at full stride.
    pub fn size_bytes(&self) -> usize {
        self.stride_bytes * self.height
    }

    /// True iff both the base pointer and the stride lie on `boundary`.
    ///
    /// Vectorized and texture-cached access paths require both.
    pub fn is_aligned(&self, boundary: usize) -> bool {
        is_ptr_aligned(self.ptr, boundary) && is_stride_aligned(self.stride_bytes, boundary)
    }
}

impl<T: TexElement> fmt::Debug for DeviceImage2d<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceImage2d")
            .field("ptr", &format_args!("0x{:x}", self.ptr))
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride_bytes", &self.stride_bytes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_constructor_accepts_pitched_regions() {
        let img = DeviceImage2d::<u8>::new(0x1000, 100, 50, 128).unwrap();
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.stride_bytes(), 128);
        assert_eq!(img.size_bytes(), 128 * 50);
    }

    #[test]
    fn checked_constructor_rejects_short_strides() {
        let err = DeviceImage2d::<f32>::new(0x1000, 100, 50, 256).unwrap_err();
        assert!(matches!(err, GpuError::InvalidDescriptor(_)));
    }

    #[test]
    fn checked_constructor_rejects_empty_regions() {
        assert!(DeviceImage2d::<u8>::new(0x1000, 0, 50, 128).is_err());
        assert!(DeviceImage2d::<u8>::new(0x1000, 100, 0, 128).is_err());
    }

    #[test]
    fn alignment_requires_pointer_and_stride() {
        let img = DeviceImage2d::<u8>::from_raw_parts(0x1000, 100, 50, 128);
        assert!(img.is_aligned(16));

        let odd_ptr = DeviceImage2d::<u8>::from_raw_parts(0x1001, 100, 50, 128);
        assert!(!odd_ptr.is_aligned(16));

        let odd_stride = DeviceImage2d::<u8>::from_raw_parts(0x1000, 100, 50, 130);
        assert!(!odd_stride.is_aligned(16));
    }
}

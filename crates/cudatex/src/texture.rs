use crate::cuda_check;
use crate::error::Result;
use crate::format::TexElement;
use crate::image::DeviceImage2d;
use crate::runtime::{RuntimeApi, TexRef};

/// Bind a pitched 2-D device region to a texture reference.
///
/// The channel format is derived from `T` at compile time; the runtime
/// then associates `tex` with the region for subsequent device-side
/// sampled reads, until the caller rebinds or unbinds. Any rejection
/// (null pointer, zero stride, unsupported format, exhausted reference
/// slots) surfaces immediately as
/// [`GpuError::ApiCall`](crate::GpuError::ApiCall) carrying this call's
/// location; nothing is retried.
///
/// Callers are expected to have validated pointer and stride alignment
/// (see [`crate::align`]) before binding.
pub fn bind_texture_2d<R, T>(rt: &R, tex: TexRef, img: &DeviceImage2d<T>) -> Result<()>
where
    R: RuntimeApi + ?Sized,
    T: TexElement,
{
    let desc = T::CHANNEL_FORMAT;
    cuda_check!(
        rt,
        rt.bind_texture_2d(
            tex,
            desc,
            img.device_ptr(),
            img.width(),
            img.height(),
            img.stride_bytes(),
        )
    )?;

    tracing::trace!(
        tex = tex.as_raw(),
        ptr = img.device_ptr(),
        width = img.width(),
        height = img.height(),
        stride = img.stride_bytes(),
        "bound 2d texture"
    );

    Ok(())
}

/// Release a texture reference binding.
///
/// Sequencing against in-flight kernel launches belongs to the caller;
/// this only issues the call and translates the status.
pub fn unbind_texture<R: RuntimeApi + ?Sized>(rt: &R, tex: TexRef) -> Result<()> {
    cuda_check!(rt, rt.unbind_texture(tex))?;
    tracing::trace!(tex = tex.as_raw(), "unbound texture");
    Ok(())
}

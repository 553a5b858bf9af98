//! Compile-time mapping from texel element types to channel format
//! descriptions.

/// Channel kind for texture element formats.
///
/// Discriminants match the runtime's `cudaChannelFormatKind` values.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelFormatKind {
    Signed = 0,
    Unsigned = 1,
    Float = 2,
}

impl ChannelFormatKind {
    pub fn as_raw(self) -> i32 {
        self as i32
    }
}

/// Bits-per-channel layout plus kind — the texture hardware's view of one
/// element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelFormatDesc {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub w: i32,
    pub kind: ChannelFormatKind,
}

impl ChannelFormatDesc {
    pub const fn scalar(bits: i32, kind: ChannelFormatKind) -> Self {
        Self {
            x: bits,
            y: 0,
            z: 0,
            w: 0,
            kind,
        }
    }

    pub const fn vec2(bits: i32, kind: ChannelFormatKind) -> Self {
        Self {
            x: bits,
            y: bits,
            z: 0,
            w: 0,
            kind,
        }
    }

    pub const fn vec4(bits: i32, kind: ChannelFormatKind) -> Self {
        Self {
            x: bits,
            y: bits,
            z: bits,
            w: bits,
            kind,
        }
    }

    /// Total bits across all channels.
    pub const fn bits_total(&self) -> i32 {
        self.x + self.y + self.z + self.w
    }
}

/// Element types the texture hardware can fetch.
///
/// Closed set: 8/16/32-bit integers and `f32`, as scalars or 2- and
/// 4-channel vectors. Three-channel layouts are not texturable and have
/// no impl.
pub trait TexElement: bytemuck::Pod {
    const CHANNEL_FORMAT: ChannelFormatDesc;
}

macro_rules! texel_impls {
    ($($ty:ty => $bits:expr, $kind:ident;)*) => {
        $(
            impl TexElement for $ty {
                const CHANNEL_FORMAT: ChannelFormatDesc =
                    ChannelFormatDesc::scalar($bits, ChannelFormatKind::$kind);
            }

            impl TexElement for [$ty; 2] {
                const CHANNEL_FORMAT: ChannelFormatDesc =
                    ChannelFormatDesc::vec2($bits, ChannelFormatKind::$kind);
            }

            impl TexElement for [$ty; 4] {
                const CHANNEL_FORMAT: ChannelFormatDesc =
                    ChannelFormatDesc::vec4($bits, ChannelFormatKind::$kind);
            }
        )*
    };
}

texel_impls! {
    u8  => 8,  Unsigned;
    i8  => 8,  Signed;
    u16 => 16, Unsigned;
    i16 => 16, Signed;
    u32 => 32, Unsigned;
    i32 => 32, Signed;
    f32 => 32, Float;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_formats() {
        assert_eq!(
            u8::CHANNEL_FORMAT,
            ChannelFormatDesc::scalar(8, ChannelFormatKind::Unsigned)
        );
        assert_eq!(
            i16::CHANNEL_FORMAT,
            ChannelFormatDesc::scalar(16, ChannelFormatKind::Signed)
        );
        assert_eq!(
            f32::CHANNEL_FORMAT,
            ChannelFormatDesc::scalar(32, ChannelFormatKind::Float)
        );
    }

    #[test]
    fn vector_formats_repeat_the_scalar_width() {
        let rgba = <[u8; 4]>::CHANNEL_FORMAT;
        assert_eq!((rgba.x, rgba.y, rgba.z, rgba.w), (8, 8, 8, 8));
        assert_eq!(rgba.kind, ChannelFormatKind::Unsigned);

        let uv = <[f32; 2]>::CHANNEL_FORMAT;
        assert_eq!((uv.x, uv.y, uv.z, uv.w), (32, 32, 0, 0));
        assert_eq!(uv.kind, ChannelFormatKind::Float);
    }

    #[test]
    fn bits_total_matches_element_size() {
        assert_eq!(
            u8::CHANNEL_FORMAT.bits_total() as usize,
            8 * std::mem::size_of::<u8>()
        );
        assert_eq!(
            <[u32; 4]>::CHANNEL_FORMAT.bits_total() as usize,
            8 * std::mem::size_of::<[u32; 4]>()
        );
        assert_eq!(
            <[i16; 2]>::CHANNEL_FORMAT.bits_total() as usize,
            8 * std::mem::size_of::<[i16; 2]>()
        );
    }

    #[test]
    fn kind_raw_values_match_the_runtime_enum() {
        assert_eq!(ChannelFormatKind::Signed.as_raw(), 0);
        assert_eq!(ChannelFormatKind::Unsigned.as_raw(), 1);
        assert_eq!(ChannelFormatKind::Float.as_raw(), 2);
    }
}

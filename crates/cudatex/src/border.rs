/// Boundary-extension policy for out-of-range reads against a bound
/// region.
///
/// The ordinals are frozen: device-side dispatch tables index boundary
/// kernels by these exact values, so the variants must stay contiguous
/// from zero and in this order.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderMode {
    /// Mirror without repeating the edge sample: `gfedcb|abcdefgh|gfedcba`.
    Reflect101 = 0,
    /// Clamp to the edge sample: `aaaaaa|abcdefgh|hhhhhhh`.
    Replicate = 1,
    /// Fill with a caller-supplied constant.
    Constant = 2,
    /// Mirror including the edge sample: `fedcba|abcdefgh|hgfedcb`.
    Reflect = 3,
    /// Wrap around to the opposite edge: `cdefgh|abcdefgh|abcdefg`.
    Wrap = 4,
}

impl BorderMode {
    pub fn from_i32(v: i32) -> Option<Self> {
        match v {
            0 => Some(Self::Reflect101),
            1 => Some(Self::Replicate),
            2 => Some(Self::Constant),
            3 => Some(Self::Reflect),
            4 => Some(Self::Wrap),
            _ => None,
        }
    }

    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

//! Packed ARGB8888 colors.

pub const BACKGROUND: u32 = 0xFF1E1E1E;
pub const WHITE: u32 = 0xFFFFFFFF;
pub const RED: u32 = 0xFFFF0000;
pub const GREEN: u32 = 0xFF00FF00;
pub const BLUE: u32 = 0xFF0000FF;
pub const YELLOW: u32 = 0xFFFFFF00;
pub const CYAN: u32 = 0xFF00FFFF;
pub const MAGENTA: u32 = 0xFFFF00FF;

/// Split a packed ARGB color into `[r, g, b, a]` bytes.
#[inline]
pub fn to_rgba(color: u32) -> [u8; 4] {
    let [a, r, g, b] = color.to_be_bytes();
    [r, g, b, a]
}

/// Pack RGBA bytes into an ARGB color.
#[inline]
pub fn from_rgba([r, g, b, a]: [u8; 4]) -> u32 {
    u32::from_be_bytes([a, r, g, b])
}

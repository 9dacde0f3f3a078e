use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Debug, Display, Formatter};

/// Extent of a bounded plane, width along x and height along y.
#[derive(Copy, Clone, Default, PartialEq)]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Serialize for Vec2 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let encoded = (f32::to_bits(self.x) as u64) << 32 | f32::to_bits(self.y) as u64;
        serializer.serialize_u64(encoded)
    }
}

impl<'de> Deserialize<'de> for Vec2 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = u64::deserialize(deserializer)?;
        let x = f32::from_bits((encoded >> 32) as u32);
        let y = f32::from_bits(encoded as u32);
        Ok(Vec2 { x, y })
    }
}

impl Debug for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("V2(")?;
        Display::fmt(&self.x, f)?;
        f.write_str(", ")?;
        Display::fmt(&self.y, f)?;
        f.write_str(")")
    }
}

#[inline]
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2 { x, y }
}

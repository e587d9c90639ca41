use bytemuck::{Pod, Zeroable};

/// Four-component float vector, as used for shader vector uniforms.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vec4 {
    pub value: [f32; 4],
}

impl Vec4 {
    pub const ZERO: Self = Self { value: [0.0; 4] };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { value: [x, y, z, w] }
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { value: [v; 4] }
    }

    #[inline]
    pub const fn as_array(&self) -> &[f32; 4] {
        &self.value
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.value.iter().all(|c| c.is_finite())
    }
}

impl From<[f32; 4]> for Vec4 {
    #[inline]
    fn from(value: [f32; 4]) -> Self {
        Self { value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finiteness_checks_every_lane() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert!(v.is_finite());
        assert!(!Vec4::new(0.0, f32::NAN, 0.0, 0.0).is_finite());
        assert!(!Vec4::splat(f32::INFINITY).is_finite());
        assert_eq!(v, Vec4::from([1.0, 2.0, 3.0, 4.0]));
    }
}

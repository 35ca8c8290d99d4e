use core::fmt;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhysVector2 {
    pub x: f32,
    pub y: f32,
}

impl Default for PhysVector2 {
    fn default() -> Self {
        ZERO_VECTOR2
    }
}

impl PhysVector2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn neg(&self) -> Self {
        Self { x: -self.x, y: -self.y }
    }

    pub fn add(&self, other: &Self) -> Self {
        Self { x: self.x + other.x, y: self.y + other.y }
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self { x: self.x - other.x, y: self.y - other.y }
    }

    pub fn mul(&self, other: f32) -> Self {
        Self { x: self.x * other, y: self.y * other }
    }

    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Exact comparison against `(0, 0)`. Rest snapping happens in the
    /// integration step, so a resting body really is zero here.
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl fmt::Display for PhysVector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2[x:{} y:{}]", self.x, self.y)
    }
}

pub static ZERO_VECTOR2: PhysVector2 = PhysVector2 { x: 0.0, y: 0.0 };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_zero_is_exact() {
        assert!(ZERO_VECTOR2.is_zero());
        assert!(PhysVector2::new(-0.0, 0.0).is_zero());
        assert!(!PhysVector2::new(0.001, 0.0).is_zero());
        assert!(!PhysVector2::new(0.0, -2.0).is_zero());
    }

    #[test]
    fn arithmetic() {
        let a = PhysVector2::new(3.0, -1.0);
        let b = PhysVector2::new(1.0, 2.0);
        assert_eq!(a.add(&b), PhysVector2::new(4.0, 1.0));
        assert_eq!(a.sub(&b), PhysVector2::new(2.0, -3.0));
        assert_eq!(a.mul(2.0), PhysVector2::new(6.0, -2.0));
        assert_eq!(a.neg(), PhysVector2::new(-3.0, 1.0));
        assert_eq!(a.dot(&b), 1.0);
    }
}

/// A 2D vector where the components are 32-bit floats.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Vec2f(pub f32, pub f32);

impl Vec2f {
    pub const ZERO: Vec2f = Vec2f(0.0, 0.0);
}

impl std::ops::Add for Vec2f {
    type Output = Vec2f;

    fn add(self, other: Vec2f) -> Vec2f {
        Vec2f(self.0 + other.0, self.1 + other.1)
    }
}

impl std::ops::AddAssign for Vec2f {
    fn add_assign(&mut self, other: Vec2f) {
        self.0 += other.0;
        self.1 += other.1;
    }
}

impl std::ops::Sub for Vec2f {
    type Output = Vec2f;

    fn sub(self, other: Vec2f) -> Vec2f {
        Vec2f(self.0 - other.0, self.1 - other.1)
    }
}

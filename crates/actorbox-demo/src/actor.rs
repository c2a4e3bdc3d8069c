//! The moving entity: position, velocity and size with validated setters.

use actorbox_engine::coords::Vec2;

use crate::error::InvalidArgument;

/// Actor extent in whole logical pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Position, velocity and size of one moving rectangle.
///
/// Invariants, enforced by every constructor and setter:
/// - `position.x >= 0 && position.y >= 0`
/// - `size.width > 0 && size.height > 0`
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    position: Vec2,
    velocity: Vec2,
    size: Size,
}

impl Actor {
    pub fn new(position: Vec2, velocity: Vec2, size: Size) -> Result<Self, InvalidArgument> {
        let mut actor = Self {
            position: Vec2::zero(),
            velocity,
            size: Size::new(1, 1),
        };
        actor.set_position(position)?;
        actor.set_size(size)?;
        Ok(actor)
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Replaces the position; on error the actor is unchanged.
    pub fn set_position(&mut self, position: Vec2) -> Result<(), InvalidArgument> {
        // Written so NaN fails too.
        let valid = position.is_finite() && position.x >= 0.0 && position.y >= 0.0;
        if !valid {
            return Err(InvalidArgument::NegativePosition { x: position.x, y: position.y });
        }
        self.position = position;
        Ok(())
    }

    pub fn set_size(&mut self, size: Size) -> Result<(), InvalidArgument> {
        if !size.is_positive() {
            return Err(InvalidArgument::NonPositiveSize { width: size.width, height: size.height });
        }
        self.size = size;
        Ok(())
    }

    /// Any vector is accepted, including zero and negative components.
    #[inline]
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor() -> Actor {
        Actor::new(Vec2::new(10.0, 20.0), Vec2::new(1.0, 1.0), Size::new(40, 40)).unwrap()
    }

    // ── new ───────────────────────────────────────────────────────────────

    #[test]
    fn new_keeps_fields() {
        let a = actor();
        assert_eq!(a.position(), Vec2::new(10.0, 20.0));
        assert_eq!(a.velocity(), Vec2::new(1.0, 1.0));
        assert_eq!(a.size(), Size::new(40, 40));
    }

    #[test]
    fn new_accepts_origin() {
        assert!(Actor::new(Vec2::zero(), Vec2::zero(), Size::new(1, 1)).is_ok());
    }

    #[test]
    fn new_rejects_negative_position() {
        let err = Actor::new(Vec2::new(-1.0, 0.0), Vec2::zero(), Size::new(10, 10)).unwrap_err();
        assert_eq!(err, InvalidArgument::NegativePosition { x: -1.0, y: 0.0 });
    }

    #[test]
    fn new_rejects_zero_width() {
        let err = Actor::new(Vec2::zero(), Vec2::zero(), Size::new(0, 10)).unwrap_err();
        assert_eq!(err, InvalidArgument::NonPositiveSize { width: 0, height: 10 });
    }

    #[test]
    fn new_rejects_negative_height() {
        assert!(Actor::new(Vec2::zero(), Vec2::zero(), Size::new(10, -3)).is_err());
    }

    // ── set_position ──────────────────────────────────────────────────────

    #[test]
    fn set_position_failure_leaves_actor_untouched() {
        let mut a = actor();
        assert!(a.set_position(Vec2::new(5.0, -0.5)).is_err());
        assert_eq!(a.position(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn set_position_rejects_nan_and_infinity() {
        let mut a = actor();
        assert!(a.set_position(Vec2::new(f32::NAN, 0.0)).is_err());
        assert!(a.set_position(Vec2::new(0.0, f32::INFINITY)).is_err());
    }

    // ── set_size / set_velocity ───────────────────────────────────────────

    #[test]
    fn set_size_rejects_non_positive() {
        let mut a = actor();
        assert!(a.set_size(Size::new(5, 0)).is_err());
        assert_eq!(a.size(), Size::new(40, 40));
        a.set_size(Size::new(5, 6)).unwrap();
        assert_eq!(a.size(), Size::new(5, 6));
    }

    #[test]
    fn set_velocity_is_unconstrained() {
        let mut a = actor();
        a.set_velocity(Vec2::new(-3.0, 0.0));
        assert_eq!(a.velocity(), Vec2::new(-3.0, 0.0));
    }
}

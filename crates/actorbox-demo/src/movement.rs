//! Movement policies: how a renderable's rect advances each tick.

use actorbox_engine::coords::{Rect, Vec2};
use actorbox_engine::input::InputState;
use rand::Rng;

use crate::actor::Actor;
use crate::error::InvalidArgument;

/// Extra offset applied after the pointer is followed.
pub const POINTER_NUDGE: Vec2 = Vec2::splat(1.0);

/// Per-tick input a policy may observe.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TickInput {
    pointer: Option<Vec2>,
}

impl TickInput {
    #[inline]
    pub fn new(pointer: Option<Vec2>) -> Self {
        Self { pointer }
    }

    /// The pointer counts only while it is over the window.
    pub fn from_state(state: &InputState) -> Self {
        Self::new(state.pointer())
    }

    /// Pointer position in window coordinates, `None` when the pointer is
    /// outside the window.
    #[inline]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }
}

/// The closed set of ways an actor moves.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MovementPolicy {
    /// Snap to the pointer, then offset by velocity and [`POINTER_NUDGE`].
    PointerFollow,
    /// One step of a unit random walk per tick; velocity is ignored.
    RandomDrift,
    /// Offset by velocity every tick.
    ConstantVelocity,
}

impl MovementPolicy {
    /// Moves `rect` for one tick and writes its origin back to `actor`.
    ///
    /// A resulting negative position is returned as an error; nothing is
    /// clamped. On error neither `actor` nor `rect` changes.
    pub fn advance<R: Rng + ?Sized>(
        self,
        actor: &mut Actor,
        rect: &mut Rect,
        input: &TickInput,
        rng: &mut R,
    ) -> Result<(), InvalidArgument> {
        let origin = match self {
            MovementPolicy::PointerFollow => {
                let Some(pointer) = input.pointer() else {
                    return Ok(());
                };
                pointer + actor.velocity() + POINTER_NUDGE
            }
            MovementPolicy::RandomDrift => rect.origin + random_step(rng),
            MovementPolicy::ConstantVelocity => rect.origin + actor.velocity(),
        };

        actor.set_position(origin)?;
        rect.origin = origin;
        Ok(())
    }
}

/// Each component drawn uniformly from `{-1, 0, 1}`.
pub fn random_step<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let dx: i32 = rng.gen_range(-1..=1);
    let dy: i32 = rng.gen_range(-1..=1);
    Vec2::new(dx as f32, dy as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::Size;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup(pos: (f32, f32), vel: (f32, f32)) -> (Actor, Rect) {
        let actor = Actor::new(pos.into(), vel.into(), Size::new(20, 20)).unwrap();
        let rect = Rect::new(pos.0, pos.1, 20.0, 20.0);
        (actor, rect)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    // ── ConstantVelocity ──────────────────────────────────────────────────

    #[test]
    fn constant_velocity_single_step() {
        let (mut actor, mut rect) = setup((10.0, 10.0), (2.0, 2.0));
        MovementPolicy::ConstantVelocity
            .advance(&mut actor, &mut rect, &TickInput::default(), &mut rng())
            .unwrap();
        assert_eq!(actor.position(), Vec2::new(12.0, 12.0));
        assert_eq!(rect.origin, actor.position());
    }

    #[test]
    fn constant_velocity_accumulates() {
        let (mut actor, mut rect) = setup((10.0, 10.0), (2.0, 2.0));
        let mut rng = rng();
        for _ in 0..5 {
            MovementPolicy::ConstantVelocity
                .advance(&mut actor, &mut rect, &TickInput::default(), &mut rng)
                .unwrap();
        }
        assert_eq!(actor.position(), Vec2::new(20.0, 20.0));
    }

    #[test]
    fn constant_velocity_into_negative_fails() {
        let (mut actor, mut rect) = setup((1.0, 5.0), (-2.0, 0.0));
        let err = MovementPolicy::ConstantVelocity
            .advance(&mut actor, &mut rect, &TickInput::default(), &mut rng())
            .unwrap_err();
        assert_eq!(err, InvalidArgument::NegativePosition { x: -1.0, y: 5.0 });
        assert_eq!(actor.position(), Vec2::new(1.0, 5.0));
        assert_eq!(rect.origin, Vec2::new(1.0, 5.0));
    }

    #[test]
    fn constant_velocity_keeps_size() {
        let (mut actor, mut rect) = setup((10.0, 10.0), (3.0, -1.0));
        MovementPolicy::ConstantVelocity
            .advance(&mut actor, &mut rect, &TickInput::default(), &mut rng())
            .unwrap();
        assert_eq!(actor.size(), Size::new(20, 20));
        assert_eq!(rect.size, Vec2::new(20.0, 20.0));
    }

    // ── RandomDrift ───────────────────────────────────────────────────────

    #[test]
    fn random_drift_moves_at_most_one_unit() {
        let mut rng = rng();
        for _ in 0..200 {
            let (mut actor, mut rect) = setup((5.0, 5.0), (9.0, 9.0));
            MovementPolicy::RandomDrift
                .advance(&mut actor, &mut rect, &TickInput::default(), &mut rng)
                .unwrap();
            let p = actor.position();
            assert!([4.0, 5.0, 6.0].contains(&p.x), "x = {}", p.x);
            assert!([4.0, 5.0, 6.0].contains(&p.y), "y = {}", p.y);
        }
    }

    #[test]
    fn random_step_covers_every_offset() {
        let mut rng = rng();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            let step = random_step(&mut rng);
            seen.insert((step.x as i32, step.y as i32));
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn random_drift_is_reproducible_with_same_seed() {
        let walk = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let (mut actor, mut rect) = setup((50.0, 50.0), (0.0, 0.0));
            for _ in 0..20 {
                MovementPolicy::RandomDrift
                    .advance(&mut actor, &mut rect, &TickInput::default(), &mut rng)
                    .unwrap();
            }
            actor.position()
        };
        assert_eq!(walk(42), walk(42));
    }

    #[test]
    fn random_drift_off_the_edge_fails() {
        // From the origin some step eventually goes negative.
        let mut rng = rng();
        let (mut actor, mut rect) = setup((0.0, 0.0), (0.0, 0.0));
        let mut failed = false;
        for _ in 0..100 {
            if MovementPolicy::RandomDrift
                .advance(&mut actor, &mut rect, &TickInput::default(), &mut rng)
                .is_err()
            {
                failed = true;
                break;
            }
        }
        assert!(failed);
        assert!(actor.position().x >= 0.0 && actor.position().y >= 0.0);
        assert_eq!(rect.origin, actor.position());
    }

    // ── PointerFollow ─────────────────────────────────────────────────────

    #[test]
    fn pointer_follow_without_pointer_is_a_no_op() {
        let (mut actor, mut rect) = setup((30.0, 40.0), (1.0, 1.0));
        MovementPolicy::PointerFollow
            .advance(&mut actor, &mut rect, &TickInput::new(None), &mut rng())
            .unwrap();
        assert_eq!(actor.position(), Vec2::new(30.0, 40.0));
        assert_eq!(rect.origin, Vec2::new(30.0, 40.0));
    }

    #[test]
    fn pointer_follow_adds_velocity_and_nudge() {
        let (mut actor, mut rect) = setup((0.0, 0.0), (1.0, 1.0));
        let input = TickInput::new(Some(Vec2::new(100.0, 50.0)));
        MovementPolicy::PointerFollow
            .advance(&mut actor, &mut rect, &input, &mut rng())
            .unwrap();
        assert_eq!(actor.position(), Vec2::new(102.0, 52.0));
    }

    #[test]
    fn pointer_follow_does_not_accumulate() {
        let (mut actor, mut rect) = setup((0.0, 0.0), (1.0, 1.0));
        let input = TickInput::new(Some(Vec2::new(10.0, 10.0)));
        let mut rng = rng();
        for _ in 0..3 {
            MovementPolicy::PointerFollow
                .advance(&mut actor, &mut rect, &input, &mut rng)
                .unwrap();
        }
        assert_eq!(actor.position(), Vec2::new(12.0, 12.0));
    }

    #[test]
    fn pointer_follow_with_negative_velocity_near_corner_fails() {
        let (mut actor, mut rect) = setup((0.0, 0.0), (-5.0, 0.0));
        let input = TickInput::new(Some(Vec2::new(2.0, 2.0)));
        let err = MovementPolicy::PointerFollow
            .advance(&mut actor, &mut rect, &input, &mut rng())
            .unwrap_err();
        assert!(matches!(err, InvalidArgument::NegativePosition { .. }));
        assert_eq!(actor.position(), Vec2::zero());
        assert_eq!(rect.origin, Vec2::zero());
    }

    // ── TickInput ─────────────────────────────────────────────────────────

    #[test]
    fn tick_input_reads_pointer_from_state() {
        let mut state = InputState::default();
        assert_eq!(TickInput::from_state(&state).pointer(), None);
        state.pointer_pos = Some(Vec2::new(3.0, 4.0));
        assert_eq!(TickInput::from_state(&state).pointer(), Some(Vec2::new(3.0, 4.0)));
    }
}

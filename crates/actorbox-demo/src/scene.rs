use actorbox_engine::scene::{DrawList, ZIndex};
use rand::Rng;

use crate::error::InvalidArgument;
use crate::movement::TickInput;
use crate::renderable::Renderable;

/// Ordered group of renderables updated and drawn together.
///
/// Insertion order is both update order and paint order (back to front).
#[derive(Debug, Clone, Default)]
pub struct Scene {
    members: Vec<Renderable>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, renderable: Renderable) {
        self.members.push(renderable);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Renderable> {
        self.members.iter()
    }

    /// Updates members in order; the first error stops the pass.
    pub fn update<R: Rng + ?Sized>(&mut self, input: &TickInput, rng: &mut R) -> Result<(), InvalidArgument> {
        for member in &mut self.members {
            member.update(input, rng)?;
        }
        Ok(())
    }

    /// Records every member on layer `z`; later members paint over earlier ones.
    pub fn draw(&self, list: &mut DrawList, z: ZIndex) {
        for member in &self.members {
            member.draw(list, z);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::{Actor, Size};
    use crate::movement::MovementPolicy;
    use actorbox_engine::coords::Vec2;
    use actorbox_engine::paint::Color;
    use actorbox_engine::scene::DrawCmd;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn renderable(x: f32, y: f32, vel: (f32, f32), size: i32, color: &str, policy: MovementPolicy) -> Renderable {
        let actor = Actor::new(Vec2::new(x, y), vel.into(), Size::new(size, size)).unwrap();
        Renderable::new(actor, color, policy).unwrap()
    }

    /// Color of the last rect painted over `p`.
    fn topmost_color_at(list: &mut DrawList, p: Vec2) -> Option<Color> {
        list.iter_in_paint_order()
            .filter_map(|item| {
                let DrawCmd::Rect(cmd) = &item.cmd;
                cmd.rect.contains(p).then_some(cmd.color)
            })
            .last()
    }

    // ── push / len ────────────────────────────────────────────────────────

    #[test]
    fn push_keeps_insertion_order() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());
        scene.push(renderable(0.0, 0.0, (0.0, 0.0), 10, "red", MovementPolicy::RandomDrift));
        scene.push(renderable(0.0, 0.0, (0.0, 0.0), 10, "blue", MovementPolicy::RandomDrift));
        assert_eq!(scene.len(), 2);

        let colors: Vec<_> = scene.iter().map(|r| r.color()).collect();
        assert_eq!(colors, vec![paint("red"), paint("blue")]);
    }

    fn paint(name: &str) -> Color {
        actorbox_engine::paint::lookup(name).unwrap()
    }

    // ── update ────────────────────────────────────────────────────────────

    #[test]
    fn update_advances_every_member() {
        let mut scene = Scene::new();
        scene.push(renderable(10.0, 10.0, (2.0, 2.0), 10, "red", MovementPolicy::ConstantVelocity));
        scene.push(renderable(50.0, 50.0, (-1.0, 0.0), 10, "blue", MovementPolicy::ConstantVelocity));

        let mut rng = StdRng::seed_from_u64(0);
        scene.update(&TickInput::default(), &mut rng).unwrap();

        let positions: Vec<_> = scene.iter().map(|r| r.actor().position()).collect();
        assert_eq!(positions, vec![Vec2::new(12.0, 12.0), Vec2::new(49.0, 50.0)]);
    }

    #[test]
    fn update_stops_at_first_error() {
        let mut scene = Scene::new();
        scene.push(renderable(0.0, 0.0, (-1.0, 0.0), 10, "red", MovementPolicy::ConstantVelocity));
        scene.push(renderable(10.0, 10.0, (1.0, 1.0), 10, "blue", MovementPolicy::ConstantVelocity));

        let mut rng = StdRng::seed_from_u64(0);
        let err = scene.update(&TickInput::default(), &mut rng).unwrap_err();
        assert!(matches!(err, InvalidArgument::NegativePosition { .. }));

        // Second member never ran.
        let second = scene.iter().nth(1).unwrap();
        assert_eq!(second.actor().position(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn positions_stay_non_negative_after_successful_updates() {
        let mut scene = Scene::new();
        scene.push(renderable(210.0, 160.0, (0.0, 0.0), 40, "red", MovementPolicy::RandomDrift));
        scene.push(renderable(110.0, 90.0, (2.0, 2.0), 10, "cyan", MovementPolicy::RandomDrift));

        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            scene.update(&TickInput::default(), &mut rng).unwrap();
            for r in scene.iter() {
                let p = r.actor().position();
                assert!(p.x >= 0.0 && p.y >= 0.0);
            }
        }
    }

    // ── draw ──────────────────────────────────────────────────────────────

    #[test]
    fn later_member_paints_over_earlier_one() {
        let mut scene = Scene::new();
        scene.push(renderable(0.0, 0.0, (0.0, 0.0), 10, "red", MovementPolicy::RandomDrift));
        scene.push(renderable(5.0, 5.0, (0.0, 0.0), 10, "blue", MovementPolicy::RandomDrift));

        let mut list = DrawList::new();
        scene.draw(&mut list, ZIndex::default());

        assert_eq!(topmost_color_at(&mut list, Vec2::new(7.0, 7.0)), Some(paint("blue")));
        assert_eq!(topmost_color_at(&mut list, Vec2::new(2.0, 2.0)), Some(paint("red")));
    }

    #[test]
    fn overlapping_outlines_paint_in_insertion_order() {
        let mut scene = Scene::new();
        scene.push(renderable(0.0, 0.0, (0.0, 0.0), 20, "red", MovementPolicy::RandomDrift));
        scene.push(renderable(10.0, 10.0, (0.0, 0.0), 20, "blue", MovementPolicy::RandomDrift));

        let mut list = DrawList::new();
        scene.draw(&mut list, ZIndex::default());

        // Red's bottom edge crossed by blue's left edge.
        assert_eq!(topmost_color_at(&mut list, Vec2::new(12.0, 17.0)), Some(paint("blue")));
        // Blue's open interior shows red's bottom edge.
        assert_eq!(topmost_color_at(&mut list, Vec2::new(17.0, 17.0)), Some(paint("red")));
        // Nothing drawn inside red's interior.
        assert_eq!(topmost_color_at(&mut list, Vec2::new(8.0, 8.0)), None);
    }
}

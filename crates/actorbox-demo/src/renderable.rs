//! A drawable actor: the actor, its resolved color, its movement policy and
//! the rect it is drawn at.

use actorbox_engine::coords::{Rect, Vec2};
use actorbox_engine::paint::{self, Color};
use actorbox_engine::scene::{DrawList, ZIndex};
use rand::Rng;

use crate::actor::{Actor, Size};
use crate::error::InvalidArgument;
use crate::movement::{MovementPolicy, TickInput};

/// Outline thickness in logical pixels.
pub const BORDER_WIDTH: i32 = 5;

/// Rect outline in local coordinates (origin at the top-left corner).
///
/// The interior is left undrawn. When the border would meet itself the
/// outline degenerates to a single solid rect.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    edges: Vec<Rect>,
    color: Color,
}

impl Outline {
    pub fn new(size: Size, border: i32, color: Color) -> Self {
        let (w, h) = (size.width, size.height);
        let bx = border.clamp(0, w);
        let by = border.clamp(0, h);

        let rect = |x: i32, y: i32, w: i32, h: i32| Rect::new(x as f32, y as f32, w as f32, h as f32);

        let edges = if w <= 2 * bx || h <= 2 * by {
            vec![rect(0, 0, w, h)]
        } else {
            vec![
                rect(0, 0, w, by),
                rect(0, h - by, w, by),
                rect(0, by, bx, h - 2 * by),
                rect(w - bx, by, bx, h - 2 * by),
            ]
        };

        Self { edges, color }
    }

    #[inline]
    pub fn edges(&self) -> &[Rect] {
        &self.edges
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Records every edge translated to `origin`.
    pub fn draw_at(&self, origin: Vec2, list: &mut DrawList, z: ZIndex) {
        for edge in &self.edges {
            list.push_solid_rect(z, edge.translated(origin), self.color);
        }
    }
}

/// An actor together with how it looks and how it moves.
///
/// `rect().origin` always equals `actor().position()`, including after a
/// failed update.
#[derive(Debug, Clone)]
pub struct Renderable {
    actor: Actor,
    color: Color,
    policy: MovementPolicy,
    rect: Rect,
    outline: Outline,
}

impl Renderable {
    /// Fails with [`InvalidArgument::UnknownColor`] when `color_name` is not
    /// in the palette.
    pub fn new(actor: Actor, color_name: &str, policy: MovementPolicy) -> Result<Self, InvalidArgument> {
        let color = paint::lookup(color_name)
            .ok_or_else(|| InvalidArgument::UnknownColor(color_name.to_string()))?;

        let rect = Rect::from_origin_size(actor.position(), actor.size().to_vec2());
        let outline = Outline::new(actor.size(), BORDER_WIDTH, color);

        Ok(Self { actor, color, policy, rect, outline })
    }

    #[inline]
    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn policy(&self) -> MovementPolicy {
        self.policy
    }

    #[inline]
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    pub fn update<R: Rng + ?Sized>(&mut self, input: &TickInput, rng: &mut R) -> Result<(), InvalidArgument> {
        self.policy.advance(&mut self.actor, &mut self.rect, input, rng)
    }

    pub fn draw(&self, list: &mut DrawList, z: ZIndex) {
        self.outline.draw_at(self.rect.origin, list, z);
    }
}

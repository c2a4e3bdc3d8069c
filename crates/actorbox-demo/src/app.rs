//! The demo application: two scenes driven by the engine's paced frame loop.

use actorbox_engine::coords::Vec2;
use actorbox_engine::core::{App, AppControl, AppEvent, FrameCtx};
use actorbox_engine::render::RectRenderer;
use actorbox_engine::scene::{DrawList, ZIndex};
use anyhow::Result;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::actor::{Actor, Size};
use crate::config::DemoConfig;
use crate::error::InvalidArgument;
use crate::movement::{random_step, MovementPolicy, TickInput};
use crate::renderable::Renderable;
use crate::scene::Scene;

/// Layer of the wandering actors.
const ACTOR_LAYER: ZIndex = ZIndex::new(0);
/// The pointer follower always paints above the actors.
const POINTER_LAYER: ZIndex = ACTOR_LAYER.above();

/// Lifecycle of a run. Scenes exist from `Initializing` on; the first paced
/// frame moves the app to `Running`, and a quit request to `Terminating`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    Initializing,
    Running,
    Terminating,
}

/// Demo state for one run.
pub struct DemoApp<R: Rng = SmallRng> {
    config: DemoConfig,
    phase: Phase,

    pointer_scene: Scene,
    actor_scene: Scene,
    rng: R,

    draw_list: DrawList,
    renderer: RectRenderer,
}

impl<R: Rng> DemoApp<R> {
    /// Builds both scenes. `rng` places the blue actor and drives every
    /// random drift afterwards.
    pub fn new(config: DemoConfig, mut rng: R) -> Result<Self, InvalidArgument> {
        let pointer_scene = pointer_scene()?;
        let actor_scene = actor_scene(&config, &mut rng)?;

        log::info!(
            "scenes ready: {} pointer, {} actors",
            pointer_scene.len(),
            actor_scene.len()
        );

        Ok(Self {
            config,
            phase: Phase::Initializing,
            pointer_scene,
            actor_scene,
            rng,
            draw_list: DrawList::new(),
            renderer: RectRenderer::new(),
        })
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn pointer_scene(&self) -> &Scene {
        &self.pointer_scene
    }

    pub fn actor_scene(&self) -> &Scene {
        &self.actor_scene
    }

    /// One tick of movement: pointer scene first, then the actors.
    pub fn update(&mut self, input: &TickInput) -> Result<(), InvalidArgument> {
        self.pointer_scene.update(input, &mut self.rng)?;
        self.actor_scene.update(input, &mut self.rng)?;

        for r in self.pointer_scene.iter().chain(self.actor_scene.iter()) {
            let p = r.actor().position();
            log::trace!("{:?} at ({}, {})", r.policy(), p.x, p.y);
        }
        Ok(())
    }

    /// Rebuilds the frame's draw list: actors, then the pointer on top.
    pub fn record(&mut self) -> &mut DrawList {
        self.draw_list.clear();
        self.actor_scene.draw(&mut self.draw_list, ACTOR_LAYER);
        self.pointer_scene.draw(&mut self.draw_list, POINTER_LAYER);
        &mut self.draw_list
    }

    /// Leaves `Initializing`; later phases are unaffected.
    pub fn start(&mut self) {
        if self.phase == Phase::Initializing {
            self.phase = Phase::Running;
            log::info!("phase {:?}", self.phase);
        }
    }

    /// Clears to the background and paints the current draw list.
    fn present(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<()> {
        let background = self.config.background;
        let (renderer, draw_list) = (&mut self.renderer, &mut self.draw_list);
        ctx.render(background, |rctx, target| renderer.render(rctx, target, draw_list))
    }

    fn terminate(&mut self) {
        if self.phase != Phase::Terminating {
            self.phase = Phase::Terminating;
            log::info!("phase {:?}", self.phase);
        }
    }
}

impl<R: Rng + 'static> App for DemoApp<R> {
    fn on_event(&mut self, event: &AppEvent) -> AppControl {
        match event {
            AppEvent::QuitRequested => {
                self.terminate();
                AppControl::Exit
            }
            AppEvent::Input(_) => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
        match self.phase {
            Phase::Initializing => self.start(),
            Phase::Running => {}
            Phase::Terminating => return Ok(AppControl::Exit),
        }
        log::trace!("frame {} (dt {:.3}s)", ctx.time.frame_index, ctx.time.dt);

        self.update(&TickInput::from_state(ctx.input))?;
        self.record();
        self.present(ctx)?;

        Ok(AppControl::Continue)
    }

    /// Repaints the last recorded frame; nothing moves.
    fn on_redraw(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<()> {
        if self.phase == Phase::Terminating {
            return Ok(());
        }
        self.present(ctx)
    }

    fn on_exit(&mut self) {
        self.terminate();
    }
}

fn pointer_scene() -> Result<Scene, InvalidArgument> {
    let mut scene = Scene::new();
    let actor = Actor::new(Vec2::zero(), Vec2::new(1.0, 1.0), Size::new(60, 60))?;
    scene.push(Renderable::new(actor, "white", MovementPolicy::PointerFollow)?);
    Ok(scene)
}

fn actor_scene<R: Rng + ?Sized>(config: &DemoConfig, rng: &mut R) -> Result<Scene, InvalidArgument> {
    let mut scene = Scene::new();

    let max_x = config.width.saturating_sub(60);
    let max_y = config.height.saturating_sub(40);
    let start = Vec2::new(rng.gen_range(0..=max_x) as f32, rng.gen_range(0..=max_y) as f32);
    let blue = Actor::new(start, random_step(rng), Size::new(40, 40))?;
    scene.push(Renderable::new(blue, "blue", MovementPolicy::ConstantVelocity)?);

    let red = Actor::new(Vec2::new(210.0, 160.0), Vec2::zero(), Size::new(60, 40))?;
    scene.push(Renderable::new(red, "red", MovementPolicy::RandomDrift)?);

    let cyan = Actor::new(Vec2::new(110.0, 90.0), Vec2::new(2.0, 2.0), Size::new(10, 150))?;
    scene.push(Renderable::new(cyan, "cyan", MovementPolicy::RandomDrift)?);

    Ok(scene)
}

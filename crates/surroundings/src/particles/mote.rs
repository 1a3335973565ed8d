//! Mote particle base
//!
//! [`MoteState`] holds what every mote needs: position, tint, light and a
//! liveness flag. Concrete motes implement [`ParticleMote`], supplying their
//! own movement in [`ParticleMote::update`] and geometry in
//! [`ParticleMote::render`].

use super::render::{Camera, VertexConsumer};
use crate::foundation::math::DVec3;
use crate::world::{BlockPos, LightReader, LightType};

/// Shared state of a mote
#[derive(Debug, Clone, PartialEq)]
pub struct MoteState {
    is_alive: bool,
    position: DVec3,
    block_pos: BlockPos,
    sky_light_x16: i32,
    block_light_x16: i32,
    /// Red tint (0.0 to 1.0)
    pub red: f32,
    /// Green tint (0.0 to 1.0)
    pub green: f32,
    /// Blue tint (0.0 to 1.0)
    pub blue: f32,
    /// Opacity (0.0 to 1.0)
    pub alpha: f32,
}

impl MoteState {
    /// Create a live, untinted mote at `position`
    pub fn new(position: DVec3) -> Self {
        Self {
            is_alive: true,
            position,
            block_pos: BlockPos::containing(&position),
            sky_light_x16: 0,
            block_light_x16: 0,
            red: 1.0,
            green: 1.0,
            blue: 1.0,
            alpha: 1.0,
        }
    }

    /// Set the tint
    pub fn with_color(mut self, red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        self.red = red;
        self.green = green;
        self.blue = blue;
        self.alpha = alpha;
        self
    }

    /// Check if the mote is still alive
    pub fn is_alive(&self) -> bool {
        self.is_alive
    }

    /// Mark the mote dead; it will be dropped by its owner
    pub fn kill(&mut self) {
        self.is_alive = false;
    }

    /// World position
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Move the mote, keeping its block position in sync
    pub fn set_position(&mut self, position: DVec3) {
        self.position = position;
        self.block_pos = BlockPos::containing(&position);
    }

    /// Block the mote was last placed in
    pub fn block_pos(&self) -> BlockPos {
        self.block_pos
    }

    /// Sky light-map coordinate
    pub fn sky_light_x16(&self) -> i32 {
        self.sky_light_x16
    }

    /// Block light-map coordinate
    pub fn block_light_x16(&self) -> i32 {
        self.block_light_x16
    }

    /// Packed light for the mote's block: sky in bits 20+, block in bits 4+
    pub fn brightness_for_render(&self, lighting: &dyn LightReader) -> i32 {
        let sky = lighting.brightness(LightType::Sky, self.block_pos);
        let block = lighting.brightness(LightType::Block, self.block_pos);
        sky << 20 | block << 4
    }

    /// Refresh the light-map coordinates from the world
    pub fn update_brightness(&mut self, lighting: &dyn LightReader) {
        let combined = self.brightness_for_render(lighting);
        self.sky_light_x16 = combined >> 16 & 0xFFFF;
        self.block_light_x16 = combined & 0xFFFF;
    }

    /// Render-space X; motes do not interpolate between ticks
    #[allow(clippy::cast_possible_truncation)]
    pub fn render_x(&self, _partial_ticks: f32) -> f32 {
        self.position.x as f32
    }

    /// Render-space Y
    #[allow(clippy::cast_possible_truncation)]
    pub fn render_y(&self, _partial_ticks: f32) -> f32 {
        self.position.y as f32
    }

    /// Render-space Z
    #[allow(clippy::cast_possible_truncation)]
    pub fn render_z(&self, _partial_ticks: f32) -> f32 {
        self.position.z as f32
    }

    /// Emit one lit, tinted vertex
    #[allow(clippy::cast_possible_truncation)]
    pub fn draw_vertex(&self, buffer: &mut dyn VertexConsumer, x: f64, y: f64, z: f64, u: f64, v: f64) {
        buffer
            .vertex(x, y, z)
            .uv(u as f32, v as f32)
            .color(self.red, self.green, self.blue, self.alpha)
            .uv2(self.sky_light_x16, self.block_light_x16)
            .end_vertex();
    }
}

/// A particle mote driven by the host's particle manager
pub trait ParticleMote {
    /// Shared mote state
    fn state(&self) -> &MoteState;

    /// Mutable shared mote state
    fn state_mut(&mut self) -> &mut MoteState;

    /// Per-tick behavior; may move or kill the mote
    fn update(&mut self) {}

    /// Emit geometry for this frame
    fn render(&self, buffer: &mut dyn VertexConsumer, camera: &Camera, partial_ticks: f32);

    /// Check if the mote is still alive
    fn is_alive(&self) -> bool {
        self.state().is_alive()
    }

    /// Mark the mote dead
    fn kill(&mut self) {
        self.state_mut().kill();
    }

    /// Advance one tick, returning whether the mote is still alive
    fn tick(&mut self, lighting: &dyn LightReader) -> bool {
        if self.is_alive() {
            self.update();

            // update() may have killed the mote
            if self.is_alive() {
                let state = self.state_mut();
                state.set_position(state.position());
                state.update_brightness(lighting);
            }
        }
        self.is_alive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UniformLight {
        sky: i32,
        block: i32,
    }

    impl LightReader for UniformLight {
        fn brightness(&self, kind: LightType, _pos: BlockPos) -> i32 {
            match kind {
                LightType::Sky => self.sky,
                LightType::Block => self.block,
            }
        }
    }

    /// Sinks one block per tick and expires after `ttl` ticks
    struct FallingMote {
        state: MoteState,
        ttl: u32,
        updates: u32,
    }

    impl FallingMote {
        fn new(position: DVec3, ttl: u32) -> Self {
            Self {
                state: MoteState::new(position),
                ttl,
                updates: 0,
            }
        }
    }

    impl ParticleMote for FallingMote {
        fn state(&self) -> &MoteState {
            &self.state
        }

        fn state_mut(&mut self) -> &mut MoteState {
            &mut self.state
        }

        fn update(&mut self) {
            self.updates += 1;
            if self.updates > self.ttl {
                self.kill();
                return;
            }
            let mut position = self.state.position();
            position.y -= 1.0;
            self.state.position = position;
        }

        fn render(&self, buffer: &mut dyn VertexConsumer, camera: &Camera, _partial_ticks: f32) {
            let relative = self.state.position() - camera.position;
            self.state.draw_vertex(buffer, relative.x, relative.y, relative.z, 0.0, 1.0);
        }
    }

    #[derive(Debug, Default, PartialEq)]
    struct RecordedVertex {
        position: (f64, f64, f64),
        uv: (f32, f32),
        color: (f32, f32, f32, f32),
        light: (i32, i32),
    }

    #[derive(Default)]
    struct RecordingBuffer {
        current: RecordedVertex,
        finished: Vec<RecordedVertex>,
    }

    impl VertexConsumer for RecordingBuffer {
        fn vertex(&mut self, x: f64, y: f64, z: f64) -> &mut dyn VertexConsumer {
            self.current.position = (x, y, z);
            self
        }

        fn uv(&mut self, u: f32, v: f32) -> &mut dyn VertexConsumer {
            self.current.uv = (u, v);
            self
        }

        fn color(&mut self, red: f32, green: f32, blue: f32, alpha: f32) -> &mut dyn VertexConsumer {
            self.current.color = (red, green, blue, alpha);
            self
        }

        fn uv2(&mut self, sky: i32, block: i32) -> &mut dyn VertexConsumer {
            self.current.light = (sky, block);
            self
        }

        fn end_vertex(&mut self) {
            self.finished.push(std::mem::take(&mut self.current));
        }
    }

    #[test]
    fn test_new_mote_defaults() {
        let state = MoteState::new(DVec3::new(0.5, 70.0, -2.25));
        assert!(state.is_alive());
        assert_eq!(state.block_pos(), BlockPos::new(0, 70, -3));
        assert_eq!((state.red, state.green, state.blue, state.alpha), (1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_light_packing() {
        let mut state = MoteState::new(DVec3::zeros());
        let light = UniformLight { sky: 15, block: 7 };

        assert_eq!(state.brightness_for_render(&light), 15 << 20 | 7 << 4);

        state.update_brightness(&light);
        assert_eq!(state.sky_light_x16(), 240);
        assert_eq!(state.block_light_x16(), 112);
    }

    #[test]
    fn test_tick_moves_and_relights() {
        let mut mote = FallingMote::new(DVec3::new(0.0, 10.5, 0.0), 5);
        let light = UniformLight { sky: 15, block: 0 };

        assert!(mote.tick(&light));
        assert_eq!(mote.state().block_pos(), BlockPos::new(0, 9, 0));
        assert_eq!(mote.state().sky_light_x16(), 240);
    }

    #[test]
    fn test_tick_stops_after_kill() {
        let mut mote = FallingMote::new(DVec3::new(0.0, 10.5, 0.0), 1);
        let light = UniformLight { sky: 15, block: 0 };

        assert!(mote.tick(&light));
        assert!(!mote.tick(&light));
        // Killed during update: neither moved nor relit on that tick
        assert_eq!(mote.state().block_pos(), BlockPos::new(0, 9, 0));

        assert!(!mote.tick(&light));
        assert_eq!(mote.updates, 2);
    }

    #[test]
    fn test_external_kill() {
        let mut mote = FallingMote::new(DVec3::zeros(), 10);
        mote.kill();
        assert!(!mote.is_alive());
        assert!(!mote.tick(&UniformLight { sky: 0, block: 0 }));
        assert_eq!(mote.updates, 0);
    }

    #[test]
    fn test_render_emits_lit_vertex() {
        let mut mote = FallingMote::new(DVec3::new(1.0, 2.0, 3.0), 5);
        mote.state_mut().update_brightness(&UniformLight { sky: 12, block: 3 });
        mote.state_mut().alpha = 0.5;

        let mut buffer = RecordingBuffer::default();
        mote.render(&mut buffer, &Camera::new(DVec3::new(1.0, 0.0, 0.0)), 0.0);

        assert_eq!(
            buffer.finished,
            vec![RecordedVertex {
                position: (0.0, 2.0, 3.0),
                uv: (0.0, 1.0),
                color: (1.0, 1.0, 1.0, 0.5),
                light: (192, 48),
            }]
        );
    }

    #[test]
    fn test_render_coordinates() {
        let state = MoteState::new(DVec3::new(1.25, -2.5, 3.0));
        assert_eq!(state.render_x(0.5), 1.25);
        assert_eq!(state.render_y(0.5), -2.5);
        assert_eq!(state.render_z(0.5), 3.0);
    }

    #[test]
    fn test_with_color() {
        let state = MoteState::new(DVec3::zeros()).with_color(0.2, 0.4, 0.6, 0.8);
        assert_eq!((state.red, state.green, state.blue, state.alpha), (0.2, 0.4, 0.6, 0.8));
    }
}

//! Fixed timestep driver
//!
//! Hosts call [`FixedStepDriver::advance`] once per frame with the wall time
//! that passed. The driver turns it into whole simulation ticks of the
//! nominal `dt`, so the physics never sees a variable timestep.

use crate::consts::{MAX_FRAME_TIME, MAX_SUBSTEPS};
use crate::sim::{Collision, GameState, TickInput, apply_commands, tick};

#[derive(Debug, Clone)]
pub struct FixedStepDriver {
    dt: f32,
    accumulator: f32,
}

impl FixedStepDriver {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Apply `input`, then run as many ticks as `elapsed` seconds allow
    /// (at most `MAX_SUBSTEPS`). Returns the collisions resolved, in order.
    pub fn advance(
        &mut self,
        state: &mut GameState,
        elapsed: f32,
        input: &TickInput,
    ) -> Vec<Collision> {
        let was_running = state.is_running();
        apply_commands(state, input);

        if !state.is_running() {
            // Paused or waiting: drop time instead of replaying it on resume
            self.accumulator = 0.0;
            return Vec::new();
        }
        if !was_running {
            self.accumulator = 0.0;
        }

        self.accumulator += elapsed.min(MAX_FRAME_TIME);

        let idle = TickInput::default();
        let mut collisions = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= self.dt && substeps < MAX_SUBSTEPS && state.is_running() {
            if let Some(hit) = tick(state, &idle, self.dt) {
                collisions.push(hit);
            }
            self.accumulator -= self.dt;
            substeps += 1;
        }
        collisions
    }
}

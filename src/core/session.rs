//! Per-session scoring, health and difficulty progression.

use super::constants::*;

/// Everything that describes one play attempt, from Start until health hits zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub health: u32,
    /// Obstacles dodged. The only thing that ever increments it is a recycle.
    pub raw_score: u64,
    /// Score multiplier in half-steps (2 == 1.0x).
    pub multiplier_halves: u64,
    pub level: u32,
    pub level_threshold: u64,
    /// Shared fall speed for all obstacles, px per frame.
    pub obstacle_speed: i32,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            health: STARTING_HEALTH,
            raw_score: 0,
            multiplier_halves: MULTIPLIER_BASE_HALVES,
            level: 1,
            level_threshold: LEVEL_THRESHOLD,
            obstacle_speed: OBSTACLE_START_SPEED,
        }
    }

    /// `floor(raw_score * multiplier)`, computed exactly.
    pub fn display_score(&self) -> u64 {
        self.raw_score * self.multiplier_halves / 2
    }

    /// Multiplier as a float, for display only.
    pub fn multiplier(&self) -> f64 {
        self.multiplier_halves as f64 / 2.0
    }

    pub fn is_over(&self) -> bool {
        self.health == 0
    }

    /// Record one dodged obstacle and re-check the level threshold.
    /// Returns true when this increment caused a level-up.
    pub fn record_dodge(&mut self) -> bool {
        self.raw_score += 1;
        self.increase_difficulty()
    }

    /// One-way ratchet: once `raw_score` reaches `level_threshold * level`,
    /// obstacles get faster, the level goes up, and the multiplier grows by 0.5.
    pub fn increase_difficulty(&mut self) -> bool {
        if self.raw_score >= self.level_threshold * u64::from(self.level) {
            self.obstacle_speed += 1;
            self.level += 1;
            self.multiplier_halves += MULTIPLIER_STEP_HALVES;
            true
        } else {
            false
        }
    }

    /// Take one hit. Returns true when the session has ended.
    pub fn take_hit(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        self.is_over()
    }
}

//! Player and obstacle entities in logical screen coordinates.
//!
//! The screen is 800x600 with the origin at the top-left and `y` growing
//! downward. Obstacles spawn above the visible area (negative `y`) and fall.

use super::constants::*;
use rand::Rng;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Strict overlap test. Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// Whether a point lies inside the box (right/bottom edges exclusive).
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// Held horizontal direction for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Steer {
    #[default]
    None,
    Left,
    Right,
}

impl Steer {
    /// Resolve the two held keys into one direction. Both held cancel out.
    pub fn from_held(left: bool, right: bool) -> Self {
        match (left, right) {
            (true, false) => Steer::Left,
            (false, true) => Steer::Right,
            _ => Steer::None,
        }
    }
}

/// The player-controlled sprite. Only `x` ever changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub speed: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: PLAYER_START_X,
            y: PLAYER_Y,
            width: PLAYER_SIZE,
            height: PLAYER_SIZE,
            speed: PLAYER_SPEED,
        }
    }
}

impl Player {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }

    /// Move one step in the held direction, staying fully on screen.
    pub fn steer(&mut self, steer: Steer) {
        let max_x = SCREEN_WIDTH - self.width;
        match steer {
            Steer::Left => self.x = (self.x - self.speed).max(0),
            Steer::Right => self.x = (self.x + self.speed).min(max_x),
            Steer::None => {}
        }
    }
}

/// A falling obstacle. Obstacles are recycled, never destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    pub x: i32,
    pub y: i32,
}

impl Obstacle {
    /// Create an obstacle at a random spawn point above the screen.
    pub fn spawn<R: Rng>(rng: &mut R) -> Self {
        let mut obstacle = Obstacle { x: 0, y: 0 };
        obstacle.respawn(rng);
        obstacle
    }

    /// Move back to a random spawn point: `y` in [-150, -50], `x` anywhere
    /// the obstacle fits horizontally.
    pub fn respawn<R: Rng>(&mut self, rng: &mut R) {
        self.x = rng.gen_range(0..=SCREEN_WIDTH - OBSTACLE_SIZE);
        self.y = rng.gen_range(SPAWN_Y_MIN..=SPAWN_Y_MAX);
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, OBSTACLE_SIZE, OBSTACLE_SIZE)
    }

    /// Past the bottom edge of the screen.
    pub fn has_passed(&self) -> bool {
        self.y > SCREEN_HEIGHT
    }
}

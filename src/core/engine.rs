//! Per-frame game logic: movement, obstacle recycling, scoring and collisions.

use super::constants::*;
use super::entities::{Obstacle, Player, Steer};
use super::session::SessionState;
use rand::Rng;

/// Everything that lives on screen during a session.
#[derive(Debug, Clone)]
pub struct Playfield {
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub session: SessionState,
}

/// What happened during one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Obstacles that left the screen this frame (one point each).
    pub dodged: u32,
    pub leveled_up: bool,
    /// Index of the obstacle that hit the player, if any.
    pub hit: Option<usize>,
    pub session_over: bool,
}

/// Final numbers frozen when health reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalResult {
    pub score: u64,
    pub level: u32,
}

impl Playfield {
    /// Fresh session: full health, centered player, obstacles above the screen.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            player: Player::default(),
            obstacles: (0..OBSTACLE_COUNT).map(|_| Obstacle::spawn(rng)).collect(),
            session: SessionState::new(),
        }
    }

    pub fn final_result(&self) -> FinalResult {
        FinalResult {
            score: self.session.display_score(),
            level: self.session.level,
        }
    }
}

/// Index of the first obstacle (in list order) overlapping the player.
///
/// When several overlap at once the first listed wins; this is not a
/// nearest-hit rule.
pub fn find_collision(player: &Player, obstacles: &[Obstacle]) -> Option<usize> {
    let player_box = player.bounds();
    obstacles
        .iter()
        .position(|o| o.bounds().overlaps(&player_box))
}

pub fn check_collision(player: &Player, obstacles: &[Obstacle]) -> bool {
    find_collision(player, obstacles).is_some()
}

/// Send every obstacle back above the screen.
pub fn reset_obstacles<R: Rng>(obstacles: &mut [Obstacle], rng: &mut R) {
    for obstacle in obstacles.iter_mut() {
        obstacle.respawn(rng);
    }
}

/// Move obstacles down by the session speed and recycle the ones that
/// left the screen, scoring one point for each.
pub fn advance_obstacles<R: Rng>(field: &mut Playfield, rng: &mut R) -> (u32, bool) {
    let speed = field.session.obstacle_speed;
    let mut dodged = 0;
    let mut leveled_up = false;

    for obstacle in field.obstacles.iter_mut() {
        obstacle.y += speed;
        if obstacle.has_passed() {
            obstacle.respawn(rng);
            dodged += 1;
            leveled_up |= field.session.record_dodge();
        }
    }

    (dodged, leveled_up)
}

/// Run one frame of play.
///
/// Order: player movement, obstacle fall and recycle (scoring), then the
/// collision check. A hit costs one health and clears the screen.
pub fn process_tick<R: Rng>(field: &mut Playfield, steer: Steer, rng: &mut R) -> TickOutcome {
    if field.session.is_over() {
        return TickOutcome {
            session_over: true,
            ..TickOutcome::default()
        };
    }

    field.player.steer(steer);

    let (dodged, leveled_up) = advance_obstacles(field, rng);

    let hit = find_collision(&field.player, &field.obstacles);
    let mut session_over = false;
    if hit.is_some() {
        session_over = field.session.take_hit();
        reset_obstacles(&mut field.obstacles, rng);
    }

    TickOutcome {
        dodged,
        leveled_up,
        hit,
        session_over,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    /// Playfield with every obstacle parked far above the screen.
    fn quiet_field() -> Playfield {
        let mut field = Playfield::new(&mut rng());
        for o in field.obstacles.iter_mut() {
            o.x = 0;
            o.y = -10_000;
        }
        field
    }

    #[test]
    fn test_new_playfield() {
        let field = Playfield::new(&mut rng());
        assert_eq!(field.obstacles.len(), OBSTACLE_COUNT);
        assert_eq!(field.session.health, STARTING_HEALTH);
        for o in &field.obstacles {
            assert!(o.y < 0);
        }
    }

    #[test]
    fn test_first_listed_obstacle_wins() {
        let player = Player::default();
        let obstacles = vec![
            Obstacle { x: 0, y: -500 },
            Obstacle {
                x: player.x + 60,
                y: player.y + 10,
            },
            Obstacle {
                x: player.x,
                y: player.y,
            },
        ];
        assert_eq!(find_collision(&player, &obstacles), Some(1));
        assert!(check_collision(&player, &obstacles));
    }

    #[test]
    fn test_no_collision_when_clear() {
        let player = Player::default();
        let obstacles = vec![Obstacle { x: 0, y: 0 }, Obstacle { x: 700, y: 100 }];
        assert!(!check_collision(&player, &obstacles));
    }

    #[test]
    fn test_obstacles_fall_by_speed() {
        let mut field = quiet_field();
        field.obstacles[0].y = 100;
        process_tick(&mut field, Steer::None, &mut rng());
        assert_eq!(field.obstacles[0].y, 107);
    }

    #[test]
    fn test_recycle_scores_one_point() {
        let mut field = quiet_field();
        field.obstacles[0].y = SCREEN_HEIGHT - 3;
        let outcome = process_tick(&mut field, Steer::None, &mut rng());
        assert_eq!(outcome.dodged, 1);
        assert_eq!(field.session.raw_score, 1);
        assert!((SPAWN_Y_MIN..=SPAWN_Y_MAX).contains(&field.obstacles[0].y));
    }

    #[test]
    fn test_collision_costs_health_and_resets_all() {
        let mut field = quiet_field();
        let (px, py) = (field.player.x, field.player.y);
        field.obstacles[2] = Obstacle { x: px, y: py - 20 };

        let outcome = process_tick(&mut field, Steer::None, &mut rng());
        assert_eq!(outcome.hit, Some(2));
        assert!(!outcome.session_over);
        assert_eq!(field.session.health, STARTING_HEALTH - 1);
        for o in &field.obstacles {
            assert!((SPAWN_Y_MIN..=SPAWN_Y_MAX).contains(&o.y));
        }
    }

    #[test]
    fn test_player_moves_before_collision_check() {
        let mut field = quiet_field();
        // Obstacle sits just right of the player after falling one frame
        field.obstacles[0] = Obstacle {
            x: field.player.x + field.player.width + 3,
            y: field.player.y,
        };
        let outcome = process_tick(&mut field, Steer::Right, &mut rng());
        assert_eq!(outcome.hit, Some(0));
    }

    #[test]
    fn test_level_up_reported() {
        let mut field = quiet_field();
        field.session.raw_score = 9;
        field.obstacles[0].y = SCREEN_HEIGHT;
        let outcome = process_tick(&mut field, Steer::None, &mut rng());
        assert!(outcome.leveled_up);
        assert_eq!(field.session.level, 2);
        assert_eq!(field.session.obstacle_speed, OBSTACLE_START_SPEED + 1);
    }

    #[test]
    fn test_tick_after_game_over_is_inert() {
        let mut field = quiet_field();
        field.session.health = 0;
        field.obstacles[0].y = 10;
        let outcome = process_tick(&mut field, Steer::Left, &mut rng());
        assert!(outcome.session_over);
        assert_eq!(field.obstacles[0].y, 10);
        assert_eq!(field.player.x, PLAYER_START_X);
    }

    #[test]
    fn test_final_result_uses_display_score() {
        let mut field = quiet_field();
        field.session.raw_score = 15;
        field.session.multiplier_halves = 3;
        field.session.level = 2;
        assert_eq!(
            field.final_result(),
            FinalResult {
                score: 22,
                level: 2
            }
        );
    }
}

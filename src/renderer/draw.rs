//! Per-frame draw pass
//!
//! Walks the drawable group in id order and hands each entity's geometry to
//! the canvas, then overlays the HUD.

use glam::Vec2;

use super::canvas::Canvas;
use super::vertex::colors;
use crate::sim::player::THRUST_PARTICLE_MAX_LIFE;
use crate::sim::{Entity, Explosion, GameState, Group, Player};

/// Blink period for the invulnerable ship, in milliseconds
const BLINK_PERIOD_MS: u64 = 200;
const THRUST_PARTICLE_RADIUS: f32 = 1.5;

const HUD_MARGIN: f32 = 10.0;
const HUD_LINE_HEIGHT: f32 = 30.0;

/// Emit the whole frame
pub fn draw(state: &GameState, canvas: &mut impl Canvas) {
    canvas.clear(colors::BACKGROUND);

    for (_, entity) in state.registry.iter(Group::Drawable) {
        match entity {
            Entity::Player(player) => draw_player(player, state.time_secs, canvas),
            Entity::Asteroid(asteroid) => canvas.polyline(&asteroid.outline(), false, colors::ASTEROID),
            Entity::Shot(shot) => canvas.circle(shot.body.pos, shot.body.radius, colors::SHOT),
            Entity::Explosion(explosion) => draw_explosion(explosion, canvas),
        }
    }

    draw_hud(state, canvas);
}

/// Whether the ship is shown this frame (it blinks while invulnerable)
pub fn ship_visible(player: &Player, time_secs: f32) -> bool {
    let ms = (time_secs.max(0.0) * 1000.0) as u64;
    player.is_vulnerable || ms % BLINK_PERIOD_MS < BLINK_PERIOD_MS / 2
}

fn draw_player(player: &Player, time_secs: f32, canvas: &mut impl Canvas) {
    for particle in &player.thrust_particles {
        let alpha = (particle.life / THRUST_PARTICLE_MAX_LIFE).clamp(0.0, 1.0);
        canvas.circle(
            particle.pos,
            THRUST_PARTICLE_RADIUS,
            colors::with_alpha(colors::PARTICLE, alpha),
        );
    }

    if ship_visible(player, time_secs) {
        canvas.polyline(&player.triangle(), true, colors::SHIP);
    }
}

fn draw_explosion(explosion: &Explosion, canvas: &mut impl Canvas) {
    // One fade for the whole burst
    let color = colors::with_alpha(colors::PARTICLE, explosion.alpha(1.0));
    for particle in &explosion.particles {
        canvas.circle(particle.pos, particle.size, color);
    }
}

fn draw_hud(state: &GameState, canvas: &mut impl Canvas) {
    let origin = Vec2::splat(HUD_MARGIN);
    canvas.label(&format!("Score: {}", state.score), origin, colors::HUD);
    canvas.label(
        &format!("Lives: {}", state.lives().max(0)),
        origin + Vec2::new(0.0, HUD_LINE_HEIGHT),
        colors::HUD,
    );

    if state.is_over() {
        let center = state.tuning.screen() / 2.0;
        canvas.label("GAME OVER", center - Vec2::new(80.0, HUD_LINE_HEIGHT), colors::GAME_OVER);
        canvas.label(
            "Press R to restart or Esc to quit",
            center - Vec2::new(200.0, 0.0),
            colors::HUD,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Asteroid, GamePhase, Shot};

    #[derive(Default)]
    struct Recorder {
        polylines: Vec<(Vec<Vec2>, bool)>,
        circles: Vec<(Vec2, f32, [f32; 4])>,
        labels: Vec<String>,
        clears: usize,
    }

    impl Canvas for Recorder {
        fn clear(&mut self, _color: [f32; 4]) {
            self.clears += 1;
        }

        fn polyline(&mut self, points: &[Vec2], closed: bool, _color: [f32; 4]) {
            self.polylines.push((points.to_vec(), closed));
        }

        fn circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
            self.circles.push((center, radius, color));
        }

        fn label(&mut self, text: &str, _pos: Vec2, _color: [f32; 4]) {
            self.labels.push(text.to_string());
        }
    }

    #[test]
    fn test_draws_every_kind() {
        let mut state = GameState::new(4);
        let rock = Asteroid::new(Vec2::new(100.0, 100.0), 40.0, state.rng_mut());
        let vertex_count = rock.vertices.len();
        state.spawn_asteroid(rock);
        state
            .registry
            .spawn(Shot::new(Vec2::new(50.0, 50.0), Vec2::ZERO, 5.0, 1.0));

        let mut canvas = Recorder::default();
        draw(&state, &mut canvas);

        assert_eq!(canvas.clears, 1);
        // Ship triangle (closed) and asteroid outline (already closed)
        assert_eq!(canvas.polylines.len(), 2);
        assert!(canvas.polylines[0].1);
        assert_eq!(canvas.polylines[0].0.len(), 3);
        assert_eq!(canvas.polylines[1].0.len(), vertex_count + 1);
        assert_eq!(canvas.circles.len(), 1);
        assert_eq!(canvas.labels, vec!["Score: 0", "Lives: 3"]);
    }

    #[test]
    fn test_explosion_alpha_is_uniform() {
        let mut state = GameState::new(4);
        let rock = Asteroid::new(Vec2::new(100.0, 100.0), 20.0, state.rng_mut());
        let id = state.spawn_asteroid(rock);
        state.split_asteroid(id);

        let mut canvas = Recorder::default();
        draw(&state, &mut canvas);

        assert_eq!(canvas.circles.len(), state.tuning.explosion_particles);
        let alpha = canvas.circles[0].2[3];
        assert!(canvas.circles.iter().all(|c| c.2[3] == alpha));
        assert!((alpha - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_invulnerable_ship_blinks() {
        let state = GameState::new(4);
        let mut player = state.player().cloned().expect("player");
        player.is_vulnerable = false;

        assert!(ship_visible(&player, 0.05));
        assert!(!ship_visible(&player, 0.15));
        player.is_vulnerable = true;
        assert!(ship_visible(&player, 0.15));
    }

    #[test]
    fn test_game_over_prompt() {
        let mut state = GameState::new(4);
        state.phase = GamePhase::GameOver;

        let mut canvas = Recorder::default();
        draw(&state, &mut canvas);

        assert!(canvas.labels.iter().any(|l| l == "GAME OVER"));
        assert!(canvas.labels.iter().any(|l| l.contains("restart")));
    }
}

//! Particle Effects
//!
//! Decorative particles for the menu and results screens, kept in a
//! fixed-size pool with a tiny xorshift PRNG instead of an RNG crate.
//! Two behaviors cover everything the screens need: a slow upward drift
//! that wraps (menu backdrop) and a bouncing swarm that fades out and
//! respawns (win/lose celebration).

use macroquad::color::Color;
use macroquad::math::{vec2, Vec2};
use macroquad::shapes::draw_circle;

/// Maximum particles in one field
pub const MAX_PARTICLES: usize = 64;

/// A single particle slot. Positions are screen space (y down).
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub position: Vec2,
    /// Pixels per second
    pub velocity: Vec2,
    /// Remaining life in seconds (bounce mode only)
    pub life: f32,
    pub max_life: f32,
    /// RGB 0-255
    pub color: [u8; 3],
    /// Radius in pixels
    pub size: f32,
    pub alive: bool,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            life: 0.0,
            max_life: 1.0,
            color: [255, 255, 255],
            size: 2.0,
            alive: false,
        }
    }
}

/// How a field moves its particles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldMode {
    /// Float upward forever, wrapping back in at the bottom
    Drift,
    /// Bounce off the screen edges, fade out over a lifetime, respawn
    Bounce,
}

/// A self-contained backdrop effect for one screen.
pub struct ParticleField {
    particles: [Particle; MAX_PARTICLES],
    mode: FieldMode,
    /// Palette sampled on every (re)spawn
    colors: [[u8; 3]; 3],
    /// Simple PRNG state for randomization
    rng_state: u32,
    count: usize,
}

impl ParticleField {
    fn new(mode: FieldMode, count: usize, colors: [[u8; 3]; 3], bounds: Vec2) -> Self {
        let mut field = Self {
            particles: [Particle::default(); MAX_PARTICLES],
            mode,
            colors,
            rng_state: 12345,
            count: count.min(MAX_PARTICLES),
        };
        for idx in 0..field.count {
            field.respawn_slot(idx, bounds);
        }
        field
    }

    /// Menu backdrop: twenty soft blue motes drifting upward.
    pub fn menu_drift(bounds: Vec2) -> Self {
        Self::new(
            FieldMode::Drift,
            20,
            [[170, 200, 255], [255, 255, 255], [140, 235, 255]],
            bounds,
        )
    }

    /// Results screen after a win: gold confetti bouncing around.
    pub fn victory_burst(bounds: Vec2) -> Self {
        Self::new(
            FieldMode::Bounce,
            50,
            [[255, 215, 0], [255, 255, 120], [255, 165, 0]],
            bounds,
        )
    }

    /// Results screen after a loss: embers in reds and orange.
    pub fn defeat_burst(bounds: Vec2) -> Self {
        Self::new(
            FieldMode::Bounce,
            50,
            [[139, 0, 0], [255, 60, 60], [255, 140, 0]],
            bounds,
        )
    }

    /// Fast xorshift PRNG (no external deps, deterministic)
    fn next_random(&mut self) -> f32 {
        self.rng_state ^= self.rng_state << 13;
        self.rng_state ^= self.rng_state >> 17;
        self.rng_state ^= self.rng_state << 5;
        (self.rng_state as f32) / (u32::MAX as f32)
    }

    /// Random float in range [min, max]
    fn random_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_random() * (max - min)
    }

    fn respawn_slot(&mut self, idx: usize, bounds: Vec2) {
        let position = vec2(
            self.random_range(0.0, bounds.x),
            self.random_range(0.0, bounds.y),
        );
        let color = self.colors[(self.next_random() * 3.0) as usize % 3];
        self.particles[idx] = match self.mode {
            FieldMode::Drift => Particle {
                position,
                velocity: vec2(0.0, -self.random_range(20.0, 50.0)),
                life: 1.0,
                max_life: 1.0,
                color,
                size: self.random_range(2.0, 5.0),
                alive: true,
            },
            FieldMode::Bounce => {
                let life = self.random_range(1.0, 3.0);
                Particle {
                    position,
                    velocity: vec2(
                        self.random_range(-50.0, 50.0),
                        self.random_range(-50.0, 50.0),
                    ),
                    life,
                    max_life: life,
                    color,
                    size: self.random_range(2.0, 6.0),
                    alive: true,
                }
            }
        };
    }

    /// Advance all particles. `bounds` is the screen size the field lives in.
    pub fn update(&mut self, dt: f32, bounds: Vec2) {
        let mode = self.mode;
        for idx in 0..self.count {
            let mut expired = false;
            {
                let p = &mut self.particles[idx];
                if !p.alive {
                    continue;
                }
                p.position += p.velocity * dt;
                match mode {
                    FieldMode::Drift => {
                        if p.position.y < -p.size {
                            p.position.y = bounds.y + p.size;
                        }
                    }
                    FieldMode::Bounce => {
                        if p.position.x < 0.0 || p.position.x > bounds.x {
                            p.velocity.x = -p.velocity.x;
                            p.position.x = p.position.x.clamp(0.0, bounds.x);
                        }
                        if p.position.y < 0.0 || p.position.y > bounds.y {
                            p.velocity.y = -p.velocity.y;
                            p.position.y = p.position.y.clamp(0.0, bounds.y);
                        }
                        p.life -= dt;
                        if p.life <= 0.0 {
                            expired = true;
                        }
                    }
                }
            }
            if expired {
                self.respawn_slot(idx, bounds);
            }
        }
    }

    /// Draw every live particle. Bounce particles fade with remaining life.
    pub fn draw(&self) {
        for p in self.particles.iter().take(self.count).filter(|p| p.alive) {
            let alpha = match self.mode {
                FieldMode::Drift => 200,
                FieldMode::Bounce => (p.life / p.max_life * 255.0).clamp(0.0, 255.0) as u8,
            };
            draw_circle(
                p.position.x,
                p.position.y,
                p.size,
                Color::from_rgba(p.color[0], p.color[1], p.color[2], alpha),
            );
        }
    }

    pub fn alive_count(&self) -> usize {
        self.particles.iter().filter(|p| p.alive).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Vec2 {
        vec2(1000.0, 650.0)
    }

    #[test]
    fn test_fields_spawn_their_population() {
        assert_eq!(ParticleField::menu_drift(bounds()).alive_count(), 20);
        assert_eq!(ParticleField::victory_burst(bounds()).alive_count(), 50);
        assert_eq!(ParticleField::defeat_burst(bounds()).alive_count(), 50);
    }

    #[test]
    fn test_drift_wraps_and_never_dies() {
        let mut field = ParticleField::menu_drift(bounds());
        for _ in 0..2000 {
            field.update(1.0 / 60.0, bounds());
        }
        assert_eq!(field.alive_count(), 20);
        for p in field.particles.iter().take(20) {
            assert!(p.position.y >= -p.size - 1.0);
            assert!(p.position.y <= bounds().y + p.size + 1.0);
        }
    }

    #[test]
    fn test_bounce_stays_inside_bounds() {
        let mut field = ParticleField::victory_burst(bounds());
        for _ in 0..600 {
            field.update(1.0 / 60.0, bounds());
        }
        for p in field.particles.iter().take(50) {
            assert!(p.position.x >= 0.0 && p.position.x <= bounds().x);
            assert!(p.position.y >= 0.0 && p.position.y <= bounds().y);
        }
    }

    #[test]
    fn test_expired_bounce_particles_respawn() {
        let mut field = ParticleField::defeat_burst(bounds());
        // One giant step ages every particle past its longest lifetime
        field.update(5.0, bounds());
        assert_eq!(field.alive_count(), 50);
        for p in field.particles.iter().take(50) {
            assert!(p.life > 0.0);
        }
    }
}

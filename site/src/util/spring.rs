//! Damped spring integration for the custom cursor.
//!
//! Springs chase the pointer; the cursor glyph tilts with horizontal
//! velocity and grows slightly with speed.

#[cfg(test)]
#[path = "spring_test.rs"]
mod spring_test;

/// Largest step fed to the integrator; longer gaps are split.
const MAX_STEP_SECS: f64 = 1.0 / 120.0;
/// Frame gaps longer than this are treated as a stall and clamped.
const MAX_FRAME_SECS: f64 = 0.1;

/// Tilt in degrees per pixel of horizontal pointer step.
pub const ROTATION_PER_VELOCITY: f64 = 0.1;
/// Scale gained per pixel of pointer step length.
pub const SCALE_PER_SPEED: f64 = 0.01;
/// Upper bound on the speed-driven scale.
pub const MAX_SCALE: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Below this distance and speed the spring snaps to rest.
    pub rest_delta: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self { stiffness: 400.0, damping: 25.0, mass: 0.5, rest_delta: 0.01 }
    }
}

/// One-dimensional spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub position: f64,
    pub velocity: f64,
    pub target: f64,
}

impl Spring {
    #[must_use]
    pub fn at(position: f64) -> Self {
        Self { position, velocity: 0.0, target: position }
    }

    #[must_use]
    pub fn is_at_rest(&self, config: &SpringConfig) -> bool {
        (self.target - self.position).abs() < config.rest_delta && self.velocity.abs() < config.rest_delta
    }

    /// Integrate `dt` seconds with semi-implicit Euler.
    pub fn step(&mut self, dt: f64, config: &SpringConfig) {
        let mut remaining = clamp_dt(dt);
        let mass = if config.mass > 0.0 { config.mass } else { 1.0 };
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECS);
            let force = config.stiffness * (self.target - self.position) - config.damping * self.velocity;
            self.velocity += force / mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        if self.is_at_rest(config) {
            self.position = self.target;
            self.velocity = 0.0;
        }
    }
}

fn clamp_dt(dt: f64) -> f64 {
    if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_SECS) } else { 0.0 }
}

/// Transform applied to the cursor glyph each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorPose {
    pub x: f64,
    pub y: f64,
    pub rotation_deg: f64,
    pub scale: f64,
}

/// Spring-smoothed cursor.
///
/// Each pointer move retargets four springs: position follows the pointer,
/// tilt follows the horizontal step since the previous move, and scale
/// follows the step length.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorMotion {
    x: Spring,
    y: Spring,
    rotation: Spring,
    scale: Spring,
    last_pointer: (f64, f64),
    config: SpringConfig,
}

impl CursorMotion {
    #[must_use]
    pub fn new(config: SpringConfig) -> Self {
        Self {
            x: Spring::at(0.0),
            y: Spring::at(0.0),
            rotation: Spring::at(0.0),
            scale: Spring::at(1.0),
            last_pointer: (0.0, 0.0),
            config,
        }
    }

    /// Feed a pointer position in client coordinates.
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        let (dx, dy) = (x - self.last_pointer.0, y - self.last_pointer.1);
        self.last_pointer = (x, y);
        self.x.target = x;
        self.y.target = y;
        self.rotation.target = dx * ROTATION_PER_VELOCITY;
        self.scale.target = (1.0 + dx.hypot(dy) * SCALE_PER_SPEED).min(MAX_SCALE);
    }

    /// Jump straight to a position with no motion.
    pub fn snap_to(&mut self, x: f64, y: f64) {
        self.x = Spring::at(x);
        self.y = Spring::at(y);
        self.rotation = Spring::at(0.0);
        self.scale = Spring::at(1.0);
        self.last_pointer = (x, y);
    }

    pub fn step(&mut self, dt: f64) {
        for spring in [&mut self.x, &mut self.y, &mut self.rotation, &mut self.scale] {
            spring.step(dt, &self.config);
        }
    }

    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        [&self.x, &self.y, &self.rotation, &self.scale].iter().all(|s| s.is_at_rest(&self.config))
    }

    #[must_use]
    pub fn pose(&self) -> CursorPose {
        CursorPose {
            x: self.x.position,
            y: self.y.position,
            rotation_deg: self.rotation.position,
            scale: self.scale.position,
        }
    }
}

impl Default for CursorMotion {
    fn default() -> Self {
        Self::new(SpringConfig::default())
    }
}

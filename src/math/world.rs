/// Per-axis speed below which the integration step snaps velocity to zero.
pub static REST_EPSILON: f32 = 0.01;

/// Velocity multiplier applied every step. `1.0` means no damping.
pub static DEFAULT_FRICTION: f32 = 1.0;

/// Tuning for a single simulation step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepSettings {
    pub friction: f32,
    pub rest_epsilon: f32,
    /// Test kinematic-vs-static pairs at `origin + velocity` instead of
    /// `origin`. The correction is still applied to the current origin.
    pub predictive_static: bool,
}

impl Default for StepSettings {
    fn default() -> Self {
        Self { friction: DEFAULT_FRICTION, rest_epsilon: REST_EPSILON, predictive_static: false }
    }
}

impl StepSettings {
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_rest_epsilon(mut self, rest_epsilon: f32) -> Self {
        self.rest_epsilon = rest_epsilon;
        self
    }

    pub fn with_predictive_static(mut self, predictive_static: bool) -> Self {
        self.predictive_static = predictive_static;
        self
    }
}

//! Button press/release cycle detection
//!
//! The button is polled once per cycle. Edges come from comparing the level
//! with the previous poll, and a small state machine turns edges into
//! complete press-then-release cycles.

/// Level change between two polls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Released -> pressed
    Rise,
    /// Pressed -> released
    Fall,
    /// Level unchanged
    None,
}

impl Edge {
    /// Edge between the previous and current level
    pub const fn between(previous: bool, current: bool) -> Self {
        match (previous, current) {
            (false, true) => Edge::Rise,
            (true, false) => Edge::Fall,
            _ => Edge::None,
        }
    }
}

/// Button cycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Waiting for a press
    #[default]
    Idle,
    /// Press seen, waiting for the release
    Pressed,
    /// Release completed a cycle on this poll
    Released,
}

impl ButtonState {
    /// Next state for an edge
    ///
    /// Only `Pressed -> Released` completes a cycle. A release without a
    /// preceding press is ignored, and `Released` lasts a single poll.
    pub fn transition(self, edge: Edge) -> Self {
        use ButtonState::*;

        match (self, edge) {
            (Idle, Edge::Rise) => Pressed,
            (Idle, Edge::Fall) => Idle,
            (Idle, Edge::None) => Idle,

            (Pressed, Edge::Fall) => Released,
            (Pressed, Edge::Rise) => Pressed,
            (Pressed, Edge::None) => Pressed,

            (Released, Edge::Rise) => Pressed,
            (Released, Edge::Fall) => Idle,
            (Released, Edge::None) => Idle,
        }
    }
}

/// Edge detector plus cycle state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonTracker {
    previous_level: bool,
    state: ButtonState,
}

impl ButtonTracker {
    /// Tracker assuming the button starts released
    pub const fn new() -> Self {
        Self {
            previous_level: false,
            state: ButtonState::Idle,
        }
    }

    /// Feed one poll; `true` when this poll completed a press/release cycle
    pub fn update(&mut self, pressed: bool) -> bool {
        let edge = Edge::between(self.previous_level, pressed);
        self.previous_level = pressed;
        self.state = self.state.transition(edge);
        self.state == ButtonState::Released
    }

    /// Current state
    pub fn state(&self) -> ButtonState {
        self.state
    }
}

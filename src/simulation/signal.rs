/// Hint shown to the user naming the reset trigger.
pub const STATUS_HINT: &str = "R ... Reload";

/// Input polled once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Signal {
    /// Nothing pressed this frame. Still lets an auto-start launch fire.
    #[default]
    Idle,
    /// Launch the car.
    Launch,
    /// Rebuild the scene from its initial layout.
    Reset,
}

pub mod contact;
pub mod resolver;

pub use contact::{AxialContact, BumperSide};
pub use resolver::{CollisionResolver, CouplingState, StepReport};

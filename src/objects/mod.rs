pub mod body;
pub mod freedom;

pub use body::PhysicsBody;
pub use freedom::Freedom;

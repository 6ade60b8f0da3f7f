//! Network layer - async HTTP execution in the Tokio runtime

pub mod actor;
pub mod client;

pub use actor::NetworkActor;

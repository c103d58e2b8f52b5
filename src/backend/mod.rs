pub mod actor;
pub mod messages;

pub use actor::FlowActor;
pub use messages::FlowCommand;

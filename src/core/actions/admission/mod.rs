pub mod gate;
pub mod queue;

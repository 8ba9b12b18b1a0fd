pub mod gate;
pub mod lock;
pub mod registry;

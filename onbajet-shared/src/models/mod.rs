pub mod events;

pub use events::RecomputeEvent;

pub mod models;
pub mod money;
pub mod pii;

pub use money::{format_usd, round_cents};
pub use pii::Masked;

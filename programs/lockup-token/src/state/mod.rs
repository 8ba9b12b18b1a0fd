pub mod allowance;
pub mod holder;
pub mod token_config;
pub mod transfer_rule;

pub use allowance::*;
pub use holder::*;
pub use token_config::*;
pub use transfer_rule::*;

pub mod initialize;
pub mod open_holder;
pub mod register_transfer_rule;
pub mod transfer_tokens;
pub mod approve;
pub mod transfer_from;
pub mod burn_tokens;
pub mod transfer_ownership;
pub mod emit_balance_stats;
pub mod emit_transfer_rules;

pub use initialize::*;
pub use open_holder::*;
pub use register_transfer_rule::*;
pub use transfer_tokens::*;
pub use approve::*;
pub use transfer_from::*;
pub use burn_tokens::*;
pub use transfer_ownership::*;
pub use emit_balance_stats::*;
pub use emit_transfer_rules::*;

pub mod initialize_room;
pub mod deposit;
pub mod send_reward;
pub mod refund;
pub mod admin;
pub mod views;

// Glob re-exports for Anchor compatibility
// Note: "ambiguous glob re-exports" warning for `handler` is benign -
// lib.rs uses fully qualified paths (e.g., instructions::deposit::handler)
#[allow(ambiguous_glob_reexports)]
pub use initialize_room::*;
pub use deposit::*;
pub use send_reward::*;
pub use refund::*;
pub use admin::*;
pub use views::*;

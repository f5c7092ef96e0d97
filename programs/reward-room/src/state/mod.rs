pub mod access_control;
pub mod activation;
pub mod pause;
pub mod room_state;
pub mod reward_record;

pub use access_control::*;
pub use activation::*;
pub use pause::*;
pub use room_state::*;
pub use reward_record::*;

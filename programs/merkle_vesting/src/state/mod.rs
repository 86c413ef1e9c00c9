pub mod allocation_state;
pub mod claim_state;
pub mod distributor_state;
pub mod nonce_state;
pub mod root_registry;
pub mod vesting_schedule;

pub use allocation_state::*;
pub use claim_state::*;
pub use distributor_state::*;
pub use nonce_state::*;
pub use root_registry::*;
pub use vesting_schedule::*;

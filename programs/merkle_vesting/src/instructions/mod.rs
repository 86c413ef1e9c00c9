pub mod create_distributor;
pub mod set_merkle_root;
pub mod claim;
pub mod fund;
pub mod remove_funds;
pub mod create_allocation;
pub mod delete_allocation;
pub mod withdraw;
pub mod drawing_power;

pub use create_distributor::*;
pub use set_merkle_root::*;
pub use claim::*;
pub use fund::*;
pub use remove_funds::*;
pub use create_allocation::*;
pub use delete_allocation::*;
pub use withdraw::*;
pub use drawing_power::*;

pub mod create_lottery;
pub mod draw_winners;
pub mod fulfill_random_number;
pub mod initialize_lottery;
pub mod ports;
pub mod register_ticket_contract;
pub mod reward_over_cap;
pub mod reward_winners;
pub mod roles;
pub mod run_lottery;
pub mod setup_lottery;
pub mod withdraw;

pub use create_lottery::*;
pub use draw_winners::*;
pub use fulfill_random_number::*;
pub use initialize_lottery::*;
pub use register_ticket_contract::*;
pub use reward_over_cap::*;
pub use reward_winners::*;
pub use roles::*;
pub use run_lottery::*;
pub use setup_lottery::*;
pub use withdraw::*;

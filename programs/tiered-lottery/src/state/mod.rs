pub mod access;
pub mod ledger;
pub mod lottery;
pub mod phase;
pub mod registry;
pub mod ticket_book;
pub mod tier;

pub use access::*;
pub use ledger::*;
pub use lottery::*;
pub use phase::*;
pub use registry::*;
pub use ticket_book::*;
pub use tier::*;

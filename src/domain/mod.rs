mod advice;
mod category;
mod expense;
mod ledger;
mod money;

pub use advice::*;
pub use category::*;
pub use expense::*;
pub use ledger::*;
pub use money::*;

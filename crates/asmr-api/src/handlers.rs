//! Request handlers.

pub mod analysis;
pub mod health;
pub mod page;

pub use analysis::*;
pub use health::*;
pub use page::*;

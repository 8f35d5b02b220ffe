// Application layer - session orchestration and the output snapshot.

pub mod error;
pub mod reporting;
pub mod service;

pub use error::*;
pub use reporting::*;
pub use service::*;

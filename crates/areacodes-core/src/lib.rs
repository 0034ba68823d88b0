pub mod domain;
pub mod dto;
pub mod error;
pub mod rules;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use rules::*;

pub mod domain;
pub mod dto;
pub mod error;
pub mod rules;
pub mod select;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use rules::*;
pub use select::{select_index, Chooser, Selection};

mod controller;
mod gateway;
mod status;
mod types;
mod validate;

pub use controller::*;
pub use gateway::*;
pub use status::*;
pub use types::*;
pub use validate::{
    EMAIL_INVALID, EMAIL_REQUIRED, MESSAGE_MIN_CHARS, MESSAGE_REQUIRED, MESSAGE_TOO_SHORT,
    NAME_REQUIRED, validate,
};

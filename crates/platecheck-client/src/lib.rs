pub mod catalog;
pub mod commands;
pub mod completion;
pub mod contracts;
pub mod error;
pub mod lookup;
pub mod migrations;
pub mod render;
pub mod setup;
pub mod state;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{ClientError, ClientResult};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

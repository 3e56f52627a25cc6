pub mod app;
pub mod config;
pub mod domains;
pub mod email;
pub mod error;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use error::{ConfigError, TransportError, TransportErrorKind};
pub use utils::error::AppError;

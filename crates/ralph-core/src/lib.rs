pub mod config;
pub mod error;
pub mod io;
pub mod logs;
pub mod paths;
pub mod prd;
pub mod transcript;
pub mod watch;

pub use error::{RalphError, Result};

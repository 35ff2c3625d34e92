pub mod files;
pub mod messages;
pub mod prd;
pub mod progress;
pub mod stream;

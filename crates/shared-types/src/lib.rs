pub mod error;
pub mod config;

// Hospital domain types
pub mod appointment;
pub mod requests;
pub mod session;

pub use error::*;
pub use config::*;

pub use appointment::*;
pub use requests::*;
pub use session::*;

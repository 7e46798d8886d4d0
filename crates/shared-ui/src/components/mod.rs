// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form_select;
pub mod input;
pub mod navbar;
pub mod page_header;
pub mod skeleton;

// Primitive wrappers
pub mod toast;

// Re-exports for convenience
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use form_select::*;
pub use input::*;
pub use navbar::*;
pub use page_header::*;
pub use skeleton::*;
pub use toast::*;

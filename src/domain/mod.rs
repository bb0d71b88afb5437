pub mod email;
pub mod lead;

pub use email::EmailInput;
pub use lead::{Campus, Category, Classification, Lead, Priority};

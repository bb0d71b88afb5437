pub mod export;
pub mod input;

pub use export::write_leads;
pub use input::read_emails;

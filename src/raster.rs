pub mod compose;
pub mod label;
pub mod layout;
pub mod substitute;

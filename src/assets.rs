//! Input collaborators: sprite part folders and the names file.

pub mod decode;
pub mod names;
pub mod parts;

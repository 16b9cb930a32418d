//! Color and sprite inheritance rules.
//!
//! Raw sprite art is drawn in a fixed set of neutral marker grays. A cat's genome decides
//! which real color each marker becomes; descendants derive their genome from their parents'.

pub mod genome;
pub mod inherit;
pub mod palette;

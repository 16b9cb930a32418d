use std::fmt;

/// Straight RGB8 color. Components outside 0..=255 are unrepresentable.
pub type Rgb = [u8; 3];

/// One of the five sprite layers a cat is assembled from.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PartName {
    Ear,
    Eyes,
    Body,
    Tail,
    Legs,
}

impl PartName {
    /// All parts in stacking order.
    pub const ALL: [PartName; 5] = [
        PartName::Ear,
        PartName::Eyes,
        PartName::Body,
        PartName::Tail,
        PartName::Legs,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PartName::Ear => "ear",
            PartName::Eyes => "eyes",
            PartName::Body => "body",
            PartName::Tail => "tail",
            PartName::Legs => "legs",
        }
    }

    /// Folder under the assets root holding this part's images.
    pub fn folder(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for PartName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generational rank of a cat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Parent,
    Kitten,
    Grandkitten,
    GreatGrandkitten,
}

impl Tier {
    pub fn generation(self) -> u8 {
        match self {
            Tier::Parent => 0,
            Tier::Kitten => 1,
            Tier::Grandkitten => 2,
            Tier::GreatGrandkitten => 3,
        }
    }
}

/// Index of a cat inside its [`crate::FamilyTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CatId(pub usize);

impl fmt::Display for CatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

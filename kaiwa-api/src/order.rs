/// Ordering of a post's top-level comments. Replies always keep their
/// insertion order under their parent, whatever the mode.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    bolero::generator::TypeGenerator,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum SortMode {
    Best,
    /// Same ranking as `Best`; the two names are kept distinct for
    /// compatibility, not because the formulas differ.
    Top,
    New,
    Controversial,
}

impl Default for SortMode {
    fn default() -> SortMode {
        SortMode::Best
    }
}

/// Suffix marking a complex-valued band whose intensity counterpart is
/// derived by stripping the suffix from the name
pub const COMPLEX_SUFFIX: &str = "_complex";

/// A single data band exposed by an opened resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Band {
    pub name: String,
}

impl Band {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Whether this band holds complex data
    pub fn is_complex(&self) -> bool {
        self.name.contains(COMPLEX_SUFFIX)
    }

    /// Name of the intensity band derived from a complex band
    pub fn base_name(&self) -> String {
        self.name.replace(COMPLEX_SUFFIX, "")
    }
}

//! Section identifiers
//!
//! Sections and triggers are correlated by caller-supplied string ids.
//! `SectionId` wraps the string in shared storage so ids can be cloned
//! freely into snapshots, change notifications, and error values.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// An opaque, caller-supplied section identifier
///
/// Unique per section and, separately, unique per trigger; the same string
/// correlates a trigger to its section. Cheap to clone.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(Arc<str>);

impl SectionId {
    /// Create an id from any string-like value
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// View the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

// Lets ordered maps keyed by SectionId be queried with plain &str.
impl Borrow<str> for SectionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SectionId({:?})", &*self.0)
    }
}

//! Type tags: the classification labels used for signature matching.
//!
//! A [`TypeTag`] names the runtime classification of one argument value.
//! Signatures are ordered sequences of tags; matching is sequence equality
//! only -- same length, same tags, same order. There is no coercion and no
//! subtype ranking.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// An ordered parameter-type signature. Most signatures are short, so they
/// are stored inline.
pub type Signature = SmallVec<[TypeTag; 4]>;

/// The classification label assigned to an argument value.
///
/// The four well-known tags cover the primitive classifications; anything
/// else carries the host's concrete runtime type name in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    Bool,
    Int,
    Str,
    Array,
    /// The host's concrete runtime type name for values outside the
    /// well-known set (e.g. `"float"`).
    Other(String),
}

impl TypeTag {
    /// Convenience constructor for [`TypeTag::Other`].
    pub fn other(name: impl Into<String>) -> TypeTag {
        TypeTag::Other(name.into())
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Bool => write!(f, "bool"),
            TypeTag::Int => write!(f, "int"),
            TypeTag::Str => write!(f, "string"),
            TypeTag::Array => write!(f, "array"),
            TypeTag::Other(name) => write!(f, "{}", name),
        }
    }
}

//! Transformation registry.
//!
//! Maps a transformation tag from the mapping configuration to the function
//! that combines a rule's source values. Tags with no registered function
//! resolve through the passthrough/structural branch of the engine.
//!
//! # Example
//!
//! ```ignore
//! use patmap_transform::{default_registry, ResolutionContext};
//!
//! let registry = default_registry();
//! if let Some(transform) = registry.get("to_int") {
//!     let value = transform(&["42".to_string()], &ResolutionContext::today());
//! }
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use patmap_model::ResolvedValue;

use crate::context::ResolutionContext;
use crate::transforms;

/// A transformation over a rule's raw source values.
pub type TransformFn = fn(&[String], &ResolutionContext) -> ResolvedValue;

/// The transformations shipped with the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinTransform {
    ToInt,
    ConcatStrings,
    AgeFromDob,
}

impl BuiltinTransform {
    pub const ALL: [BuiltinTransform; 3] = [
        BuiltinTransform::ToInt,
        BuiltinTransform::ConcatStrings,
        BuiltinTransform::AgeFromDob,
    ];

    /// Tag as written in the mapping configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinTransform::ToInt => "to_int",
            BuiltinTransform::ConcatStrings => "concat_strings",
            BuiltinTransform::AgeFromDob => "age_from_dob",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BuiltinTransform::ToInt => {
                "Parse the first source field as an integer; keep the text if it does not parse"
            }
            BuiltinTransform::ConcatStrings => "Join all source fields with a single space",
            BuiltinTransform::AgeFromDob => {
                "Age in whole years from a YYYY-MM-DD date of birth; -1 if the date is invalid"
            }
        }
    }

    pub fn function(&self) -> TransformFn {
        match self {
            BuiltinTransform::ToInt => transforms::to_int,
            BuiltinTransform::ConcatStrings => transforms::concat_strings,
            BuiltinTransform::AgeFromDob => transforms::age_from_dob,
        }
    }
}

impl fmt::Display for BuiltinTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuiltinTransform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuiltinTransform::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown transform: {s}"))
    }
}

/// Lookup from transformation tag to function.
///
/// Read-only once built, so a single registry can be shared by every record.
#[derive(Clone, Default)]
pub struct TransformRegistry {
    transforms: HashMap<&'static str, TransformFn>,
}

impl TransformRegistry {
    /// Creates an empty registry; every tag resolves as passthrough.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry containing every [`BuiltinTransform`].
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for transform in BuiltinTransform::ALL {
            registry.register(transform.as_str(), transform.function());
        }
        registry
    }

    /// Registers `function` under `tag`, replacing any previous entry.
    pub fn register(&mut self, tag: &'static str, function: TransformFn) {
        self.transforms.insert(tag, function);
    }

    pub fn get(&self, tag: &str) -> Option<TransformFn> {
        self.transforms.get(tag).copied()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.transforms.contains_key(tag)
    }

    /// Registered tags, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.transforms.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

impl fmt::Debug for TransformRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformRegistry")
            .field("transforms", &self.names())
            .finish()
    }
}

/// Shared registry of the builtin transformations, built on first use.
pub fn default_registry() -> &'static TransformRegistry {
    static REGISTRY: OnceLock<TransformRegistry> = OnceLock::new();
    REGISTRY.get_or_init(TransformRegistry::builtin)
}

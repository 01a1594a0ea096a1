//! Field resolution engine.
//!
//! This crate turns one [`FlatRecordMap`](patmap_model::FlatRecordMap) into
//! one mapped output object by walking the mapping rule tree:
//!
//! - **context**: per-run inputs that are not part of a record (reference date)
//! - **transforms**: the named value transformations (`to_int`, ...)
//! - **registry**: tag to transformation lookup, built once
//! - **engine**: recursive rule resolution and per-record/per-document mapping

#![deny(unsafe_code)]

pub mod context;
pub mod engine;
pub mod registry;
pub mod transforms;

pub use context::ResolutionContext;
pub use engine::{FieldResolver, resolve, transform_all, transform_record};
pub use registry::{BuiltinTransform, TransformFn, TransformRegistry, default_registry};
pub use transforms::{age_from_dob, calculate_age, concat_strings, to_int};

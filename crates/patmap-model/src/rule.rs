//! Mapping rule tree.
//!
//! A configuration file holds an ordered list of [`MappingRule`]s. Each rule
//! names the output key (`json_field`), the source fields it reads
//! (`xml_fields`), an optional transformation tag and optional child rules
//! that build a nested object.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};

/// One node of the mapping rule tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRule {
    /// Key under which the resolved value is placed in the output object.
    pub json_field: String,
    /// Source field names, in the order the transformation consumes them.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub xml_fields: Vec<String>,
    /// Transformation tag (e.g. `to_int`). Unknown or absent tags fall back
    /// to passthrough/structural resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
    /// Child rules; when non-empty and no transformation applies, the value
    /// is a nested object built from these rules.
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<MappingRule>,
}

impl MappingRule {
    pub fn new(json_field: impl Into<String>) -> Self {
        Self {
            json_field: json_field.into(),
            xml_fields: Vec::new(),
            transform: None,
            children: Vec::new(),
        }
    }

    /// Set the source fields read by this rule.
    #[must_use]
    pub fn with_sources<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.xml_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Set the transformation tag.
    #[must_use]
    pub fn with_transform(mut self, transform: impl Into<String>) -> Self {
        self.transform = Some(transform.into());
        self
    }

    /// Set the child rules.
    #[must_use]
    pub fn with_children(mut self, children: Vec<MappingRule>) -> Self {
        self.children = children;
        self
    }

    /// Transformation tag, or `""` when none is configured.
    pub fn transform_tag(&self) -> &str {
        self.transform.as_deref().unwrap_or("")
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Height of this subtree (1 for a leaf rule).
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(MappingRule::depth)
            .max()
            .unwrap_or(0)
    }

    /// Number of rules in this subtree, including this one.
    pub fn rule_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(MappingRule::rule_count)
            .sum::<usize>()
    }
}

/// The complete mapping configuration loaded once per run.
///
/// Deserializes from either `{"mappings": [...]}` or a bare array of rules.
/// A missing or `null` `mappings` key yields an empty configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MappingConfig {
    pub mappings: Vec<MappingRule>,
}

impl<'de> Deserialize<'de> for MappingConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MappingConfigVisitor)
    }
}

struct MappingConfigVisitor;

impl<'de> Visitor<'de> for MappingConfigVisitor {
    type Value = MappingConfig;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an array of mapping rules or an object with a `mappings` array")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut mappings = Vec::new();
        while let Some(rule) = seq.next_element()? {
            mappings.push(rule);
        }
        Ok(MappingConfig { mappings })
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut mappings: Option<Vec<MappingRule>> = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == "mappings" {
                if mappings.is_some() {
                    return Err(de::Error::duplicate_field("mappings"));
                }
                let value: Option<Vec<MappingRule>> = map.next_value()?;
                mappings = Some(value.unwrap_or_default());
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(MappingConfig {
            mappings: mappings.unwrap_or_default(),
        })
    }
}

/// Reads an absent-or-`null` list as empty.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl MappingConfig {
    pub fn new(mappings: Vec<MappingRule>) -> Self {
        Self { mappings }
    }

    /// Total number of rules across the whole tree.
    pub fn rule_count(&self) -> usize {
        self.mappings.iter().map(MappingRule::rule_count).sum()
    }

    /// Height of the deepest top-level rule (0 for an empty config).
    pub fn depth(&self) -> usize {
        self.mappings
            .iter()
            .map(MappingRule::depth)
            .max()
            .unwrap_or(0)
    }
}

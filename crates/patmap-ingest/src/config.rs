//! Mapping configuration loading.
//!
//! The loader performs no semantic validation: unknown transformation tags
//! are accepted and resolve as passthrough rules. Rule trees are acyclic by
//! construction since they come from a JSON document.

use std::fs;
use std::path::Path;

use tracing::debug;

use patmap_model::{MappingConfig, MappingRule};

use crate::error::{IngestError, Result};

/// Parse a mapping configuration from JSON text.
pub fn parse_mapping_config(text: &str) -> Result<MappingConfig> {
    serde_json::from_str(text).map_err(IngestError::ConfigText)
}

/// Read and parse the mapping configuration file at `path`.
pub fn load_mapping_config(path: &Path) -> Result<MappingConfig> {
    let text = fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let config: MappingConfig =
        serde_json::from_str(&text).map_err(|source| IngestError::Config {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(
        path = %path.display(),
        top_level_rules = config.mappings.len(),
        total_rules = config.rule_count(),
        depth = config.depth(),
        "loaded mapping config"
    );
    Ok(config)
}

/// List rules whose transformation tag is set but not in `known`.
///
/// Entries are dotted `json_field` paths (e.g. `name.first`). Such rules
/// still resolve through the passthrough branch; this is informational.
pub fn unknown_transforms(config: &MappingConfig, known: &[&str]) -> Vec<String> {
    let mut found = Vec::new();
    for rule in &config.mappings {
        collect_unknown(rule, "", known, &mut found);
    }
    found
}

fn collect_unknown(rule: &MappingRule, prefix: &str, known: &[&str], found: &mut Vec<String>) {
    let path = if prefix.is_empty() {
        rule.json_field.clone()
    } else {
        format!("{prefix}.{}", rule.json_field)
    };
    let tag = rule.transform_tag();
    if !tag.is_empty() && !known.contains(&tag) {
        found.push(path.clone());
    }
    for child in &rule.children {
        collect_unknown(child, &path, known, found);
    }
}

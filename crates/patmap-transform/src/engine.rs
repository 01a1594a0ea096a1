//! Recursive rule resolution.
//!
//! Resolution of one rule against one record:
//!
//! 1. Look up every `xml_fields` entry in the record; absent fields read as `""`.
//! 2. If the rule's tag is registered, apply that transformation.
//! 3. Otherwise, when the rule has children, resolve each child against the
//!    same record into a nested object (`xml_fields` are ignored).
//! 4. Otherwise, pass the first source value through unchanged.
//!
//! Resolution never fails and never performs I/O. Sibling rules sharing a
//! `json_field` overwrite one another; the last rule wins.

use tracing::{debug, trace, trace_span};

use patmap_model::{
    FlatRecordMap, MappedRecord, MappingRule, OutputDocument, ResolvedValue,
};

use crate::context::ResolutionContext;
use crate::registry::{TransformRegistry, default_registry};
use crate::transforms::first_value;

/// Resolves mapping rules against records using a fixed registry and context.
#[derive(Debug, Clone, Copy)]
pub struct FieldResolver<'a> {
    registry: &'a TransformRegistry,
    context: ResolutionContext,
}

impl<'a> FieldResolver<'a> {
    pub fn new(registry: &'a TransformRegistry, context: ResolutionContext) -> Self {
        Self { registry, context }
    }

    pub fn context(&self) -> &ResolutionContext {
        &self.context
    }

    /// Resolve one rule against one record.
    pub fn resolve(&self, rule: &MappingRule, record: &FlatRecordMap) -> ResolvedValue {
        let values: Vec<String> = rule
            .xml_fields
            .iter()
            .map(|field| record.get_or_empty(field).to_string())
            .collect();

        if let Some(transform) = self.registry.get(rule.transform_tag()) {
            return transform(&values, &self.context);
        }

        if rule.has_children() {
            return ResolvedValue::Object(self.resolve_rules(&rule.children, record));
        }

        ResolvedValue::String(first_value(&values).to_string())
    }

    /// Resolve every top-level rule against one record.
    pub fn transform_record(&self, record: &FlatRecordMap, rules: &[MappingRule]) -> MappedRecord {
        self.resolve_rules(rules, record)
    }

    /// Map every record in input order.
    pub fn transform_all(&self, records: &[FlatRecordMap], rules: &[MappingRule]) -> OutputDocument {
        let patients = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let span = trace_span!("record", index);
                span.in_scope(|| self.transform_record(record, rules))
            })
            .collect::<Vec<_>>();
        debug!(
            record_count = patients.len(),
            rule_count = rules.len(),
            "mapped records"
        );
        OutputDocument::new(patients)
    }

    fn resolve_rules(&self, rules: &[MappingRule], record: &FlatRecordMap) -> MappedRecord {
        let mut mapped = MappedRecord::new();
        for rule in rules {
            let value = self.resolve(rule, record);
            trace!(
                json_field = %rule.json_field,
                transform = rule.transform_tag(),
                kind = value.kind(),
                "resolved rule"
            );
            mapped.insert(rule.json_field.clone(), value);
        }
        mapped
    }
}

/// Resolve `rule` against `record` with the builtin transformations.
pub fn resolve(
    rule: &MappingRule,
    record: &FlatRecordMap,
    context: &ResolutionContext,
) -> ResolvedValue {
    FieldResolver::new(default_registry(), *context).resolve(rule, record)
}

/// Resolve every rule against one record with the builtin transformations.
pub fn transform_record(
    record: &FlatRecordMap,
    rules: &[MappingRule],
    context: &ResolutionContext,
) -> MappedRecord {
    FieldResolver::new(default_registry(), *context).transform_record(record, rules)
}

/// Map every record, in input order, with the builtin transformations.
pub fn transform_all(
    records: &[FlatRecordMap],
    rules: &[MappingRule],
    context: &ResolutionContext,
) -> OutputDocument {
    FieldResolver::new(default_registry(), *context).transform_all(records, rules)
}

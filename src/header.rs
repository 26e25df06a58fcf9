//! Turns the collected field names into the final CSV header.
//!
//! Selection runs include, then exclude, then order. Each stage keeps the
//! incoming first-seen order of the fields it lets through.

use std::collections::HashSet;

use crate::collector::KeyUniverse;

/// Caller-supplied field directives. Empty lists impose no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelection {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub order: Vec<String>,
}

impl FieldSelection {
    pub fn new(include: Vec<String>, exclude: Vec<String>, order: Vec<String>) -> Self {
        Self {
            include,
            exclude,
            order,
        }
    }

    /// Resolves the final header for `universe`.
    ///
    /// The result holds each surviving field exactly once: the fields named in
    /// `order` first, in that order, followed by the rest in first-seen order.
    pub fn resolve(&self, universe: &KeyUniverse) -> Vec<String> {
        let fields: Vec<String> = universe.iter().map(str::to_owned).collect();
        let fields = include_fields(fields, &self.include);
        let fields = exclude_fields(fields, &self.exclude);
        let header = order_fields(fields, &self.order);

        tracing::debug!(header = ?header, "resolved header");
        header
    }
}

/// Keeps only the fields named in `include`, or all of them if it is empty.
/// Names in `include` that do not occur in `fields` are ignored.
pub fn include_fields(fields: Vec<String>, include: &[String]) -> Vec<String> {
    if include.is_empty() {
        return fields;
    }
    let wanted: HashSet<&str> = include.iter().map(String::as_str).collect();
    fields
        .into_iter()
        .filter(|field| wanted.contains(field.as_str()))
        .collect()
}

/// Drops every field named in `exclude`.
pub fn exclude_fields(fields: Vec<String>, exclude: &[String]) -> Vec<String> {
    if exclude.is_empty() {
        return fields;
    }
    let unwanted: HashSet<&str> = exclude.iter().map(String::as_str).collect();
    fields
        .into_iter()
        .filter(|field| !unwanted.contains(field.as_str()))
        .collect()
}

/// Moves the fields named in `order` to the front.
///
/// Names absent from `fields` are skipped and repeated names only count once.
pub fn order_fields(fields: Vec<String>, order: &[String]) -> Vec<String> {
    let available: HashSet<&str> = fields.iter().map(String::as_str).collect();
    let mut placed: HashSet<&str> = HashSet::new();
    let mut header: Vec<String> = Vec::with_capacity(fields.len());

    for name in order {
        if available.contains(name.as_str()) && placed.insert(name.as_str()) {
            header.push(name.clone());
        }
    }

    header.extend(
        fields
            .iter()
            .filter(|field| !placed.contains(field.as_str()))
            .cloned(),
    );
    header
}

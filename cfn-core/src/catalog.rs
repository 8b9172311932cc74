//! Catalog - Registry of known resource types
//!
//! Each entry pairs a type name with its schema and a typed parse function,
//! so untyped templates can be checked against the generated declarations.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde_json::Value as Json;

use crate::intrinsic::{References, collect_json_references};
use crate::resource::CfnResource;
use crate::schema::ResourceSchema;
use crate::template::Template;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A finding about one resource of a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub logical_id: String,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    fn error(logical_id: &str, message: impl Into<String>) -> Self {
        Self {
            logical_id: logical_id.to_string(),
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(logical_id: &str, message: impl Into<String>) -> Self {
        Self {
            logical_id: logical_id.to_string(),
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.logical_id, self.message)
    }
}

/// A registered resource type
#[derive(Clone, Copy)]
pub struct ResourceTypeEntry {
    pub type_name: &'static str,
    pub schema: fn() -> ResourceSchema,
    parse: fn(Json) -> Result<(), serde_json::Error>,
}

impl ResourceTypeEntry {
    pub fn of<P: CfnResource>() -> Self {
        Self {
            type_name: P::TYPE_NAME,
            schema: P::schema,
            parse: |value| serde_json::from_value::<P>(value).map(|_| ()),
        }
    }

    /// Check a `Properties` object against the schema, then against the
    /// typed declaration. Schema errors come with paths; the typed parse
    /// only runs when the schema check passes.
    pub fn check_properties(&self, properties: &Json) -> Result<(), Vec<String>> {
        if let Err(errors) = (self.schema)().validate(properties) {
            return Err(errors.iter().map(ToString::to_string).collect());
        }
        (self.parse)(properties.clone()).map_err(|e| vec![e.to_string()])
    }
}

impl fmt::Debug for ResourceTypeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceTypeEntry")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Resource types indexed by type name
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<&'static str, ResourceTypeEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<ResourceTypeEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(|e| (e.type_name, e)).collect(),
        }
    }

    pub fn get(&self, type_name: &str) -> Option<&ResourceTypeEntry> {
        self.entries.get(type_name)
    }

    /// Registered type names, sorted
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = &ResourceTypeEntry> {
        self.entries.values()
    }

    pub fn schemas(&self) -> Vec<ResourceSchema> {
        self.entries.values().map(|e| (e.schema)()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check every resource of a template, in logical ID order
    pub fn check_template(&self, template: &Template) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (logical_id, resource) in &template.resources {
            log::debug!("Checking {} ({})", logical_id, resource.type_name);

            let properties = resource.properties_json();
            match self.get(&resource.type_name) {
                Some(entry) => {
                    if let Err(errors) = entry.check_properties(&properties) {
                        diagnostics.extend(
                            errors
                                .into_iter()
                                .map(|message| Diagnostic::error(logical_id, message)),
                        );
                    }
                }
                None => diagnostics.push(Diagnostic::warning(
                    logical_id,
                    format!("Unknown resource type '{}'", resource.type_name),
                )),
            }

            for dependency in resource.attributes.dependencies() {
                if !template.resources.contains_key(dependency) {
                    diagnostics.push(Diagnostic::error(
                        logical_id,
                        format!("DependsOn target '{}' is not declared", dependency),
                    ));
                }
            }

            if let Some(condition) = &resource.attributes.condition
                && !template.conditions.contains_key(condition)
            {
                diagnostics.push(Diagnostic::error(
                    logical_id,
                    format!("Condition '{}' is not declared", condition),
                ));
            }

            let mut references = References::default();
            collect_json_references(&properties, &mut references);
            let mut undeclared = BTreeSet::new();
            for name in &references.refs {
                if !template.is_declared(name) {
                    undeclared.insert(name.as_str());
                }
            }
            for name in &references.attributes {
                if template.is_resource(name) {
                    continue;
                }
                if template.parameters.contains_key(name) {
                    diagnostics.push(Diagnostic::error(
                        logical_id,
                        format!("Fn::GetAtt target '{}' is a parameter, not a resource", name),
                    ));
                } else {
                    undeclared.insert(name.as_str());
                }
            }
            diagnostics.extend(undeclared.into_iter().map(|name| {
                Diagnostic::error(logical_id, format!("Reference to undeclared '{}'", name))
            }));
        }

        diagnostics
    }
}

//! Attributes shared by every resource declaration

use std::slice;

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::value::Value;

/// What happens to a resource when it is deleted or replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeletionPolicy {
    Delete,
    Retain,
    RetainExceptOnCreate,
    Snapshot,
}

/// `DependsOn` accepts a single logical ID or a list of them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependsOn {
    One(String),
    Many(Vec<String>),
}

impl DependsOn {
    pub fn names(&self) -> &[String] {
        match self {
            DependsOn::One(name) => slice::from_ref(name),
            DependsOn::Many(names) => names,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AutoScalingCreationPolicy {
    #[serde(
        rename = "MinSuccessfulInstancesPercent",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_successful_instances_percent: Option<Value<i64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceSignal {
    #[serde(rename = "Count", skip_serializing_if = "Option::is_none")]
    pub count: Option<Value<i64>>,
    /// ISO 8601 duration, e.g. "PT15M"
    #[serde(rename = "Timeout", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Value<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreationPolicy {
    #[serde(
        rename = "AutoScalingCreationPolicy",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_scaling_creation_policy: Option<AutoScalingCreationPolicy>,
    #[serde(rename = "ResourceSignal", skip_serializing_if = "Option::is_none")]
    pub resource_signal: Option<ResourceSignal>,
}

/// Attributes common to all CloudFormation resources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceAttributes {
    #[serde(rename = "DependsOn", skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<DependsOn>,
    #[serde(rename = "Condition", skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(rename = "Metadata", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Json>,
    #[serde(rename = "DeletionPolicy", skip_serializing_if = "Option::is_none")]
    pub deletion_policy: Option<DeletionPolicy>,
    #[serde(rename = "UpdateReplacePolicy", skip_serializing_if = "Option::is_none")]
    pub update_replace_policy: Option<DeletionPolicy>,
    #[serde(rename = "CreationPolicy", skip_serializing_if = "Option::is_none")]
    pub creation_policy: Option<CreationPolicy>,
    /// Free-form; its shape depends on the resource type
    #[serde(rename = "UpdatePolicy", skip_serializing_if = "Option::is_none")]
    pub update_policy: Option<Json>,
}

impl ResourceAttributes {
    /// Logical IDs listed in `DependsOn`
    pub fn dependencies(&self) -> &[String] {
        self.depends_on.as_ref().map(DependsOn::names).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        *self == ResourceAttributes::default()
    }
}

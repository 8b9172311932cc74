//! Intrinsic - CloudFormation intrinsic function calls
//!
//! Property values may be computed at deploy time with `Ref`, `Fn::GetAtt`,
//! `Fn::Sub` and friends. `Intrinsic` holds one such call in typed form and
//! converts to and from the single-key JSON object CloudFormation expects.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value as Json};
use thiserror::Error;

/// Pseudo parameters predefined by CloudFormation
pub mod pseudo {
    pub const ACCOUNT_ID: &str = "AWS::AccountId";
    pub const NOTIFICATION_ARNS: &str = "AWS::NotificationARNs";
    pub const NO_VALUE: &str = "AWS::NoValue";
    pub const PARTITION: &str = "AWS::Partition";
    pub const REGION: &str = "AWS::Region";
    pub const STACK_ID: &str = "AWS::StackId";
    pub const STACK_NAME: &str = "AWS::StackName";
    pub const URL_SUFFIX: &str = "AWS::URLSuffix";

    const ALL: &[&str] = &[
        ACCOUNT_ID,
        NOTIFICATION_ARNS,
        NO_VALUE,
        PARTITION,
        REGION,
        STACK_ID,
        STACK_NAME,
        URL_SUFFIX,
    ];

    /// Returns true if `name` is a pseudo parameter (e.g., "AWS::Region")
    pub fn is_pseudo_parameter(name: &str) -> bool {
        ALL.contains(&name)
    }
}

/// Error converting JSON into an intrinsic function call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntrinsicError {
    #[error("Not an intrinsic function: expected an object with a single Ref, Condition or Fn:: key")]
    NotAnIntrinsic,

    #[error("Unknown intrinsic function '{0}'")]
    UnknownFunction(String),

    #[error("Invalid arguments for {function}: expected {expected}")]
    InvalidArguments {
        function: &'static str,
        expected: &'static str,
    },
}

fn invalid(function: &'static str, expected: &'static str) -> IntrinsicError {
    IntrinsicError::InvalidArguments { function, expected }
}

/// Argument of an intrinsic function
///
/// Arguments may be literals, lists, or nested intrinsic calls
/// (e.g., the list passed to `Fn::Join` can itself be a `Fn::GetAZs`).
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Intrinsic(Box<Intrinsic>),
    List(Vec<Expr>),
    Literal(Json),
}

impl Expr {
    pub fn literal(value: impl Into<Json>) -> Self {
        Expr::Literal(value.into())
    }

    /// Parse a JSON argument, recognising nested intrinsic calls
    pub fn from_json(value: Json) -> Result<Self, IntrinsicError> {
        if Intrinsic::is_intrinsic(&value) {
            return Intrinsic::from_json(value).map(|i| Expr::Intrinsic(Box::new(i)));
        }
        match value {
            Json::Array(items) => items
                .into_iter()
                .map(Expr::from_json)
                .collect::<Result<Vec<_>, _>>()
                .map(Expr::List),
            other => Ok(Expr::Literal(other)),
        }
    }

    pub fn to_json(&self) -> Json {
        match self {
            Expr::Intrinsic(intrinsic) => intrinsic.to_json(),
            Expr::List(items) => Json::Array(items.iter().map(Expr::to_json).collect()),
            Expr::Literal(value) => value.clone(),
        }
    }

    fn collect_references(&self, out: &mut References) {
        match self {
            Expr::Intrinsic(intrinsic) => intrinsic.collect_references(out),
            Expr::List(items) => items.iter().for_each(|item| item.collect_references(out)),
            Expr::Literal(value) => collect_json_references(value, out),
        }
    }
}

impl From<Intrinsic> for Expr {
    fn from(intrinsic: Intrinsic) -> Self {
        Expr::Intrinsic(Box::new(intrinsic))
    }
}

impl From<&str> for Expr {
    fn from(s: &str) -> Self {
        Expr::Literal(Json::String(s.to_string()))
    }
}

impl From<String> for Expr {
    fn from(s: String) -> Self {
        Expr::Literal(Json::String(s))
    }
}

/// A CloudFormation intrinsic function call
#[derive(Debug, Clone, PartialEq)]
pub enum Intrinsic {
    /// `{"Ref": "LogicalName"}`
    Ref(String),
    /// `{"Fn::GetAtt": ["LogicalName", "Attribute"]}`
    GetAtt {
        logical_name: String,
        attribute: String,
    },
    Base64(Expr),
    Cidr {
        ip_block: Expr,
        count: Expr,
        cidr_bits: Expr,
    },
    FindInMap {
        map_name: Expr,
        top_level_key: Expr,
        second_level_key: Expr,
    },
    GetAzs(Expr),
    ImportValue(Expr),
    Join {
        delimiter: String,
        values: Expr,
    },
    Select {
        index: Expr,
        list: Expr,
    },
    Split {
        delimiter: String,
        source: Expr,
    },
    /// `Fn::Sub` in either the string or the `[template, variables]` form
    Sub {
        template: String,
        variables: BTreeMap<String, Expr>,
    },
    If {
        condition: String,
        when_true: Expr,
        when_false: Expr,
    },
    Equals(Expr, Expr),
    And(Vec<Expr>),
    Or(Vec<Expr>),
    Not(Expr),
    /// `{"Condition": "ConditionName"}`
    Condition(String),
}

fn fixed_args<const N: usize>(
    args: Json,
    function: &'static str,
    expected: &'static str,
) -> Result<[Json; N], IntrinsicError> {
    match args {
        Json::Array(items) => <[Json; N]>::try_from(items).map_err(|_| invalid(function, expected)),
        _ => Err(invalid(function, expected)),
    }
}

fn string_arg(
    value: Json,
    function: &'static str,
    expected: &'static str,
) -> Result<String, IntrinsicError> {
    match value {
        Json::String(s) => Ok(s),
        _ => Err(invalid(function, expected)),
    }
}

fn condition_list(
    args: Json,
    function: &'static str,
    expected: &'static str,
) -> Result<Vec<Expr>, IntrinsicError> {
    match args {
        Json::Array(items) if (2..=10).contains(&items.len()) => {
            items.into_iter().map(Expr::from_json).collect()
        }
        _ => Err(invalid(function, expected)),
    }
}

impl Intrinsic {
    /// `{"Ref": name}`
    pub fn reference(name: impl Into<String>) -> Self {
        Intrinsic::Ref(name.into())
    }

    /// `{"Fn::GetAtt": [logical_name, attribute]}`
    pub fn get_att(logical_name: impl Into<String>, attribute: impl Into<String>) -> Self {
        Intrinsic::GetAtt {
            logical_name: logical_name.into(),
            attribute: attribute.into(),
        }
    }

    /// `{"Fn::Sub": template}` without variables
    pub fn sub(template: impl Into<String>) -> Self {
        Intrinsic::Sub {
            template: template.into(),
            variables: BTreeMap::new(),
        }
    }

    /// `{"Fn::Join": [delimiter, [values...]]}`
    pub fn join<I, E>(delimiter: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        Intrinsic::Join {
            delimiter: delimiter.into(),
            values: Expr::List(values.into_iter().map(Into::into).collect()),
        }
    }

    /// `{"Fn::ImportValue": name}`
    pub fn import_value(name: impl Into<Expr>) -> Self {
        Intrinsic::ImportValue(name.into())
    }

    /// Function name as written in templates (e.g., "Fn::GetAtt")
    pub fn function_name(&self) -> &'static str {
        match self {
            Intrinsic::Ref(_) => "Ref",
            Intrinsic::GetAtt { .. } => "Fn::GetAtt",
            Intrinsic::Base64(_) => "Fn::Base64",
            Intrinsic::Cidr { .. } => "Fn::Cidr",
            Intrinsic::FindInMap { .. } => "Fn::FindInMap",
            Intrinsic::GetAzs(_) => "Fn::GetAZs",
            Intrinsic::ImportValue(_) => "Fn::ImportValue",
            Intrinsic::Join { .. } => "Fn::Join",
            Intrinsic::Select { .. } => "Fn::Select",
            Intrinsic::Split { .. } => "Fn::Split",
            Intrinsic::Sub { .. } => "Fn::Sub",
            Intrinsic::If { .. } => "Fn::If",
            Intrinsic::Equals(..) => "Fn::Equals",
            Intrinsic::And(_) => "Fn::And",
            Intrinsic::Or(_) => "Fn::Or",
            Intrinsic::Not(_) => "Fn::Not",
            Intrinsic::Condition(_) => "Condition",
        }
    }

    /// Returns true if the JSON value has the shape of an intrinsic call:
    /// an object with exactly one key that is `Ref`, `Condition` or `Fn::*`
    pub fn is_intrinsic(value: &Json) -> bool {
        match value.as_object() {
            Some(map) if map.len() == 1 => map
                .keys()
                .next()
                .is_some_and(|k| k == "Ref" || k == "Condition" || k.starts_with("Fn::")),
            _ => false,
        }
    }

    pub fn from_json(value: Json) -> Result<Self, IntrinsicError> {
        let Json::Object(map) = value else {
            return Err(IntrinsicError::NotAnIntrinsic);
        };
        if map.len() != 1 {
            return Err(IntrinsicError::NotAnIntrinsic);
        }
        let Some((key, args)) = map.into_iter().next() else {
            return Err(IntrinsicError::NotAnIntrinsic);
        };

        match key.as_str() {
            "Ref" => Ok(Intrinsic::Ref(string_arg(args, "Ref", "a name")?)),
            "Condition" => Ok(Intrinsic::Condition(string_arg(
                args,
                "Condition",
                "a condition name",
            )?)),
            "Fn::GetAtt" => parse_get_att(args),
            "Fn::Base64" => Ok(Intrinsic::Base64(Expr::from_json(args)?)),
            "Fn::Cidr" => {
                let [ip_block, count, cidr_bits] =
                    fixed_args(args, "Fn::Cidr", "[ipBlock, count, cidrBits]")?;
                Ok(Intrinsic::Cidr {
                    ip_block: Expr::from_json(ip_block)?,
                    count: Expr::from_json(count)?,
                    cidr_bits: Expr::from_json(cidr_bits)?,
                })
            }
            "Fn::FindInMap" => {
                let [map_name, top_level_key, second_level_key] = fixed_args(
                    args,
                    "Fn::FindInMap",
                    "[MapName, TopLevelKey, SecondLevelKey]",
                )?;
                Ok(Intrinsic::FindInMap {
                    map_name: Expr::from_json(map_name)?,
                    top_level_key: Expr::from_json(top_level_key)?,
                    second_level_key: Expr::from_json(second_level_key)?,
                })
            }
            "Fn::GetAZs" => Ok(Intrinsic::GetAzs(Expr::from_json(args)?)),
            "Fn::ImportValue" => Ok(Intrinsic::ImportValue(Expr::from_json(args)?)),
            "Fn::Join" => {
                let [delimiter, values] =
                    fixed_args(args, "Fn::Join", "[delimiter, [values]]")?;
                Ok(Intrinsic::Join {
                    delimiter: string_arg(delimiter, "Fn::Join", "a string delimiter")?,
                    values: Expr::from_json(values)?,
                })
            }
            "Fn::Select" => {
                let [index, list] = fixed_args(args, "Fn::Select", "[index, list]")?;
                Ok(Intrinsic::Select {
                    index: Expr::from_json(index)?,
                    list: Expr::from_json(list)?,
                })
            }
            "Fn::Split" => {
                let [delimiter, source] = fixed_args(args, "Fn::Split", "[delimiter, source]")?;
                Ok(Intrinsic::Split {
                    delimiter: string_arg(delimiter, "Fn::Split", "a string delimiter")?,
                    source: Expr::from_json(source)?,
                })
            }
            "Fn::Sub" => parse_sub(args),
            "Fn::If" => {
                let [condition, when_true, when_false] =
                    fixed_args(args, "Fn::If", "[condition, valueIfTrue, valueIfFalse]")?;
                Ok(Intrinsic::If {
                    condition: string_arg(condition, "Fn::If", "a condition name")?,
                    when_true: Expr::from_json(when_true)?,
                    when_false: Expr::from_json(when_false)?,
                })
            }
            "Fn::Equals" => {
                let [left, right] = fixed_args(args, "Fn::Equals", "[value1, value2]")?;
                Ok(Intrinsic::Equals(
                    Expr::from_json(left)?,
                    Expr::from_json(right)?,
                ))
            }
            "Fn::And" => Ok(Intrinsic::And(condition_list(
                args,
                "Fn::And",
                "between 2 and 10 conditions",
            )?)),
            "Fn::Or" => Ok(Intrinsic::Or(condition_list(
                args,
                "Fn::Or",
                "between 2 and 10 conditions",
            )?)),
            "Fn::Not" => {
                let [condition] = fixed_args(args, "Fn::Not", "[condition]")?;
                Ok(Intrinsic::Not(Expr::from_json(condition)?))
            }
            other if other.starts_with("Fn::") => {
                Err(IntrinsicError::UnknownFunction(other.to_string()))
            }
            _ => Err(IntrinsicError::NotAnIntrinsic),
        }
    }

    /// Canonical JSON form of this call
    pub fn to_json(&self) -> Json {
        let args = match self {
            Intrinsic::Ref(name) | Intrinsic::Condition(name) => Json::String(name.clone()),
            Intrinsic::GetAtt {
                logical_name,
                attribute,
            } => Json::Array(vec![
                Json::String(logical_name.clone()),
                Json::String(attribute.clone()),
            ]),
            Intrinsic::Base64(expr)
            | Intrinsic::GetAzs(expr)
            | Intrinsic::ImportValue(expr) => expr.to_json(),
            Intrinsic::Cidr {
                ip_block,
                count,
                cidr_bits,
            } => Json::Array(vec![ip_block.to_json(), count.to_json(), cidr_bits.to_json()]),
            Intrinsic::FindInMap {
                map_name,
                top_level_key,
                second_level_key,
            } => Json::Array(vec![
                map_name.to_json(),
                top_level_key.to_json(),
                second_level_key.to_json(),
            ]),
            Intrinsic::Join { delimiter, values } => {
                Json::Array(vec![Json::String(delimiter.clone()), values.to_json()])
            }
            Intrinsic::Select { index, list } => Json::Array(vec![index.to_json(), list.to_json()]),
            Intrinsic::Split { delimiter, source } => {
                Json::Array(vec![Json::String(delimiter.clone()), source.to_json()])
            }
            Intrinsic::Sub {
                template,
                variables,
            } => {
                if variables.is_empty() {
                    Json::String(template.clone())
                } else {
                    let vars: Map<String, Json> = variables
                        .iter()
                        .map(|(k, v)| (k.clone(), v.to_json()))
                        .collect();
                    Json::Array(vec![Json::String(template.clone()), Json::Object(vars)])
                }
            }
            Intrinsic::If {
                condition,
                when_true,
                when_false,
            } => Json::Array(vec![
                Json::String(condition.clone()),
                when_true.to_json(),
                when_false.to_json(),
            ]),
            Intrinsic::Equals(left, right) => Json::Array(vec![left.to_json(), right.to_json()]),
            Intrinsic::And(items) | Intrinsic::Or(items) => {
                Json::Array(items.iter().map(Expr::to_json).collect())
            }
            Intrinsic::Not(condition) => Json::Array(vec![condition.to_json()]),
        };

        let mut map = Map::new();
        map.insert(self.function_name().to_string(), args);
        Json::Object(map)
    }

    /// Logical names referenced through `Ref`, `Fn::GetAtt` and `Fn::Sub`
    /// placeholders, excluding pseudo parameters
    pub fn references(&self) -> BTreeSet<String> {
        self.split_references().names()
    }

    /// Like [`Intrinsic::references`], keeping `Ref` and attribute targets apart
    pub fn split_references(&self) -> References {
        let mut out = References::default();
        self.collect_references(&mut out);
        out
    }

    fn collect_references(&self, out: &mut References) {
        match self {
            Intrinsic::Ref(name) => {
                if !pseudo::is_pseudo_parameter(name) {
                    out.refs.insert(name.clone());
                }
            }
            Intrinsic::GetAtt { logical_name, .. } => {
                out.attributes.insert(logical_name.clone());
            }
            Intrinsic::Sub {
                template,
                variables,
            } => {
                for (name, has_attribute) in sub_placeholders(template) {
                    if variables.contains_key(name) || pseudo::is_pseudo_parameter(name) {
                        continue;
                    }
                    if has_attribute {
                        out.attributes.insert(name.to_string());
                    } else {
                        out.refs.insert(name.to_string());
                    }
                }
                variables.values().for_each(|v| v.collect_references(out));
            }
            Intrinsic::Condition(_) => {}
            Intrinsic::Base64(expr)
            | Intrinsic::GetAzs(expr)
            | Intrinsic::ImportValue(expr)
            | Intrinsic::Not(expr) => expr.collect_references(out),
            Intrinsic::Cidr {
                ip_block,
                count,
                cidr_bits,
            } => {
                for expr in [ip_block, count, cidr_bits] {
                    expr.collect_references(out);
                }
            }
            Intrinsic::FindInMap {
                map_name,
                top_level_key,
                second_level_key,
            } => {
                for expr in [map_name, top_level_key, second_level_key] {
                    expr.collect_references(out);
                }
            }
            Intrinsic::Join { values, .. } => values.collect_references(out),
            Intrinsic::Select { index, list } => {
                index.collect_references(out);
                list.collect_references(out);
            }
            Intrinsic::Split { source, .. } => source.collect_references(out),
            Intrinsic::If {
                when_true,
                when_false,
                ..
            } => {
                when_true.collect_references(out);
                when_false.collect_references(out);
            }
            Intrinsic::Equals(left, right) => {
                left.collect_references(out);
                right.collect_references(out);
            }
            Intrinsic::And(items) | Intrinsic::Or(items) => {
                items.iter().for_each(|item| item.collect_references(out));
            }
        }
    }
}

fn parse_get_att(args: Json) -> Result<Intrinsic, IntrinsicError> {
    const EXPECTED: &str = "[LogicalName, Attribute] or \"LogicalName.Attribute\"";
    match args {
        // Attribute names may themselves contain dots (e.g., "Endpoint.Address")
        Json::String(s) => match s.split_once('.') {
            Some((logical_name, attribute)) if !logical_name.is_empty() && !attribute.is_empty() => {
                Ok(Intrinsic::get_att(logical_name, attribute))
            }
            _ => Err(invalid("Fn::GetAtt", EXPECTED)),
        },
        other => {
            let [logical_name, attribute] = fixed_args(other, "Fn::GetAtt", EXPECTED)?;
            Ok(Intrinsic::GetAtt {
                logical_name: string_arg(logical_name, "Fn::GetAtt", EXPECTED)?,
                attribute: string_arg(attribute, "Fn::GetAtt", EXPECTED)?,
            })
        }
    }
}

fn parse_sub(args: Json) -> Result<Intrinsic, IntrinsicError> {
    const EXPECTED: &str = "a template string or [template, {variables}]";
    match args {
        Json::String(template) => Ok(Intrinsic::sub(template)),
        other => {
            let [template, variables] = fixed_args(other, "Fn::Sub", EXPECTED)?;
            let Json::Object(variables) = variables else {
                return Err(invalid("Fn::Sub", EXPECTED));
            };
            let variables = variables
                .into_iter()
                .map(|(k, v)| Expr::from_json(v).map(|e| (k, e)))
                .collect::<Result<BTreeMap<_, _>, _>>()?;
            Ok(Intrinsic::Sub {
                template: string_arg(template, "Fn::Sub", EXPECTED)?,
                variables,
            })
        }
    }
}

/// Names referenced by `${Name}` / `${Name.Attribute}` placeholders, each
/// with whether an attribute follows. `${!Literal}` escapes are skipped.
fn sub_placeholders(template: &str) -> Vec<(&str, bool)> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            break;
        };
        let inner = &after[..end];
        if !inner.starts_with('!') {
            let (name, has_attribute) = match inner.split_once('.') {
                Some((name, _)) => (name.trim(), true),
                None => (inner.trim(), false),
            };
            if !name.is_empty() {
                names.push((name, has_attribute));
            }
        }
        rest = &after[end + 1..];
    }
    names
}

/// Logical names referenced by a value, split by how they are referenced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct References {
    /// `Ref` targets and `${Name}` placeholders: resources or parameters
    pub refs: BTreeSet<String>,
    /// `Fn::GetAtt` targets and `${Name.Attribute}` placeholders: resources only
    pub attributes: BTreeSet<String>,
}

impl References {
    /// Every referenced name, however it is referenced
    pub fn names(&self) -> BTreeSet<String> {
        self.refs.union(&self.attributes).cloned().collect()
    }
}

/// Collect the logical names referenced anywhere inside a JSON value
pub fn collect_json_references(value: &Json, out: &mut References) {
    if Intrinsic::is_intrinsic(value) {
        // Malformed calls are reported by validation, not here
        if let Ok(intrinsic) = Intrinsic::from_json(value.clone()) {
            intrinsic.collect_references(out);
        }
        return;
    }
    match value {
        Json::Array(items) => items.iter().for_each(|item| collect_json_references(item, out)),
        Json::Object(map) => map.values().for_each(|v| collect_json_references(v, out)),
        _ => {}
    }
}

impl TryFrom<Json> for Intrinsic {
    type Error = IntrinsicError;

    fn try_from(value: Json) -> Result<Self, Self::Error> {
        Intrinsic::from_json(value)
    }
}

impl From<&Intrinsic> for Json {
    fn from(intrinsic: &Intrinsic) -> Self {
        intrinsic.to_json()
    }
}

impl fmt::Display for Intrinsic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl Serialize for Intrinsic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Intrinsic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Json::deserialize(deserializer)?;
        Intrinsic::from_json(value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_ref() {
        let intrinsic = Intrinsic::from_json(json!({"Ref": "MyKey"})).unwrap();
        assert_eq!(intrinsic, Intrinsic::reference("MyKey"));
        assert_eq!(intrinsic.to_json(), json!({"Ref": "MyKey"}));
    }

    #[test]
    fn parse_get_att_both_forms() {
        let array = Intrinsic::from_json(json!({"Fn::GetAtt": ["MyKey", "Arn"]})).unwrap();
        let dotted = Intrinsic::from_json(json!({"Fn::GetAtt": "MyKey.Arn"})).unwrap();
        assert_eq!(array, dotted);
        assert_eq!(dotted.to_json(), json!({"Fn::GetAtt": ["MyKey", "Arn"]}));
    }

    #[test]
    fn get_att_attribute_keeps_nested_dots() {
        let intrinsic = Intrinsic::from_json(json!({"Fn::GetAtt": "Db.Endpoint.Address"})).unwrap();
        assert_eq!(intrinsic, Intrinsic::get_att("Db", "Endpoint.Address"));
    }

    #[test]
    fn sub_without_variables_serializes_as_string() {
        let intrinsic = Intrinsic::sub("arn:${AWS::Partition}:s3:::${Bucket}/*");
        assert_eq!(
            intrinsic.to_json(),
            json!({"Fn::Sub": "arn:${AWS::Partition}:s3:::${Bucket}/*"})
        );
    }

    #[test]
    fn sub_with_variables_round_trips() {
        let value = json!({"Fn::Sub": ["${Prefix}-${Name}", {"Name": {"Ref": "NameParam"}}]});
        let intrinsic = Intrinsic::from_json(value.clone()).unwrap();
        assert_eq!(intrinsic.to_json(), value);
    }

    #[test]
    fn nested_intrinsics_in_join() {
        let value = json!({"Fn::Join": [",", [{"Ref": "A"}, "literal", {"Fn::GetAtt": ["B", "Arn"]}]]});
        let intrinsic = Intrinsic::from_json(value.clone()).unwrap();
        assert_eq!(intrinsic.to_json(), value);
        let refs: Vec<String> = intrinsic.references().into_iter().collect();
        assert_eq!(refs, vec!["A", "B"]);
    }

    #[test]
    fn join_helper_builds_list() {
        let intrinsic = Intrinsic::join("-", [Expr::from("a"), Intrinsic::reference("B").into()]);
        assert_eq!(
            intrinsic.to_json(),
            json!({"Fn::Join": ["-", ["a", {"Ref": "B"}]]})
        );
    }

    #[test]
    fn unknown_function_is_rejected() {
        let err = Intrinsic::from_json(json!({"Fn::Frobnicate": "x"})).unwrap_err();
        assert_eq!(err, IntrinsicError::UnknownFunction("Fn::Frobnicate".to_string()));
    }

    #[test]
    fn multi_key_object_is_not_an_intrinsic() {
        let value = json!({"Ref": "A", "Extra": 1});
        assert!(!Intrinsic::is_intrinsic(&value));
        assert_eq!(
            Intrinsic::from_json(value).unwrap_err(),
            IntrinsicError::NotAnIntrinsic
        );
    }

    #[test]
    fn malformed_arguments_are_rejected() {
        assert!(Intrinsic::from_json(json!({"Ref": 42})).is_err());
        assert!(Intrinsic::from_json(json!({"Fn::Select": [0]})).is_err());
        assert!(Intrinsic::from_json(json!({"Fn::GetAtt": "NoDot"})).is_err());
        assert!(Intrinsic::from_json(json!({"Fn::And": [{"Condition": "A"}]})).is_err());
        assert!(Intrinsic::from_json(json!({"Fn::Join": [1, []]})).is_err());
    }

    #[test]
    fn references_skip_pseudo_parameters_and_sub_escapes() {
        let intrinsic = Intrinsic::from_json(json!({
            "Fn::Sub": ["${AWS::Region}-${Bucket.Arn}-${!Literal}-${Local}", {"Local": {"Ref": "Param"}}]
        }))
        .unwrap();
        let refs: Vec<String> = intrinsic.references().into_iter().collect();
        assert_eq!(refs, vec!["Bucket", "Param"]);
    }

    #[test]
    fn condition_functions_round_trip() {
        let value = json!({"Fn::If": ["IsProd", {"Fn::Not": [{"Condition": "IsDev"}]}, {"Ref": "AWS::NoValue"}]});
        let intrinsic = Intrinsic::from_json(value.clone()).unwrap();
        assert_eq!(intrinsic.to_json(), value);
        assert!(intrinsic.references().is_empty());
    }

    #[test]
    fn collect_references_walks_plain_json() {
        let value = json!({"Outer": [{"Inner": {"Ref": "Role"}}, {"Fn::GetAtt": ["Key", "Arn"]}]});
        let mut out = References::default();
        collect_json_references(&value, &mut out);
        assert_eq!(out.names().into_iter().collect::<Vec<_>>(), vec!["Key", "Role"]);
    }

    #[test]
    fn ref_and_attribute_targets_are_kept_apart() {
        let intrinsic = Intrinsic::from_json(json!({
            "Fn::Join": ["", [
                {"Ref": "Env"},
                {"Fn::GetAtt": ["Key", "Arn"]},
                {"Fn::Sub": "${Prefix}-${Bucket.Arn}"},
                {"Fn::GetAtt": "Env.Value"}
            ]]
        }))
        .unwrap();
        let references = intrinsic.split_references();
        assert_eq!(references.refs.iter().collect::<Vec<_>>(), vec!["Env", "Prefix"]);
        assert_eq!(
            references.attributes.iter().collect::<Vec<_>>(),
            vec!["Bucket", "Env", "Key"]
        );
        assert_eq!(intrinsic.references().len(), 4);
    }

    #[test]
    fn serde_round_trip() {
        let intrinsic: Intrinsic = serde_json::from_str(r#"{"Fn::ImportValue": "SharedVpcId"}"#).unwrap();
        assert_eq!(intrinsic, Intrinsic::import_value("SharedVpcId"));
        assert_eq!(
            serde_json::to_string(&intrinsic).unwrap(),
            r#"{"Fn::ImportValue":"SharedVpcId"}"#
        );
    }

    #[test]
    fn pseudo_parameters() {
        assert!(pseudo::is_pseudo_parameter(pseudo::REGION));
        assert!(pseudo::is_pseudo_parameter("AWS::NoValue"));
        assert!(!pseudo::is_pseudo_parameter("MyParameter"));
    }
}

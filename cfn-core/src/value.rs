//! Value - Property values that are either literals or intrinsic calls
//!
//! Every scalar property of a resource accepts a literal of its own type or
//! an intrinsic function computed at deploy time. `Value<T>` captures that
//! union and serializes without a tag, exactly as it appears in a template.

use std::fmt;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as Json;
use thiserror::Error;

use crate::intrinsic::Intrinsic;

/// A literal `T` or an intrinsic function call
#[derive(Debug, Clone, PartialEq)]
pub enum Value<T> {
    Literal(T),
    Intrinsic(Intrinsic),
}

impl<T> Value<T> {
    pub fn literal(value: impl Into<T>) -> Self {
        Value::Literal(value.into())
    }

    pub fn as_literal(&self) -> Option<&T> {
        match self {
            Value::Literal(value) => Some(value),
            Value::Intrinsic(_) => None,
        }
    }

    pub fn as_intrinsic(&self) -> Option<&Intrinsic> {
        match self {
            Value::Literal(_) => None,
            Value::Intrinsic(intrinsic) => Some(intrinsic),
        }
    }

    pub fn is_intrinsic(&self) -> bool {
        matches!(self, Value::Intrinsic(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Value<U> {
        match self {
            Value::Literal(value) => Value::Literal(f(value)),
            Value::Intrinsic(intrinsic) => Value::Intrinsic(intrinsic),
        }
    }
}

impl<T> From<Intrinsic> for Value<T> {
    fn from(intrinsic: Intrinsic) -> Self {
        Value::Intrinsic(intrinsic)
    }
}

impl From<&str> for Value<String> {
    fn from(s: &str) -> Self {
        Value::Literal(s.to_string())
    }
}

impl From<String> for Value<String> {
    fn from(s: String) -> Self {
        Value::Literal(s)
    }
}

impl From<bool> for Value<bool> {
    fn from(b: bool) -> Self {
        Value::Literal(b)
    }
}

impl From<i64> for Value<i64> {
    fn from(n: i64) -> Self {
        Value::Literal(n)
    }
}

impl From<f64> for Value<f64> {
    fn from(n: f64) -> Self {
        Value::Literal(n)
    }
}

impl<T: fmt::Display> fmt::Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Literal(value) => write!(f, "{}", value),
            Value::Intrinsic(intrinsic) => write!(f, "{}", intrinsic),
        }
    }
}

impl<T: Serialize> Serialize for Value<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Literal(value) => value.serialize(serializer),
            Value::Intrinsic(intrinsic) => intrinsic.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Value<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Buffer first so the error reported is the one of the branch taken,
        // not serde's generic "did not match any variant".
        let json = Json::deserialize(deserializer)?;
        if Intrinsic::is_intrinsic(&json) {
            return Intrinsic::from_json(json)
                .map(Value::Intrinsic)
                .map_err(D::Error::custom);
        }
        serde_json::from_value::<T>(json)
            .map(Value::Literal)
            .map_err(D::Error::custom)
    }
}

/// A string outside the allowed values of an enumerated property
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {type_name} '{value}', expected one of: {}", expected.join(", "))]
pub struct UnknownVariant {
    pub type_name: &'static str,
    pub value: String,
    pub expected: &'static [&'static str],
}

/// Declare a string enumeration of allowed property values.
///
/// Each variant maps to the exact string CloudFormation expects. The
/// generated type carries `VALUES`, `as_str`, `Display`, `FromStr` and
/// serde impls that reject strings outside the list.
#[macro_export]
macro_rules! cfn_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every allowed value, in declaration order
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::value::UnknownVariant;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($value => Ok(Self::$variant),)+
                    _ => Err($crate::value::UnknownVariant {
                        type_name: stringify!($name),
                        value: s.to_string(),
                        expected: Self::VALUES,
                    }),
                }
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S: $crate::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<D: $crate::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                let s = <::std::string::String as $crate::serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(<D::Error as $crate::serde::de::Error>::custom)
            }
        }

        impl ::std::convert::From<$name> for $crate::value::Value<$name> {
            fn from(value: $name) -> Self {
                $crate::value::Value::Literal(value)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    crate::cfn_enum! {
        /// Test enumeration
        Color {
            Red => "RED",
            LightBlue => "light-blue",
        }
    }

    #[test]
    fn literal_string_round_trip() {
        let value: Value<String> = serde_json::from_value(json!("alias/my-key")).unwrap();
        assert_eq!(value, Value::from("alias/my-key"));
        assert_eq!(serde_json::to_value(&value).unwrap(), json!("alias/my-key"));
    }

    #[test]
    fn intrinsic_value_round_trip() {
        let value: Value<String> = serde_json::from_value(json!({"Ref": "KeyId"})).unwrap();
        assert_eq!(value, Value::Intrinsic(Intrinsic::reference("KeyId")));
        assert_eq!(serde_json::to_value(&value).unwrap(), json!({"Ref": "KeyId"}));
    }

    #[test]
    fn intrinsic_error_surfaces() {
        let err = serde_json::from_value::<Value<String>>(json!({"Fn::Bogus": 1})).unwrap_err();
        assert!(err.to_string().contains("Fn::Bogus"), "{}", err);
    }

    #[test]
    fn literal_type_mismatch_is_rejected() {
        assert!(serde_json::from_value::<Value<i64>>(json!("seven")).is_err());
        assert!(serde_json::from_value::<Value<bool>>(json!(1)).is_err());
        // A non-intrinsic object is not a string
        assert!(serde_json::from_value::<Value<String>>(json!({"Key": "v"})).is_err());
    }

    #[test]
    fn integer_is_accepted_as_number() {
        let value: Value<f64> = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(value.as_literal(), Some(&7.0));
    }

    #[test]
    fn map_keeps_intrinsics() {
        let value: Value<i64> = Intrinsic::reference("Count").into();
        let mapped = value.map(|n| n * 2);
        assert!(mapped.is_intrinsic());
        assert_eq!(Value::<i64>::literal(21).map(|n| n * 2), Value::Literal(42));
    }

    #[test]
    fn enum_values_and_parsing() {
        assert_eq!(Color::VALUES, &["RED", "light-blue"]);
        assert_eq!("light-blue".parse::<Color>().unwrap(), Color::LightBlue);
        assert_eq!(Color::Red.to_string(), "RED");

        let err = "GREEN".parse::<Color>().unwrap_err();
        assert_eq!(err.type_name, "Color");
        assert_eq!(
            err.to_string(),
            "Invalid Color 'GREEN', expected one of: RED, light-blue"
        );
    }

    #[test]
    fn enum_serde() {
        let value: Value<Color> = serde_json::from_value(json!("RED")).unwrap();
        assert_eq!(value, Value::from(Color::Red));
        assert!(serde_json::from_value::<Value<Color>>(json!("red")).is_err());
        assert_eq!(serde_json::to_value(Color::LightBlue).unwrap(), json!("light-blue"));
    }
}

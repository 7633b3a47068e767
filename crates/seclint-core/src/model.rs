use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One entry of a `security` list: scheme name -> required scopes.
///
/// Entries that are not a mapping still occupy a slot in the list (they count
/// towards "has security") but carry no schemes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SecurityRequirement(pub BTreeMap<String, Vec<String>>);

impl SecurityRequirement {
    pub fn from_value(v: &Value) -> Self {
        let Some(map) = v.as_object() else {
            return Self::default();
        };
        let schemes = map
            .iter()
            .map(|(name, scopes)| {
                let scopes = scopes
                    .as_array()
                    .map(|a| a.iter().filter_map(Value::as_str).map(str::to_owned).collect())
                    .unwrap_or_default();
                (name.clone(), scopes)
            })
            .collect();
        Self(schemes)
    }
}

impl<'de> Deserialize<'de> for SecurityRequirement {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let v = Value::deserialize(d)?;
        Ok(Self::from_value(&v))
    }
}

/// Reads a raw `security` field. Anything other than a sequence is treated as absent.
pub fn security_from_value(v: Option<&Value>) -> Option<Vec<SecurityRequirement>> {
    v.and_then(Value::as_array)
        .map(|entries| entries.iter().map(SecurityRequirement::from_value).collect())
}

/// True when a `security` field is present and lists at least one requirement.
pub fn has_security(security: Option<&[SecurityRequirement]>) -> bool {
    security.is_some_and(|s| !s.is_empty())
}

fn lenient_security<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<SecurityRequirement>>, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(security_from_value(v.as_ref()))
}

fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(v.as_ref().and_then(Value::as_str).map(str::to_owned))
}

/// A single endpoint+method object from `paths`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(
        rename = "operationId",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub operation_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_security", skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,
}

impl Operation {
    pub fn from_value(v: &Value) -> Self {
        Self {
            operation_id: v.get("operationId").and_then(Value::as_str).map(str::to_owned),
            security: security_from_value(v.get("security")),
        }
    }

    pub fn has_security(&self) -> bool {
        has_security(self.security.as_deref())
    }
}

/// The document root, reduced to what rules read from it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub openapi: Option<String>,
    #[serde(default, deserialize_with = "lenient_security", skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,
}

impl Document {
    pub fn from_value(root: &Value) -> Self {
        Self {
            openapi: root.get("openapi").and_then(Value::as_str).map(str::to_owned),
            security: security_from_value(root.get("security")),
        }
    }

    pub fn has_security(&self) -> bool {
        has_security(self.security.as_deref())
    }
}

use serde::{Deserialize, Deserializer, Serialize};

pub const PLACEHOLDER_COLLEGE_NAME: &str = "College Service Unavailable";
pub const PLACEHOLDER_COLLEGE_ADDRESS: &str = "Service not running";
pub const PLACEHOLDER_UNIVERSITY: &str = "Unknown";

/// A student record as exchanged over the wire.
///
/// `id` is assigned by the store on first save. Every other field is free
/// text; `age` in particular is kept exactly as the caller sent it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub name: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub address: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub age: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub college_id: String,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        age: impl Into<String>,
        college_id: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            address: address.into(),
            age: age.into(),
            college_id: college_id.into(),
        }
    }
}

/// College details mastered by the remote college service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct College {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub college_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
}

impl College {
    /// Sentinel college used when the college service cannot answer.
    ///
    /// The id is `college_id` parsed as an `i64`, or `0` when it is not numeric.
    pub fn placeholder(college_id: &str) -> Self {
        Self {
            id: Some(college_id.parse::<i64>().unwrap_or(0)),
            college_name: Some(PLACEHOLDER_COLLEGE_NAME.to_string()),
            address: Some(PLACEHOLDER_COLLEGE_ADDRESS.to_string()),
            university: Some(PLACEHOLDER_UNIVERSITY.to_string()),
        }
    }

    #[cfg(test)]
    pub(crate) fn is_placeholder(&self) -> bool {
        self.college_name.as_deref() == Some(PLACEHOLDER_COLLEGE_NAME)
            && self.address.as_deref() == Some(PLACEHOLDER_COLLEGE_ADDRESS)
            && self.university.as_deref() == Some(PLACEHOLDER_UNIVERSITY)
    }
}

/// A student paired with its college. Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentWithCollege {
    pub student: Student,
    pub college: College,
}

// Accepts strings, numbers, booleans and null so that `"age": 21` and
// `"age": "21"` are stored the same way.
fn loose_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a scalar value, found {}",
            other
        ))),
    }
}

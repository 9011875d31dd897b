use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// GraphQL `ID` scalar.
///
/// The wire format is always a string, but some servers emit numeric ids,
/// so deserialization accepts both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Id {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidId(s.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<&str> for Id {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<u64> for Id {
    fn from(raw: u64) -> Self {
        Self(raw.to_string())
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Id(s),
            RawId::Number(n) => Id(n.to_string()),
        })
    }
}

pub type PostId = Id;
pub type UserId = Id;

/// Author reference attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Nullable GraphQL `String`; `null` and a missing key both read as empty.
fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Server-shaped post record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub body: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// Title/body pair sent as the `input` of create and update mutations.
///
/// Also serves as the modal's draft while it is being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostInput {
    pub title: String,
    pub body: String,
}

impl PostInput {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

impl From<&Post> for PostInput {
    fn from(post: &Post) -> Self {
        Self::new(post.title.clone(), post.body.clone())
    }
}

pub type Draft = PostInput;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_accepts_string_and_number() {
        let from_text: Id = serde_json::from_str("\"42\"").unwrap();
        let from_number: Id = serde_json::from_str("42").unwrap();
        assert_eq!(from_text, from_number);
        assert_eq!(serde_json::to_string(&from_number).unwrap(), "\"42\"");
    }

    #[test]
    fn test_id_rejects_blank() {
        assert!("  ".parse::<Id>().is_err());
        assert_eq!(" 7 ".parse::<Id>().unwrap(), Id::from(7));
    }

    #[test]
    fn test_post_without_user() {
        let post: Post =
            serde_json::from_str(r#"{"id":"101","title":"T","body":"B","user":null}"#).unwrap();
        assert_eq!(post.id.as_str(), "101");
        assert!(post.user.is_none());
    }

    #[test]
    fn test_post_null_text_fields_read_as_empty() {
        let post: Post =
            serde_json::from_str(r#"{"id":"1","title":null,"body":"b","user":null}"#).unwrap();
        assert_eq!(post.title, "");
        assert_eq!(post.body, "b");

        let post: Post = serde_json::from_str(r#"{"id":"2","body":null}"#).unwrap();
        assert_eq!(post.title, "");
        assert_eq!(post.body, "");
    }

    #[test]
    fn test_input_serializes_only_title_and_body() {
        let input = PostInput::new("T", "B");
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, serde_json::json!({"title": "T", "body": "B"}));
    }
}

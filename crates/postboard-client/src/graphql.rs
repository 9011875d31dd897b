//! GraphQL-over-HTTP envelope.
//!
//! Requests are `{"query", "operationName", "variables"}`; responses are
//! `{"data", "errors"}`. Errors win over data: a response with a non-empty
//! `errors` array is a failure even if partial data came back.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::operations::Operation;
use crate::{Error, Result};

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V: Serialize> {
    pub query: &'static str,
    #[serde(rename = "operationName")]
    pub operation_name: &'static str,
    pub variables: &'a V,
}

impl<'a, V: Serialize> GraphQlRequest<'a, V> {
    pub fn for_operation<O>(variables: &'a V) -> Self
    where
        O: Operation<Variables = V>,
    {
        Self {
            query: O::DOCUMENT,
            operation_name: O::NAME,
            variables,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl GraphQlError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
            extensions: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<D> {
    pub data: Option<D>,
    pub errors: Option<Vec<GraphQlError>>,
}

impl<D> GraphQlResponse<D> {
    pub fn into_result(self, operation: &'static str) -> Result<D> {
        if let Some(errors) = self.errors
            && !errors.is_empty()
        {
            return Err(Error::GraphQl(errors));
        }
        self.data.ok_or(Error::MissingData(operation))
    }
}

/// Decode a raw response body for operation `O`.
pub fn decode<O: Operation>(body: &[u8]) -> Result<O::Data> {
    let response: GraphQlResponse<O::Data> = serde_json::from_slice(body)?;
    response.into_result(O::NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{DeletePost, Posts};

    #[test]
    fn test_errors_take_precedence_over_data() {
        let body = br#"{"data":{"deletePost":true},"errors":[{"message":"nope"}]}"#;
        let err = decode::<DeletePost>(body).unwrap_err();
        assert_eq!(err.to_string(), "nope");
    }

    #[test]
    fn test_empty_errors_array_is_success() {
        let body = br#"{"data":{"deletePost":true},"errors":[]}"#;
        let data = decode::<DeletePost>(body).unwrap();
        assert_eq!(data.delete_post, Some(true));
    }

    #[test]
    fn test_missing_data() {
        let err = decode::<Posts>(br#"{}"#).unwrap_err();
        assert!(matches!(err, Error::MissingData("Posts")));
    }

    #[test]
    fn test_request_shape() {
        let vars = serde_json::json!({"id": "5"});
        let request = GraphQlRequest {
            query: "mutation DeletePost($id: ID!) { deletePost(id: $id) }",
            operation_name: "DeletePost",
            variables: &vars,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["operationName"], "DeletePost");
        assert_eq!(json["variables"]["id"], "5");
    }
}

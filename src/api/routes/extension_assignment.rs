//! The set of assignments shown by the browser extension for a given user.

use std::{collections::HashMap, sync::LazyLock};

use axum::{extract::Query, Json};
use axum_macros::debug_handler;
use serde::Serialize;

use crate::api::validation::Identity;

/// The assignments of each known identity, keyed by lowercase identity.
///
/// This stands in for a real assignment store, which doesn't exist yet.
const ASSIGNMENTS: &[(&str, &[&str])] = &[
    ("iainmac32", &["Assignment 1!", "Assignment 2!!"]),
    ("test", &["test1assignment"]),
];

/// The assignments of an identity missing from [`ASSIGNMENTS`].
const DEFAULT_ASSIGNMENTS: &[&str] = &["test1assignment"];

/// [`ASSIGNMENTS`] indexed by identity.
static ASSIGNMENTS_BY_IDENTITY: LazyLock<HashMap<&str, &[&str]>> =
    LazyLock::new(|| ASSIGNMENTS.iter().copied().collect());

/// The name of the query parameter identifying the user.
const IDENTITY_PARAM: &str = "identity";

/// Lists the assignments of the identity in the `identity` query parameter.
///
/// If the parameter is absent or empty, no assignments are listed. If it's repeated, the first
/// occurrence is used. Other parameters are ignored.
#[expect(clippy::unused_async, reason = "Axum route handlers must be async.")]
#[debug_handler]
pub(in crate::api) async fn get(Query(params): Query<Vec<(String, String)>>) -> Json<GetResponse> {
    let identity = params
        .iter()
        .find(|(name, _)| name == IDENTITY_PARAM)
        .and_then(|(_, value)| Identity::normalize(value));

    let Some(identity) = identity else {
        tracing::debug!("no identity given");

        return Json(GetResponse {
            identity: None,
            assignments: &[],
        });
    };

    let assignments = assignments_of(&identity);

    tracing::debug!(%identity, count = assignments.len(), "listed assignments");

    Json(GetResponse {
        identity: Some(identity),
        assignments,
    })
}

/// Looks up an identity's assignments, falling back to [`DEFAULT_ASSIGNMENTS`] for unknown
/// identities.
fn assignments_of(identity: &Identity) -> &'static [&'static str] {
    ASSIGNMENTS_BY_IDENTITY
        .get(identity.as_str())
        .copied()
        .unwrap_or(DEFAULT_ASSIGNMENTS)
}

/// A `GET` response body for this API route.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub(in crate::api) struct GetResponse {
    /// The lowercased identity, or `None` if no identity was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(in crate::api) identity: Option<Identity>,

    /// The identity's assignment labels, in display order.
    pub(in crate::api) assignments: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::{json, Value};

    use super::super::tests::{send, send_json};

    /// Gets the JSON response for `/extensionAssignment` with the specified query string, asserting
    /// the request succeeded.
    async fn lookup(query: &str) -> anyhow::Result<Value> {
        let (status, body) = send_json(Method::GET, &format!("/extensionAssignment{query}")).await?;

        assert_eq!(status, StatusCode::OK, "lookups should always succeed");

        Ok(body)
    }

    #[tokio::test]
    async fn missing_identity() -> anyhow::Result<()> {
        for query in ["", "?", "?identity=", "?other=test", "?identity=&identity=test"] {
            assert_eq!(
                lookup(query).await?,
                json!({ "assignments": [] }),
                "query {query:?} should list no assignments"
            );
        }

        Ok(())
    }

    #[tokio::test]
    async fn known_identity_is_case_insensitive() -> anyhow::Result<()> {
        for identity in ["iainmac32", "IainMac32", "IAINMAC32"] {
            assert_eq!(
                lookup(&format!("?identity={identity}")).await?,
                json!({
                    "identity": "iainmac32",
                    "assignments": ["Assignment 1!", "Assignment 2!!"],
                }),
                "identity {identity:?} should match `iainmac32`"
            );
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_identity() -> anyhow::Result<()> {
        assert_eq!(
            lookup("?identity=test").await?,
            json!({ "identity": "test", "assignments": ["test1assignment"] }),
            "unexpected assignments for `test`"
        );

        Ok(())
    }

    #[tokio::test]
    async fn unknown_identity_gets_default() -> anyhow::Result<()> {
        assert_eq!(
            lookup("?identity=unknown_user").await?,
            json!({ "identity": "unknown_user", "assignments": ["test1assignment"] }),
            "unknown identities should get the default assignments"
        );

        Ok(())
    }

    #[tokio::test]
    async fn identity_is_percent_decoded() -> anyhow::Result<()> {
        assert_eq!(
            lookup("?identity=Iain%4Dac32").await?["identity"],
            "iainmac32",
            "percent-encoded identities should be decoded before lookup"
        );

        assert_eq!(
            lookup("?identity=%20").await?,
            json!({ "identity": " ", "assignments": ["test1assignment"] }),
            "whitespace identities should be kept"
        );

        Ok(())
    }

    #[tokio::test]
    async fn first_identity_wins() -> anyhow::Result<()> {
        assert_eq!(
            lookup("?identity=test&identity=iainmac32&extra=1").await?,
            json!({ "identity": "test", "assignments": ["test1assignment"] }),
            "the first `identity` parameter should be used"
        );

        Ok(())
    }

    #[tokio::test]
    async fn repeated_requests_are_identical() -> anyhow::Result<()> {
        let uri = "/extensionAssignment?identity=IainMac32";

        let (_, first) = send(Method::GET, uri).await?;

        for _ in 0..3 {
            let (_, body) = send(Method::GET, uri).await?;

            assert_eq!(body, first, "repeated requests should have byte-identical bodies");
        }

        Ok(())
    }

    #[tokio::test]
    async fn lookups_leave_mapping_unchanged() -> anyhow::Result<()> {
        lookup("?identity=someone_new").await?;
        lookup("?identity=TEST").await?;

        assert_eq!(
            lookup("?identity=iainmac32").await?["assignments"],
            json!(["Assignment 1!", "Assignment 2!!"]),
            "earlier lookups shouldn't affect later ones"
        );
        assert_eq!(
            lookup("?identity=someone_new").await?["assignments"],
            json!(["test1assignment"]),
            "unknown identities shouldn't be remembered"
        );

        Ok(())
    }
}

use crate::server::errors::ApiError;
use crate::server::AppState;
use axum::extract::{Query, State};
use axum::Json;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use url::Url;

/// Query parameters of `GET /top-words`
///
/// Both fields are optional at the type level so that validation can name
/// the missing or invalid field instead of producing a generic rejection.
#[derive(Debug, Deserialize)]
pub struct TopWordsParams {
    #[serde(rename = "urlString")]
    pub url_string: Option<String>,
    pub depth: Option<i64>,
}

/// Ranked word counts serialized as a JSON object in ranked order
///
/// JSON itself does not promise key order, but the serialization order of
/// this map is observable and clients (and tests) rely on it matching the
/// ranking.
#[derive(Debug, PartialEq)]
pub struct TopWordsResponse(pub Vec<(String, u64)>);

impl Serialize for TopWordsResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (word, count) in &self.0 {
            map.serialize_entry(word, count)?;
        }
        map.end()
    }
}

/// `GET /top-words?urlString=<url>&depth=<n>`
///
/// Validates the parameters, runs the whole bounded crawl synchronously,
/// and responds with the ranked word counts.
pub async fn top_words(
    State(state): State<AppState>,
    Query(params): Query<TopWordsParams>,
) -> Result<Json<TopWordsResponse>, ApiError> {
    let url_string = match params.url_string {
        Some(s) if !s.trim().is_empty() => s,
        _ => return Err(ApiError::validation("urlString must not be blank")),
    };

    if Url::parse(&url_string).is_err() {
        return Err(ApiError::validation("urlString must be a valid URL"));
    }

    let depth = params
        .depth
        .ok_or_else(|| ApiError::validation("depth is required"))?;
    if depth <= 0 {
        return Err(ApiError::validation("depth must be positive"));
    }

    let max_depth = state.config.crawler.max_depth;
    if depth > i64::from(max_depth) {
        return Err(ApiError::validation(format!(
            "depth must not exceed {}",
            max_depth
        )));
    }

    let ranked = state
        .service
        .run(&url_string, depth as u32, state.config.ranking.top_count)
        .await;

    Ok(Json(TopWordsResponse(ranked)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_serializes_in_ranked_order() {
        let response = TopWordsResponse(vec![
            ("b".to_string(), 5),
            ("a".to_string(), 3),
            ("c".to_string(), 1),
        ]);
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"b":5,"a":3,"c":1}"#);
    }

    #[test]
    fn test_empty_response_is_empty_object() {
        let json = serde_json::to_string(&TopWordsResponse(Vec::new())).unwrap();
        assert_eq!(json, "{}");
    }
}

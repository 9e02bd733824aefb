use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use wa_core::{Article, Error, NormalizationRequest};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ArticleQuery {
    pub topic: String,
}

#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::InvalidTopic(_) => StatusCode::BAD_REQUEST,
            Error::Http(_) | Error::Source(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::error!("Request failed with {}: {}", status, self.0);
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

pub async fn generate_article(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ArticleQuery>,
) -> Result<Json<Article>, ApiError> {
    let source = state.source.fetch(&query.topic).await?;
    let request = NormalizationRequest::from_source(query.topic.trim(), &source, state.min_words);
    let content = state.normalizer.normalize(&request).await;

    Ok(Json(Article {
        title: query.topic,
        content,
    }))
}

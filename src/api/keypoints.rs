//! Keypoint lookup API
//!
//! One route: fetch the stored keypoint frames for a word, either the
//! whole sequence or a single frame.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::debug;

use crate::db::{self, KeypointFrame};
use crate::{AppState, Error};

/// Query parameters for keypoint lookup
///
/// A non-integer `frame` value is rejected by the extractor with 400
/// before this handler runs.
#[derive(Debug, Deserialize)]
pub struct KeypointQuery {
    /// Frame number to fetch (omit for the full sequence)
    pub frame: Option<i64>,
}

/// GET /api/keypoints/:word?frame=N
///
/// Returns a JSON array of `{frame_number, keypoints}` records, ordered
/// ascending by frame number. An unknown word returns an empty array
/// with status 200.
pub async fn get_keypoints(
    State(state): State<AppState>,
    Path(word): Path<String>,
    Query(query): Query<KeypointQuery>,
) -> Result<Json<Vec<KeypointFrame>>, Error> {
    debug!(word = %word, frame = ?query.frame, "keypoint lookup");

    let frames = db::fetch_keypoints(&state.database_url, &word, query.frame).await?;

    Ok(Json(frames))
}

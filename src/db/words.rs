//! Queries against the `words` keypoint table
//!
//! At most one record exists per `(word, frame_number)` pair; an
//! unfiltered fetch returns all frames for the word in ascending order.

use serde::Serialize;
use sqlx::any::AnyRow;
use sqlx::{AnyConnection, Connection, Row};
use tracing::warn;

use crate::{Error, Result};

/// One frame of keypoint data for a word
#[derive(Debug, Clone, Serialize)]
pub struct KeypointFrame {
    pub frame_number: i64,
    pub keypoints: serde_json::Value,
}

/// Fetch keypoint frames for a word, optionally filtered to one frame
///
/// Opens its own connection and closes it before returning, on success
/// and failure alike. An unknown word yields an empty sequence, not an
/// error. Any row whose stored keypoints text fails to parse fails the
/// whole fetch.
pub async fn fetch_keypoints(
    database_url: &str,
    word: &str,
    frame: Option<i64>,
) -> Result<Vec<KeypointFrame>> {
    let mut conn = crate::db::connect(database_url).await?;

    let fetched = fetch_rows(&mut conn, word, frame).await;

    if let Err(e) = conn.close().await {
        warn!("error closing storage connection: {}", e);
    }

    fetched?
        .iter()
        .map(parse_row)
        .collect()
}

/// Run the SELECT for a word, with or without the frame filter
async fn fetch_rows(
    conn: &mut AnyConnection,
    word: &str,
    frame: Option<i64>,
) -> sqlx::Result<Vec<AnyRow>> {
    match frame {
        Some(frame_number) => {
            // Zero or one row: frame_number is unique within a word
            sqlx::query(
                "SELECT frame_number, keypoints FROM words \
                 WHERE word = ? AND frame_number = ?",
            )
            .bind(word)
            .bind(frame_number)
            .fetch_all(conn)
            .await
        }
        None => {
            sqlx::query(
                "SELECT frame_number, keypoints FROM words \
                 WHERE word = ? ORDER BY frame_number",
            )
            .bind(word)
            .fetch_all(conn)
            .await
        }
    }
}

/// Convert one storage row into a keypoint frame
fn parse_row(row: &AnyRow) -> Result<KeypointFrame> {
    let frame_number: i64 = row.try_get("frame_number")?;
    let raw: String = row.try_get("keypoints")?;
    parse_keypoints(frame_number, &raw)
}

/// Parse the serialized keypoints column for one frame
fn parse_keypoints(frame_number: i64, raw: &str) -> Result<KeypointFrame> {
    let keypoints = serde_json::from_str(raw).map_err(|source| Error::MalformedData {
        frame: frame_number,
        source,
    })?;

    Ok(KeypointFrame {
        frame_number,
        keypoints,
    })
}

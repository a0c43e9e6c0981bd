//! Storage access layer for wordpose
//!
//! Read-only access to the externally-ingested `words` table. There is
//! deliberately no pool: each request opens one connection and releases
//! it on every exit path.

use std::sync::Once;

use sqlx::{AnyConnection, Connection};

use crate::Result;

pub mod words;

pub use words::{fetch_keypoints, KeypointFrame};

static DRIVERS: Once = Once::new();

/// Open a single connection to the backing store
///
/// The `Any` driver dispatches on the URL scheme, so the same code path
/// serves the production MySQL store and the SQLite files used in tests.
pub async fn connect(database_url: &str) -> Result<AnyConnection> {
    DRIVERS.call_once(sqlx::any::install_default_drivers);

    let conn = AnyConnection::connect(database_url).await?;
    Ok(conn)
}

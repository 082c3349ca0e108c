//! Asynchronous decode service.
//!
//! Decoding is CPU-bound, so it runs on tokio's blocking pool and the caller
//! awaits the handle. Callers must let every pending decode for a slot settle
//! before composing.

use futures::future::join_all;

use crate::{decode_image, Error, ImageHandle, Result};

/// Decode `bytes` off the async executor.
pub async fn decode_image_async(bytes: Vec<u8>) -> Result<ImageHandle> {
    tokio::task::spawn_blocking(move || decode_image(&bytes))
        .await
        .map_err(|e| Error::InvalidImageData(format!("decode task failed: {}", e)))?
}

/// Decode several payloads concurrently. Results keep the input order and
/// fail individually.
pub async fn decode_all(payloads: Vec<Vec<u8>>) -> Vec<Result<ImageHandle>> {
    join_all(payloads.into_iter().map(decode_image_async)).await
}

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::error::ApiError;

/// Run a provider call that the caller may abort
///
/// A token that is already cancelled short-circuits without polling the
/// request. Otherwise the request races the token; when both are ready the
/// cancellation wins, so a cancelled caller never observes a late result.
pub async fn run_cancellable<T, F>(
    cancel: Option<&CancellationToken>,
    request: F,
) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    let Some(token) = cancel else {
        return request.await;
    };

    if token.is_cancelled() {
        return Err(ApiError::Cancelled);
    }

    tokio::select! {
        biased;
        _ = token.cancelled() => Err(ApiError::Cancelled),
        result = request => {
            if token.is_cancelled() {
                Err(ApiError::Cancelled)
            } else {
                result
            }
        }
    }
}

//! Follow-up steps of multi-record workflows.
//!
//! A review mutation followed by a rating recompute, or a request transition
//! followed by a user update, touch independently owned records with no shared
//! transaction. The follow-up step is written to be idempotent and is retried
//! here when it fails on a store error.

use std::{future::Future, time::Duration};

use crate::error::{AppError, AppResult};

pub const STEP_ATTEMPTS: u32 = 3;
const STEP_BACKOFF: Duration = Duration::from_millis(50);

pub async fn retry_step<T, F, Fut>(step: &'static str, mut run: F) -> AppResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    let mut attempt = 1;
    loop {
        match run().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < STEP_ATTEMPTS && is_transient(&err) => {
                tracing::warn!(step, attempt, error = ?err, "saga step failed, retrying");
                tokio::time::sleep(STEP_BACKOFF * attempt).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

fn is_transient(err: &AppError) -> bool {
    matches!(err, AppError::OrmError(_) | AppError::Internal(_))
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicU32, Ordering},
    };

    use sea_orm::DbErr;

    use super::*;

    #[tokio::test]
    async fn store_failures_are_retried_until_success() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let result = retry_step("test", || {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 2 {
                    Err(AppError::OrmError(DbErr::Custom("connection reset".into())))
                } else {
                    Ok(n)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_the_last_attempt() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let result: AppResult<()> = retry_step("test", || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Err(AppError::OrmError(DbErr::Custom("down".into()))) }
        })
        .await;

        assert!(matches!(result, Err(AppError::OrmError(_))));
        assert_eq!(calls.load(Ordering::SeqCst), STEP_ATTEMPTS);
    }

    #[tokio::test]
    async fn input_errors_are_not_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let result: AppResult<()> = retry_step("test", || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Err(AppError::BadRequest("nope".into())) }
        })
        .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}

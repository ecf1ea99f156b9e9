use std::sync::Arc;

use actix_web::{HttpMessage, HttpRequest};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use super::{require_db, txn_policy};
use crate::error::AppError;
use crate::state::app_state::AppState;

/// A transaction that several requests can share. Tests insert it into
/// request extensions so a whole scenario runs in one rolled-back txn.
#[derive(Clone)]
pub struct SharedTxn(pub Arc<DatabaseTransaction>);

impl SharedTxn {
    /// Begin a new shared transaction on the pool.
    pub async fn open(db: &DatabaseConnection) -> Result<Self, AppError> {
        let txn = db.begin().await?;
        Ok(Self(Arc::new(txn)))
    }

    /// Get a reference to the underlying database transaction
    pub fn transaction(&self) -> &DatabaseTransaction {
        &self.0
    }

    /// Attach to a request so `with_txn` picks it up.
    pub fn inject(&self, req: &HttpRequest) {
        req.extensions_mut().insert(self.clone());
    }

    /// Remove from a request. Needed before `rollback` when the request
    /// outlives the scenario (actix pools request heads).
    pub fn detach(req: &HttpRequest) -> Option<Self> {
        req.extensions_mut().remove::<SharedTxn>()
    }

    /// Pull a shared transaction out of request extensions, if present.
    pub fn from_req(req: &HttpRequest) -> Option<Self> {
        req.extensions().get::<SharedTxn>().cloned()
    }

    /// Roll back. Fails if another clone is still alive (e.g. a request
    /// whose extensions have not been dropped yet).
    pub async fn rollback(self) -> Result<(), AppError> {
        let txn = Arc::try_unwrap(self.0).map_err(|_| {
            AppError::internal("SharedTxn still referenced; drop all requests before rollback")
        })?;
        txn.rollback().await?;
        Ok(())
    }
}

/// Execute a function within a database transaction
///
/// 1) If a SharedTxn is in request extensions → use it (no commit/rollback here)
/// 2) Otherwise → begin txn, run closure, apply policy on Ok / rollback on Err
pub async fn with_txn<R, F>(req: Option<&HttpRequest>, state: &AppState, f: F) -> Result<R, AppError>
where
    F: for<'a> FnOnce(
        &'a DatabaseTransaction,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<R, AppError>> + Send + 'a>,
    >,
{
    // Clone out of extensions before awaiting so no RefCell borrow is held.
    let shared_txn = req.and_then(SharedTxn::from_req);

    if let Some(shared) = shared_txn {
        return f(shared.transaction()).await;
    }

    let txn = require_db(state)?.begin().await?;
    let out = f(&txn).await;

    match out {
        Ok(val) => match txn_policy::current() {
            txn_policy::TxnPolicy::CommitOnOk => {
                txn.commit().await?;
                Ok(val)
            }
            txn_policy::TxnPolicy::RollbackOnOk => {
                txn.rollback().await?;
                Ok(val)
            }
        },
        Err(err) => {
            // Best-effort rollback; preserve original error
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}

use crate::models::LedgerData;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub ledger: Arc<Mutex<LedgerData>>,
}

impl AppState {
    pub fn new(data_dir: PathBuf, ledger: LedgerData) -> Self {
        Self {
            data_dir,
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }
}

//! stderr へ JSONL を出力する Log 実装（--verbose 用）

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};
use std::sync::Arc;

/// stderr へ JSONL を 1 行ずつ出力する Log 実装
#[derive(Debug, Clone, Default)]
pub struct StderrJsonLog;

impl Log for StderrJsonLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let line = serde_json::to_string(record).map_err(|e| Error::Json(e.to_string()))?;
        eprintln!("{}", line);
        Ok(())
    }
}

/// 複数の Log へ順に出力する Log 実装
pub struct CompositeLog {
    sinks: Vec<Arc<dyn Log>>,
}

impl CompositeLog {
    pub fn new(sinks: Vec<Arc<dyn Log>>) -> Self {
        Self { sinks }
    }
}

impl Log for CompositeLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        for sink in &self.sinks {
            sink.log(record)?;
        }
        Ok(())
    }
}

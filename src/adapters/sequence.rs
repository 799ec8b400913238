//! Scripted lookup sources.
//!
//! [`SequenceSource`] replays a fixed list of outcomes, one per call,
//! whatever key is asked for. Useful for exercising callers against
//! "fails twice, then succeeds" style stores without a real backend.

use crate::domain::model::{Outcome, OutputCell};
use crate::domain::ports::LookupSource;
use crate::utils::error::{LookupError, Result};
use std::sync::Mutex;

#[derive(Debug, Default)]
struct Cursor {
    cell: usize,
    used: usize,
    keys: Vec<String>,
}

#[derive(Debug)]
pub struct SequenceSource {
    cells: Vec<OutputCell>,
    cursor: Mutex<Cursor>,
}

impl SequenceSource {
    pub fn new(cells: Vec<OutputCell>) -> Self {
        Self {
            cells,
            cursor: Mutex::new(Cursor::default()),
        }
    }

    /// Number of `get` calls made so far, including ones past the end.
    pub fn calls(&self) -> usize {
        self.lock().keys.len()
    }

    /// Keys requested so far, in call order.
    pub fn requested_keys(&self) -> Vec<String> {
        self.lock().keys.clone()
    }

    /// True once every scripted outcome has been handed out.
    pub fn is_exhausted(&self) -> bool {
        self.lock().cell >= self.cells.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Cursor> {
        // A poisoned cursor still holds consistent counters.
        self.cursor.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl LookupSource for SequenceSource {
    fn get(&self, key: &str) -> Result<i64> {
        let mut cursor = self.lock();
        cursor.keys.push(key.to_string());

        let Some(cell) = self.cells.get(cursor.cell) else {
            return Err(LookupError::SequenceExhausted {
                calls: cursor.keys.len(),
            });
        };

        cursor.used += 1;
        if cursor.used >= cell.repeat_count() {
            cursor.cell += 1;
            cursor.used = 0;
        }

        match &cell.outcome {
            Outcome::Value(value) => Ok(*value),
            Outcome::Failure(reason) => Err(LookupError::Source {
                message: reason.clone(),
            }),
        }
    }
}

/// A source whose every lookup fails.
#[derive(Debug, Clone)]
pub struct FailingSource {
    message: String,
}

impl FailingSource {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl LookupSource for FailingSource {
    fn get(&self, _key: &str) -> Result<i64> {
        Err(LookupError::Source {
            message: self.message.clone(),
        })
    }
}

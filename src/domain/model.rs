use serde::Serialize;

/// Value returned by `modulo` and `resolve` when no valid result exists.
pub const SENTINEL: i64 = -1;

/// One scripted response of a sequenced source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Value(i64),
    Failure(String),
}

/// An outcome replayed `times` times. A count of zero is treated as one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputCell {
    pub outcome: Outcome,
    pub times: usize,
}

impl OutputCell {
    pub fn value(value: i64) -> Self {
        Self {
            outcome: Outcome::Value(value),
            times: 1,
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Failure(reason.into()),
            times: 1,
        }
    }

    pub fn times(mut self, times: usize) -> Self {
        self.times = times;
        self
    }

    pub(crate) fn repeat_count(&self) -> usize {
        self.times.max(1)
    }
}

/// Serialized shape of a CLI result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub result: i64,
}

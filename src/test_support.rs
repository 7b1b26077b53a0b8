//! Deterministic helpers shared by unit tests.

use std::collections::VecDeque;

use crate::search::PackageSampler;

/// Sampler replaying scripted picks, then taking the first `amount` indices.
#[derive(Debug, Default)]
pub(crate) struct ScriptedSampler {
    script: VecDeque<Vec<usize>>,
    requests: Vec<(usize, usize)>,
}

impl ScriptedSampler {
    pub(crate) fn new(script: Vec<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            requests: Vec::new(),
        }
    }

    /// Number of samples drawn.
    pub(crate) fn calls(&self) -> usize {
        self.requests.len()
    }

    /// `(pool_len, amount)` of every sample drawn.
    pub(crate) fn requests(&self) -> &[(usize, usize)] {
        &self.requests
    }
}

impl PackageSampler for ScriptedSampler {
    fn sample(&mut self, pool_len: usize, amount: usize) -> Vec<usize> {
        self.requests.push((pool_len, amount));
        match self.script.pop_front() {
            Some(picks) => picks,
            None => (0..amount.min(pool_len)).collect(),
        }
    }
}

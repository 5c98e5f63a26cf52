//! Injected random sources for recording and playback

use crate::ReplayError;

/// Wraps a random source and keeps every value it hands out
pub struct RecordingRng<F> {
    source: F,
    draws: Vec<f64>,
}

impl<F> RecordingRng<F>
where
    F: FnMut() -> f64,
{
    pub fn new(source: F) -> Self {
        Self {
            source,
            draws: Vec::new(),
        }
    }

    /// Draw from the wrapped source and record the value
    pub fn draw(&mut self) -> f64 {
        let value = (self.source)();
        self.draws.push(value);
        value
    }

    pub fn draws(&self) -> &[f64] {
        &self.draws
    }

    pub fn into_draws(self) -> Vec<f64> {
        self.draws
    }
}

/// Plays back a fixed list of draws
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    draws: Vec<f64>,
    cursor: usize,
    overrun: bool,
}

impl ScriptedRng {
    pub fn new(draws: Vec<f64>) -> Self {
        Self {
            draws,
            cursor: 0,
            overrun: false,
        }
    }

    /// Next recorded value; past the end, returns 0.0 and marks an overrun
    pub fn draw(&mut self) -> f64 {
        match self.draws.get(self.cursor) {
            Some(&value) => {
                self.cursor += 1;
                value
            }
            None => {
                self.overrun = true;
                0.0
            }
        }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len() - self.cursor
    }

    /// Check that playback consumed exactly the recorded draws
    pub fn finish(&self, turn: u32) -> Result<(), ReplayError> {
        if self.overrun {
            return Err(ReplayError::RngExhausted { turn });
        }
        match self.remaining() {
            0 => Ok(()),
            remaining => Err(ReplayError::UnusedDraws { turn, remaining }),
        }
    }
}

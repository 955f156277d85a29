//! Serializable description of a policy, used in pool configuration files.

use serde::{Deserialize, Serialize};

use crate::{
    ConstantDelay, DelayedFifo, Lifo, LogNormal, Poisson, PolicyResult, Scrambling,
    SelectionPolicy, Sink,
};

/// Which policy to instantiate for a state, and its parameters.
///
/// ```json
/// { "kind": "delayed_fifo", "delay": 7 }
/// { "kind": "log_normal", "mean": 100.0, "std": 50.0 }
/// { "kind": "sink" }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicyKind {
    Scrambling,
    Lifo,
    DelayedFifo { delay: usize },
    LogNormal { mean: f64, std: f64 },
    Sink,
    Poisson { rate: f64 },
    ConstantDelay { delay: u32 },
}

impl PolicyKind {
    /// Validate parameters and construct the policy.
    pub fn build(&self) -> PolicyResult<Box<dyn SelectionPolicy>> {
        Ok(match *self {
            PolicyKind::Scrambling              => Box::new(Scrambling::new()),
            PolicyKind::Lifo                    => Box::new(Lifo::new()),
            PolicyKind::DelayedFifo { delay }   => Box::new(DelayedFifo::new(delay)),
            PolicyKind::LogNormal { mean, std } => Box::new(LogNormal::new(mean, std)?),
            PolicyKind::Sink                    => Box::new(Sink::new()),
            PolicyKind::Poisson { rate }        => Box::new(Poisson::new(rate)?),
            PolicyKind::ConstantDelay { delay } => Box::new(ConstantDelay::new(delay)),
        })
    }

    /// The `name()` the built policy will report.
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Scrambling           => Scrambling::NAME,
            PolicyKind::Lifo                 => Lifo::NAME,
            PolicyKind::DelayedFifo { .. }   => DelayedFifo::NAME,
            PolicyKind::LogNormal { .. }     => LogNormal::NAME,
            PolicyKind::Sink                 => Sink::NAME,
            PolicyKind::Poisson { .. }       => Poisson::NAME,
            PolicyKind::ConstantDelay { .. } => ConstantDelay::NAME,
        }
    }
}

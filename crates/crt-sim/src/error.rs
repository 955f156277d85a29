use crt_asset::AssetError;
use crt_core::{CrtError, NaiveDate};
use crt_policy::PolicyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CrtError),

    #[error("policy bookkeeping violated: {0}")]
    Policy(#[from] PolicyError),

    #[error("asset state machine violated: {0}")]
    Asset(#[from] AssetError),

    #[error("demand entry dated {found}; expected {expected}")]
    DemandMisaligned {
        expected: NaiveDate,
        found:    NaiveDate,
    },

    #[error("pool membership inconsistent: {0}")]
    Inconsistent(String),

    #[error("pool was poisoned by an earlier failed step")]
    Poisoned,
}

pub type SimResult<T> = Result<T, SimError>;

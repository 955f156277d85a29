use crt_core::AssetId;
use thiserror::Error;

/// Bookkeeping violations raised by selection policies.
///
/// Apart from `InvalidParameter` (raised while building a policy) every
/// variant means the caller broke the ingress/egress contract.  None of them
/// are retried internally.
#[derive(Debug, Error, PartialEq)]
pub enum PolicyError {
    #[error("{policy}: {id} is already a member")]
    AlreadyMember { policy: &'static str, id: AssetId },

    #[error("{policy}: {id} is not a member")]
    NotMember { policy: &'static str, id: AssetId },

    #[error("{policy}: {id} is not due to egress")]
    NotDue { policy: &'static str, id: AssetId },

    #[error("sink: {0} can never leave")]
    Permanent(AssetId),

    #[error("{policy}: invalid parameter: {reason}")]
    InvalidParameter { policy: &'static str, reason: String },
}

pub type PolicyResult<T> = Result<T, PolicyError>;

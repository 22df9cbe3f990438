use crate::runway::RunwayId;
use thiserror::Error;

/// Everything that can abort a run. There is no retry path: the simulation is
/// a deterministic batch job, so the first inconsistency ends it.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("malformed request record {0:?}")]
    MalformedRecord(String),

    #[error("unknown size or request token {0:?}")]
    UnknownToken(String),

    #[error("runway {0} does not exist")]
    RunwayOutOfRange(RunwayId),

    #[error("dequeue from an empty queue")]
    EmptyQueue,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;

use gw_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptError {
    #[error("candidate evaluation failed: {0}")]
    Sim(#[from] SimError),

    #[error("unknown strategy {0:?} (expected hill-climb, jam-targeted, or random-restart)")]
    UnknownStrategy(String),
}

pub type OptResult<T> = Result<T, OptError>;

use club_core::{ClientName, TableId};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("client {0} is already in the waiting queue")]
    AlreadyQueued(ClientName),

    #[error("waiting queue is full ({capacity} clients)")]
    QueueFull { capacity: usize },

    #[error("table {0} is already occupied")]
    TableOccupied(TableId),

    #[error("table {0} does not exist")]
    NoSuchTable(TableId),

    #[error("client {0} is already present")]
    AlreadyPresent(ClientName),
}

pub type StateResult<T> = Result<T, StateError>;

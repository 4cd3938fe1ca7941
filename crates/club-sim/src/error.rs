use club_core::TableId;
use thiserror::Error;

/// Why an event was rejected.
///
/// These are ordinary outcomes of replaying a day, not faults: the engine
/// reports them and carries on.  The `Display` text is the message written
/// to the transcript.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClubError {
    /// Arrival at or before opening time.
    #[error("NotOpenYet")]
    NotOpenYet,

    /// Arrival of a client who is already inside.
    #[error("YouShallNotPass")]
    AlreadyPresent,

    /// The event names a client who is not inside.
    #[error("ClientUnknown")]
    ClientUnknown,

    /// The requested table is occupied by someone else.
    #[error("PlaceIsBusy")]
    TableBusy,

    /// A client asked to wait while a table is free.
    #[error("ICanWaitNoLonger!")]
    CanWaitNoLonger,

    /// A client asked to wait but the queue is full; the client leaves.
    #[error("QueueFull")]
    QueueFull,

    /// The requested table does not exist.
    #[error("NoSuchTable")]
    NoSuchTable(TableId),
}

impl ClubError {
    /// `false` for rejections that are reported through a derived event
    /// instead of an error line.
    pub fn is_reported(&self) -> bool {
        !matches!(self, ClubError::QueueFull)
    }
}

pub type ClubResult<T> = Result<T, ClubError>;

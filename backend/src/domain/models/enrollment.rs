/// Failure modes of a sign-up call.
///
/// Every variant carries the key that failed to resolve. Running out of
/// balance is deliberately absent here: it is a declined business outcome
/// (`shared::EnrollmentOutcome::DeclinedInsufficientBalance`), not an error.
#[derive(Debug, thiserror::Error)]
pub enum EnrollmentError {
    #[error("Passenger with number {0} not found.")]
    PassengerNotFound(i32),

    #[error("Destination with name {0} not found.")]
    DestinationNotFound(String),

    #[error("Activity with name {name} not found at destination {destination}.")]
    ActivityNotFound { name: String, destination: String },

    #[error("Activity {name} at destination {destination} is already fully booked.")]
    ActivityFull { name: String, destination: String },

    /// Storage backend failure. Unreachable with the in-memory backend.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Password hashing or hash parsing failed inside argon2.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Password hashing failed: {reason}")]
    PasswordHash {
        /// Error reported by the hasher
        reason: String,
    },

    /// A trip exists without a driver participation.
    ///
    /// Every trip is created together with its driver link, so this points to
    /// data inserted outside the application.
    #[error("Trip {trip_id} has no driver participation")]
    TripWithoutDriver {
        /// ID of the trip missing its driver
        trip_id: i32,
    },
}

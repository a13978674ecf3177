//! Fetch state machine shared by the list and detail views.

/// State of a remote read as seen by a view.
///
/// Every view renders by matching exhaustively on this enum instead of
/// inferring its state from combinations of nullable fields. `NotFound` is
/// deliberately distinct from `Error`: the former is a successful response
/// with no matching record, the latter a transport or server failure.
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    /// Request in flight.
    Loading,
    /// Transport or server failure, carrying the message to display.
    Error(String),
    /// Successful response with no matching record.
    NotFound,
    /// Successful response.
    Ready(T),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_not_an_error() {
        let state: Remote<String> = Remote::NotFound;
        assert_ne!(state, Remote::Error(String::new()));
        assert!(!matches!(state, Remote::Error(_)));
    }
}

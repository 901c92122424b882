use super::Error;

/// Error when a gateway or mapper is used before it has been configured.
///
/// This occurs when:
/// - A `DbTable` has no driver to open a connection with
/// - A `Mapper` has no `DbTable` bound to it
#[derive(Debug)]
pub(super) struct InvalidState {
    pub(super) message: Box<str>,
}

impl std::error::Error for InvalidState {}

impl core::fmt::Display for InvalidState {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid state: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid state error.
    pub fn invalid_state(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidState(InvalidState {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid state error.
    pub fn is_invalid_state(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::InvalidState(_)))
    }
}

use super::Error;

/// Error when a connection configuration lacks a required parameter.
#[derive(Debug)]
pub(super) struct MissingConfigKey {
    pub(super) key: &'static str,
}

impl std::error::Error for MissingConfigKey {}

impl core::fmt::Display for MissingConfigKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "missing required connection parameter `{}`", self.key)
    }
}

impl Error {
    /// Creates a missing configuration key error.
    pub fn missing_config_key(key: &'static str) -> Error {
        Error::from(super::ErrorKind::MissingConfigKey(MissingConfigKey { key }))
    }

    /// Returns `true` if this error is a missing configuration key error.
    pub fn is_missing_config_key(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::MissingConfigKey(_)))
    }

    /// Returns the name of the missing configuration key, if this is a
    /// missing configuration key error.
    pub fn missing_config_key_name(&self) -> Option<&'static str> {
        self.chain().find_map(|err| match err.kind() {
            super::ErrorKind::MissingConfigKey(err) => Some(err.key),
            _ => None,
        })
    }
}

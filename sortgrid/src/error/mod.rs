//! Error types

mod config;
mod sort;
mod value;

pub use config::*;
pub use sort::*;
pub use value::*;

/// Any error produced by the table core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The table could not be constructed from its inputs.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A sort transition was rejected.
    #[error(transparent)]
    Sort(#[from] SortError),

    /// A field value could not be converted.
    #[error(transparent)]
    Value(#[from] ValueError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build() -> Result<(), Error> {
        Err(ConfigError::EmptyDataset)?
    }

    #[test]
    fn test_errors_convert_into_crate_error() {
        assert_eq!(build(), Err(Error::Config(ConfigError::EmptyDataset)));

        let err: Error = SortError::unknown_field("email").into();
        assert_eq!(err.to_string(), "Field 'email' is not a column of this table");
    }
}

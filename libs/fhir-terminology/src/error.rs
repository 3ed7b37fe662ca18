use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("code '{code}' is not a member of {system}")]
    UnrecognizedCode {
        /// The rejected input, exactly as given.
        code: String,
        /// System URI of the vocabulary that rejected it.
        system: &'static str,
    },
}

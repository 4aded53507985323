use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("detector '{0}' is already registered")]
    DuplicateDetector(String),

    #[error("no detector registered under the name '{0}'")]
    UnknownDetector(String),
}

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("character {0:?} is outside the alphanumeric alphabet")]
    UnsupportedChar(char),
}

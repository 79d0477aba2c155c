use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("could not find two price levels in the message")]
    Unreadable,

    #[error("keyword table produced an invalid pattern: {0}")]
    BadKeywordPattern(#[from] regex::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SdkError {
    #[error("account `{0}` is not set")]
    MissingAccount(&'static str),

    #[error("argument `{0}` is not set")]
    MissingArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, SdkError>;

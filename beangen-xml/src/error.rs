use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Tag-stack violations. Both indicate a bug in the emitting code.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("no open tag to close")]
    TagStackUnderflow,

    #[error("document finished with {} open tag(s): {}", tags.len(), tags.join(", "))]
    UnclosedTags { tags: Vec<String> },
}

pub mod message;

pub mod error {
    use thiserror::Error;

    /// Every way a line can fail to parse. Closed set: callers match on it
    /// exhaustively to decide whether to drop the line or tear down the
    /// connection.
    #[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
    pub enum MessageParseError {
        #[error("message body is empty or not shaped like a message")]
        InvalidInput,
        #[error("message is missing the final CRLF sequence")]
        MissingCrlf,
        #[error("message parameters exceed the allowed count or length")]
        InvalidParam,
    }
}

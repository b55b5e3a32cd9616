// utf-8 char boundary checking is cool
#![allow(clippy::sliced_string_as_bytes)]

pub mod irc_message;

pub use crate::irc_message::error::MessageParseError;
pub use crate::irc_message::message::{MAX_PARAM_LEN, MAX_PARAMS, Message};

use std::str::FromStr;

use memchr::memchr;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::MessageParseError;

/// The most parameters a single message may carry.
pub const MAX_PARAMS: usize = 14;

/// The longest a non-trailing parameter may be, in characters. The trailing
/// parameter is exempt.
pub const MAX_PARAM_LEN: usize = 14;

/// A single parsed IRC line: tags, prefix, command and parameters, with the
/// CRLF terminator already stripped. Built whole by [`Message::try_from`],
/// read-only afterwards.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    /// Raw `key=value` or bare `key` tokens, in order of appearance. Empty
    /// when the line carried no `@`-prefixed tag block.
    pub tags: Vec<String>,
    /// Source of the message, empty when absent.
    pub prefix: String,
    /// Verb or numeric reply code; always non-empty.
    pub command: String,
    /// In order; the last element may be a trailing parameter containing
    /// spaces.
    pub params: SmallVec<[String; 4]>,
}

impl Message {
    pub fn new(val: &str) -> Result<Self, MessageParseError> {
        Self::try_from(val)
    }

    pub fn get_param(&self, idx: usize) -> Option<&str> {
        self.params.get(idx).map(|p| p.as_str())
    }
}

impl TryFrom<&str> for Message {
    type Error = MessageParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        use MessageParseError as E;

        if value.is_empty() {
            return Err(E::InvalidInput);
        }

        let body = value.strip_suffix("\r\n").ok_or(E::MissingCrlf)?;
        if body.is_empty() {
            return Err(E::InvalidInput);
        }

        let mut pos: usize = 0;

        // parses tags if there are any, and sets `pos` to right after the
        // space that ends the tag block
        let tags: Vec<String> = if body.starts_with('@') {
            let tag_end = memchr(b' ', body.as_bytes()).ok_or(E::InvalidInput)?;
            let tags = body[1..tag_end].split(';').map(String::from).collect();
            pos = tag_end + 1;
            tags
        } else {
            Vec::new()
        };

        // parses the prefix, if there is one, and then sets `pos` to the
        // first character of the command
        let prefix = if body[pos..].starts_with(':') {
            let prefix_end = memchr(b' ', &body.as_bytes()[pos..]).ok_or(E::InvalidInput)? + pos;
            let out = body[pos + 1..prefix_end].to_string();
            pos = prefix_end + 1;
            out
        } else {
            String::new()
        };

        // splits the command from its parameters (if present)
        let command = match memchr(b' ', &body.as_bytes()[pos..]) {
            Some(s) => {
                let cmd = &body[pos..pos + s];
                pos += s + 1;
                cmd
            }
            None => {
                let cmd = &body[pos..];
                pos = body.len();
                cmd
            }
        };
        if command.is_empty() {
            return Err(E::InvalidInput);
        }

        let mut params: SmallVec<[String; 4]> = SmallVec::new();

        while pos < body.len() {
            if body.as_bytes()[pos] == b':' {
                // a leading colon marks the trailing parameter: the rest of
                // the body, spaces and all, colon excluded
                params.push(body[pos + 1..].to_string());
                pos = body.len();
            } else {
                let end = memchr(b' ', &body.as_bytes()[pos..]).map_or(body.len(), |i| pos + i);
                let param = &body[pos..end];
                if param.chars().count() > MAX_PARAM_LEN {
                    return Err(E::InvalidParam);
                }
                params.push(param.to_string());
                pos = end + 1;
            }
            if params.len() > MAX_PARAMS {
                return Err(E::InvalidParam);
            }
        }

        Ok(Self {
            tags,
            prefix,
            command: command.to_string(),
            params,
        })
    }
}

impl FromStr for Message {
    type Err = MessageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

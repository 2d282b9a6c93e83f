//! Whitespace-delimited integer token cursor.

use std::str::{FromStr, SplitWhitespace};

use snakebot_types::Position;

use crate::error::ProtocolError;

/// Pulls typed integers off a whitespace-separated stream.
///
/// Every read names the field it is reading so a failure points at the
/// exact place the input diverged from the schema.
#[derive(Debug)]
pub struct TokenReader<'a> {
    tokens: SplitWhitespace<'a>,
    consumed: usize,
}

impl<'a> TokenReader<'a> {
    /// Wrap an input buffer.
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_whitespace(),
            consumed: 0,
        }
    }

    /// Number of tokens read so far.
    pub const fn consumed(&self) -> usize {
        self.consumed
    }

    /// Number of tokens left unread.
    pub fn remaining(&self) -> usize {
        self.tokens.clone().count()
    }

    /// Read one token and parse it as `T`.
    pub fn read<T: FromStr>(&mut self, field: &'static str) -> Result<T, ProtocolError> {
        let token = self
            .tokens
            .next()
            .ok_or(ProtocolError::UnexpectedEnd { field })?;
        self.consumed = self.consumed.saturating_add(1);
        token.parse().map_err(|_unparsed| ProtocolError::InvalidToken {
            field,
            token: token.to_owned(),
        })
    }

    /// Read a non-negative record count.
    pub fn count(&mut self, field: &'static str) -> Result<usize, ProtocolError> {
        let value: i64 = self.read(field)?;
        usize::try_from(value).map_err(|_negative| ProtocolError::NegativeCount { field, value })
    }

    /// Read a `row col` coordinate pair.
    pub fn position(&mut self, field: &'static str) -> Result<Position, ProtocolError> {
        let row = self.read(field)?;
        let col = self.read(field)?;
        Ok(Position::new(row, col))
    }
}

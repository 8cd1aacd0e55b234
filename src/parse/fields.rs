use super::*;
use crate::DELIMITER;
use std::str::FromStr;

/// One protocol line split into fields, consumed left to right.
///
/// Every accessor advances the cursor; there is no peek and no rewind.
/// A single trailing empty field is dropped, so `"R,P,"` holds two fields
/// and an empty line holds none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields {
    tokens: Vec<String>,
    cursor: usize,
}

impl Fields {
    pub fn new(line: &str, delimiter: char) -> Self {
        let mut tokens = line.split(delimiter).map(String::from).collect::<Vec<_>>();
        if tokens.last().is_some_and(String::is_empty) {
            tokens.pop();
        }
        Self { tokens, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
    /// Fields not yet consumed.
    pub fn remaining(&self) -> usize {
        self.len() - self.cursor
    }

    pub fn next_str(&mut self) -> Result<String, FieldError> {
        self.token().map(String::from)
    }
    pub fn next_int(&mut self) -> Result<i64, FieldError> {
        self.token().and_then(|t| Self::value(t, "integer"))
    }
    pub fn next_float(&mut self) -> Result<f64, FieldError> {
        self.token().and_then(|t| Self::value(t, "float"))
    }

    /// The rest of the line as strings.
    pub fn next_str_arr(&mut self) -> Result<Vec<String>, FieldError> {
        self.remainder().map(|rest| rest.to_vec())
    }
    /// The rest of the line as integers.
    pub fn next_int_arr(&mut self) -> Result<Vec<i64>, FieldError> {
        self.remainder()?
            .iter()
            .map(|t| Self::value(t, "integer"))
            .collect()
    }
    /// The rest of the line as floats.
    pub fn next_float_arr(&mut self) -> Result<Vec<f64>, FieldError> {
        self.remainder()?
            .iter()
            .map(|t| Self::value(t, "float"))
            .collect()
    }
}

impl Fields {
    fn token(&mut self) -> Result<&str, FieldError> {
        let index = self.cursor;
        let token = self.tokens.get(index).ok_or(FieldError::Exhausted {
            index,
            count: self.tokens.len(),
        })?;
        self.cursor += 1;
        Ok(token.as_str())
    }

    fn remainder(&mut self) -> Result<&[String], FieldError> {
        let index = self.cursor;
        match index < self.tokens.len() {
            false => Err(FieldError::Exhausted {
                index,
                count: self.tokens.len(),
            }),
            true => {
                self.cursor = self.tokens.len();
                Ok(&self.tokens[index..])
            }
        }
    }

    fn value<T>(token: &str, kind: &'static str) -> Result<T, FieldError>
    where
        T: FromStr,
    {
        token.parse::<T>().map_err(|_| FieldError::Malformed {
            token: token.to_string(),
            kind,
        })
    }
}

/// Split on the protocol [`DELIMITER`].
impl From<&str> for Fields {
    fn from(line: &str) -> Self {
        Self::new(line, DELIMITER)
    }
}

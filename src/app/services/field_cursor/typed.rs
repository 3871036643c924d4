//! Numeric field readers
//!
//! Each reader takes the next field with [`FieldCursor::next_field`] and
//! converts it with the standard `FromStr` grammar of the target type.
//! No trimming beyond the trim phase and no locale handling is applied, so
//! `"1 "` or `"1.000,5"` are rejected.

use std::fmt::Display;
use std::str::FromStr;

use super::parser::FieldCursor;
use crate::{Error, Result};

impl FieldCursor {
    /// Read the next field as an `i16`
    pub fn next_short(&mut self) -> Result<i16> {
        self.next_parsed("i16")
    }

    /// Read the next field as an `i32`
    pub fn next_integer(&mut self) -> Result<i32> {
        self.next_parsed("i32")
    }

    /// Read the next field as an `i64`
    pub fn next_long(&mut self) -> Result<i64> {
        self.next_parsed("i64")
    }

    /// Read the next field as an `f32`
    pub fn next_float(&mut self) -> Result<f32> {
        self.next_parsed("f32")
    }

    /// Read the next field as an `f64`
    pub fn next_double(&mut self) -> Result<f64> {
        self.next_parsed("f64")
    }

    /// Read the next field and parse it as `T`
    ///
    /// An exhausted cursor yields [`Error::OutOfRange`]; a field that is not
    /// a valid `T` yields [`Error::Parse`]. The cursor has moved past the
    /// field in both the success and the parse-failure case.
    pub fn next_parsed<T>(&mut self, target: &'static str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let field = self.next_field()?;
        parse_field(field, target)
    }
}

/// Parse one field, attaching the offending text to the error
pub fn parse_field<T>(field: &str, target: &'static str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    field
        .parse::<T>()
        .map_err(|e| Error::parse(field, target, e))
}

//! Per-column field types and dynamically typed values
//!
//! A [`RowLayout`] names the type of every column in a row, which lets the
//! command-line tool and the prompt service read a whole row without
//! hard-coding a sequence of `next_*` calls.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::parser::FieldCursor;
use super::typed::parse_field;
use crate::{Error, Result};

/// Target type of one field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Short,
    Integer,
    Long,
    Float,
    Double,
}

impl FieldType {
    /// Name used in error messages and logs
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Short => "i16",
            FieldType::Integer => "i32",
            FieldType::Long => "i64",
            FieldType::Float => "f32",
            FieldType::Double => "f64",
        }
    }

    /// Convert raw field text into a value of this type
    pub fn parse_value(&self, text: &str) -> Result<FieldValue> {
        let name = self.name();
        Ok(match self {
            FieldType::String => FieldValue::String(text.to_string()),
            FieldType::Short => FieldValue::Short(parse_field(text, name)?),
            FieldType::Integer => FieldValue::Integer(parse_field(text, name)?),
            FieldType::Long => FieldValue::Long(parse_field(text, name)?),
            FieldType::Float => FieldValue::Float(parse_field(text, name)?),
            FieldType::Double => FieldValue::Double(parse_field(text, name)?),
        })
    }
}

impl FromStr for FieldType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "s" | "str" | "string" => Ok(FieldType::String),
            "h" | "short" | "i16" => Ok(FieldType::Short),
            "i" | "int" | "integer" | "i32" => Ok(FieldType::Integer),
            "l" | "long" | "i64" => Ok(FieldType::Long),
            "f" | "float" | "f32" => Ok(FieldType::Float),
            "d" | "double" | "f64" => Ok(FieldType::Double),
            other => Err(Error::invalid_layout(format!(
                "Unknown field type '{}'. Use s, h, i, l, f or d",
                other
            ))),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One field read with a [`FieldType`]
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Short(i16),
    Integer(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

impl FieldValue {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::String(_) => FieldType::String,
            FieldValue::Short(_) => FieldType::Short,
            FieldValue::Integer(_) => FieldType::Integer,
            FieldValue::Long(_) => FieldType::Long,
            FieldValue::Float(_) => FieldType::Float,
            FieldValue::Double(_) => FieldType::Double,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(v) => f.write_str(v),
            FieldValue::Short(v) => write!(f, "{}", v),
            FieldValue::Integer(v) => write!(f, "{}", v),
            FieldValue::Long(v) => write!(f, "{}", v),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Double(v) => write!(f, "{}", v),
        }
    }
}

/// Ordered column types for one row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RowLayout {
    columns: Vec<FieldType>,
}

impl RowLayout {
    pub fn new(columns: Vec<FieldType>) -> Self {
        Self { columns }
    }

    /// Layout of `width` string columns
    pub fn all_strings(width: usize) -> Self {
        Self {
            columns: vec![FieldType::String; width],
        }
    }

    /// Parse a comma-separated list of type codes such as `s,i,d`
    ///
    /// The list is itself read with a [`FieldCursor`], so blank entries,
    /// line breaks and surrounding whitespace are ignored.
    pub fn parse(codes: &str) -> Result<Self> {
        let mut cursor = FieldCursor::new(codes);
        let mut columns = Vec::new();

        loop {
            let code = match cursor.next_field() {
                Ok(field) => field.trim(),
                Err(e) if e.is_out_of_range() => break,
                Err(e) => return Err(e),
            };
            if !code.is_empty() {
                columns.push(code.parse::<FieldType>()?);
            }
        }

        if columns.is_empty() {
            return Err(Error::invalid_layout("Layout must name at least one column"));
        }

        Ok(Self { columns })
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[FieldType] {
        &self.columns
    }

    /// Fail unless the layout has exactly `width` columns
    pub fn check_width(&self, width: usize) -> Result<()> {
        if self.columns.len() != width {
            return Err(Error::invalid_layout(format!(
                "Layout has {} columns but the row has {}",
                self.columns.len(),
                width
            )));
        }
        Ok(())
    }
}

impl FromStr for RowLayout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        RowLayout::parse(s)
    }
}

impl FieldCursor {
    /// Read the next field as `field_type`
    pub fn next_typed(&mut self, field_type: FieldType) -> Result<FieldValue> {
        let field = self.next_field()?;
        field_type.parse_value(field)
    }

    /// Read one value per column of `layout`
    pub fn read_row(&mut self, layout: &RowLayout) -> Result<Vec<FieldValue>> {
        layout
            .columns()
            .iter()
            .map(|&field_type| self.next_typed(field_type))
            .collect()
    }
}

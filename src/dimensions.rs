//! Named, schema-validated dimension storage.
//!
//! Every shape declares a fixed set of dimension names; values start out
//! unset and may be filled in or cleared later. Reads of unset slots and
//! writes of unusable value kinds fail with typed errors, and batch updates
//! are atomic: nothing is committed unless every entry passes.

use crate::error::SectionError;
use crate::value::Value;

/// A fixed-schema container of optional float dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimensions {
    names: &'static [&'static str],
    values: Vec<Option<f64>>,
}

impl Dimensions {
    /// Create a container with every slot unset.
    #[must_use]
    pub fn new(names: &'static [&'static str]) -> Self {
        Self {
            names,
            values: vec![None; names.len()],
        }
    }

    /// The schema names, in declaration order.
    #[must_use]
    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }

    /// True once every declared dimension holds a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// True if the named dimension currently holds a value.
    pub fn is_set(&self, name: &str) -> Result<bool, SectionError> {
        Ok(self.values[self.index_of(name)?].is_some())
    }

    /// Read a dimension, failing if it is unknown or unset.
    pub fn get(&self, name: &str) -> Result<f64, SectionError> {
        self.values[self.index_of(name)?]
            .ok_or_else(|| SectionError::DimensionNotSet(name.to_owned()))
    }

    /// Write a single dimension. `Unset` clears the slot.
    pub fn set(&mut self, name: &str, value: &Value) -> Result<(), SectionError> {
        let index = self.index_of(name)?;
        self.values[index] = value.as_dimension()?;
        Ok(())
    }

    /// Apply a batch of writes atomically.
    ///
    /// All names are resolved and all values converted before any slot is
    /// touched; a single bad entry leaves the container unchanged.
    pub fn update(&mut self, entries: &[(&str, Value)]) -> Result<(), SectionError> {
        let mut staged = Vec::with_capacity(entries.len());
        for (name, value) in entries {
            staged.push((self.index_of(name)?, value.as_dimension()?));
        }
        for (index, value) in staged {
            self.values[index] = value;
        }
        Ok(())
    }

    fn index_of(&self, name: &str) -> Result<usize, SectionError> {
        self.names
            .iter()
            .position(|n| *n == name)
            .ok_or_else(|| SectionError::UnknownDimension(name.to_owned()))
    }
}

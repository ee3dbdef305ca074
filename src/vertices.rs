//! Ordered, validated vertex storage for polygonal sections.

use crate::error::SectionError;
use crate::transform::Point2;
use crate::value::Value;

/// A fixed-length, resizable sequence of optional 2D points.
///
/// Slots start out unset; reading an unset slot is an error, as is indexing
/// outside the current length. Assignment goes through [`Value`] coercion so
/// integral coordinates become floats and non-numeric input is rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexArray {
    slots: Vec<Option<Point2>>,
}

impl VertexArray {
    /// Create an array of `n` unset slots.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            slots: vec![None; n],
        }
    }

    /// Current number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when there are no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Set the length to `n`, keeping existing slots by index and padding
    /// new slots as unset. Shrinking drops trailing vertices.
    pub fn resize(&mut self, n: usize) {
        self.slots.resize(n, None);
    }

    /// Read the vertex in slot `index`.
    pub fn get(&self, index: usize) -> Result<Point2, SectionError> {
        self.check_index(index)?;
        self.slots[index].ok_or(SectionError::VertexNotSet(index))
    }

    /// Assign slot `index` from a dynamic value. `Unset` clears the slot.
    pub fn set(&mut self, index: usize, value: &Value) -> Result<(), SectionError> {
        self.check_index(index)?;
        self.slots[index] = value.as_vertex()?;
        Ok(())
    }

    /// Replace every slot at once, preserving the current length.
    ///
    /// All values are coerced before anything is committed, so a bad entry
    /// leaves the array untouched.
    pub fn set_range(&mut self, values: &[Value]) -> Result<(), SectionError> {
        if values.len() != self.slots.len() {
            return Err(SectionError::VertexCountMismatch {
                expected: self.slots.len(),
                found: values.len(),
            });
        }
        let staged = values
            .iter()
            .map(Value::as_vertex)
            .collect::<Result<Vec<_>, _>>()?;
        self.slots = staged;
        Ok(())
    }

    /// Insert a coerced vertex at `index`, growing the array by one.
    /// `index` may equal the current length (append).
    pub(crate) fn insert(&mut self, index: usize, value: &Value) -> Result<(), SectionError> {
        if index > self.slots.len() {
            return Err(SectionError::VertexIndexOutOfRange {
                index,
                len: self.slots.len(),
            });
        }
        let vertex = value.as_vertex()?;
        self.slots.insert(index, vertex);
        Ok(())
    }

    /// True once every slot holds a point.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// All vertices in order, failing on the first unset slot.
    pub(crate) fn points(&self) -> Result<Vec<Point2>, SectionError> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| slot.ok_or(SectionError::VertexNotSet(i)))
            .collect()
    }

    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }

    fn check_index(&self, index: usize) -> Result<(), SectionError> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(SectionError::VertexIndexOutOfRange {
                index,
                len: self.slots.len(),
            })
        }
    }
}

/* Frozen storage for repeated fields.
   Builders accumulate into a plain Vec; build() moves that Vec behind an Arc
   without copying its elements. Clones share the same allocation. */

use crate::errors::{MessageError, MessageResult};
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq, Eq, Hash)]
pub struct RepeatedField<T> {
    items: Arc<Vec<T>>,
}

impl<T> RepeatedField<T> {
    pub fn new() -> Self {
        Self {
            items: Arc::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /* Checked access that names the field in the error */
    pub fn at(&self, field: &str, index: usize) -> MessageResult<&T> {
        self.items
            .get(index)
            .ok_or_else(|| MessageError::index_out_of_range(field, index, self.items.len()))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /* True when both handles share one allocation */
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl<T: Clone> RepeatedField<T> {
    /* Owned copy of the elements, used to seed a new builder */
    pub fn to_vec(&self) -> Vec<T> {
        self.items.as_ref().clone()
    }
}

impl<T> Clone for RepeatedField<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for RepeatedField<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for RepeatedField<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(items),
        }
    }
}

impl<T> Deref for RepeatedField<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a RepeatedField<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_reports_field_index_and_count() {
        let tags = RepeatedField::from(vec!["a".to_string()]);
        assert_eq!(tags.at("tags", 0).unwrap(), "a");
        assert_eq!(
            tags.at("tags", 1).unwrap_err(),
            MessageError::IndexOutOfRange {
                field: "tags".to_string(),
                index: 1,
                count: 1,
            }
        );
    }

    #[test]
    fn from_vec_moves_without_copying() {
        let items = vec![1u64, 2, 3];
        let data = items.as_ptr();
        let field = RepeatedField::from(items);
        assert_eq!(field.as_slice().as_ptr(), data);
    }

    #[test]
    fn clones_share_storage() {
        let field = RepeatedField::from(vec![1, 2]);
        let copy = field.clone();
        assert!(field.ptr_eq(&copy));
        assert_eq!(field, copy);
    }

    #[test]
    fn empty_field_rejects_every_index() {
        let field: RepeatedField<String> = RepeatedField::new();
        assert!(field.is_empty());
        assert!(field.at("tags", 0).is_err());
        assert!(field.get(usize::MAX).is_none());
    }
}

//! Zero, one, or many results.

/// Result of a lookup that may match nothing, one record, or several.
///
/// A single match is returned unwrapped rather than as a one-element list.
#[derive(Debug, Clone, PartialEq)]
pub enum Collapsed<T> {
    /// Nothing matched.
    Empty,
    /// Exactly one match.
    Single(T),
    /// Two or more matches, in lookup order.
    Many(Vec<T>),
}

impl<T> Collapsed<T> {
    /// Number of records held.
    pub fn len(&self) -> usize {
        match self {
            Collapsed::Empty => 0,
            Collapsed::Single(_) => 1,
            Collapsed::Many(items) => items.len(),
        }
    }

    /// True when nothing matched.
    pub fn is_empty(&self) -> bool {
        matches!(self, Collapsed::Empty)
    }

    /// The record, if exactly one matched.
    pub fn single(self) -> Option<T> {
        match self {
            Collapsed::Single(item) => Some(item),
            _ => None,
        }
    }

    /// Flattens back into a list.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Collapsed::Empty => Vec::new(),
            Collapsed::Single(item) => vec![item],
            Collapsed::Many(items) => items,
        }
    }
}

impl<T> From<Vec<T>> for Collapsed<T> {
    fn from(mut items: Vec<T>) -> Self {
        match items.len() {
            0 => Collapsed::Empty,
            1 => match items.pop() {
                Some(item) => Collapsed::Single(item),
                None => Collapsed::Empty,
            },
            _ => Collapsed::Many(items),
        }
    }
}

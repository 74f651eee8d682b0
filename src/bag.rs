use std::fmt;

use crate::{
    middle_out::MiddleOut,
    order::Order,
    reverse::Reverse,
    side_cross::SideCross,
    sorted::{Ascending, Descending},
    view::{Error, Result},
};

/// Insertion-ordered, duplicate-keeping multiset.
///
/// Elements are only ever appended; [`remove`](Bag::remove) is the one
/// shrinking operation and it deletes every equal occurrence at once.
/// Duplicates are indistinguishable once inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bag<T> {
    items: Vec<T>,
}

impl<T> Bag<T> {
    pub fn new() -> Self {
        Bag { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The underlying sequence, in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Appends `value`; duplicates are kept as separate occurrences.
    pub fn add(&mut self, value: T) {
        self.items.push(value);
    }
}

impl<T: PartialEq> Bag<T> {
    /// Deletes every occurrence equal to `value`, keeping the relative order
    /// of the survivors. [`Error::NotFound`] if nothing matched, in which
    /// case the container is unchanged.
    pub fn remove(&mut self, value: &T) -> Result<()> {
        let before = self.items.len();
        self.items.retain(|item| item != value);
        if self.items.len() == before {
            return Err(Error::NotFound);
        }
        Ok(())
    }
}

impl<T> Bag<T> {
    /// Live cursor over the container in insertion order.
    pub fn begin_order(&self) -> Order<'_, T> {
        Order::begin(self)
    }

    pub fn end_order(&self) -> Order<'_, T> {
        Order::end(self)
    }
}

impl<T: Clone> Bag<T> {
    /// Snapshot cursor in reverse insertion order.
    pub fn begin_reverse(&self) -> Reverse<T> {
        Reverse::begin(self)
    }

    pub fn end_reverse(&self) -> Reverse<T> {
        Reverse::end(self)
    }

    /// Snapshot cursor starting at the middle element, stepping alternately
    /// left and right.
    pub fn begin_middle_out(&self) -> MiddleOut<T> {
        MiddleOut::begin(self)
    }

    pub fn end_middle_out(&self) -> MiddleOut<T> {
        MiddleOut::end(self)
    }
}

impl<T: Clone + Ord> Bag<T> {
    /// Snapshot cursor in non-decreasing value order.
    pub fn begin_ascending(&self) -> Ascending<T> {
        Ascending::begin(self)
    }

    pub fn end_ascending(&self) -> Ascending<T> {
        Ascending::end(self)
    }

    /// Snapshot cursor in non-increasing value order; ties appear in the
    /// reverse of their insertion order.
    pub fn begin_descending(&self) -> Descending<T> {
        Descending::begin(self)
    }

    pub fn end_descending(&self) -> Descending<T> {
        Descending::end(self)
    }

    /// Snapshot cursor alternating smallest, largest, second-smallest, ...
    pub fn begin_side_cross(&self) -> SideCross<T> {
        SideCross::begin(self)
    }

    pub fn end_side_cross(&self) -> SideCross<T> {
        SideCross::end(self)
    }
}

/// Renders as `{a, b, c}` in insertion order; `{}` when empty.
impl<T: fmt::Display> fmt::Display for Bag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("}")
    }
}

impl<T> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Bag {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Bag<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

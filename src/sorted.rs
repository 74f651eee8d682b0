//! Value-ordered snapshot views: [`Ascending`] and [`Descending`].

use crate::{
    bag::Bag,
    view::{Error, Result, Traversal},
};

/// Snapshot cursor in non-decreasing value order.
#[derive(Debug, Clone)]
pub struct Ascending<T> {
    sorted: Vec<T>,
    index: usize,
}

impl<T: Clone + Ord> Ascending<T> {
    /// [`Error::InvalidSource`] when handed no container.
    pub fn from_source(source: Option<&Bag<T>>, index: usize) -> Result<Self> {
        let bag = source.ok_or(Error::InvalidSource)?;
        Ok(Self::snapshot(bag, index))
    }

    pub(crate) fn begin(bag: &Bag<T>) -> Self {
        Self::snapshot(bag, 0)
    }

    pub(crate) fn end(bag: &Bag<T>) -> Self {
        Self::snapshot(bag, bag.len())
    }

    fn snapshot(bag: &Bag<T>, index: usize) -> Self {
        let mut sorted = bag.as_slice().to_vec();
        sorted.sort();
        Ascending { sorted, index }
    }
}

impl<T> Traversal for Ascending<T> {
    type Item = T;

    fn current(&self) -> Result<&T> {
        self.sorted.get(self.index).ok_or(Error::Exhausted)
    }

    fn advance(&mut self) -> Result<()> {
        if self.index >= self.sorted.len() {
            return Err(Error::Exhausted);
        }
        self.index += 1;
        Ok(())
    }
}

/// Snapshots are compared by content, not by source identity: views over
/// different containers holding identical elements are equal.
impl<T: PartialEq> PartialEq for Ascending<T> {
    fn eq(&self, other: &Self) -> bool {
        self.sorted == other.sorted && self.index == other.index
    }
}

impl<T: Eq> Eq for Ascending<T> {}

/// Snapshot cursor in non-increasing value order.
///
/// Built as the ascending sort followed by a full reversal, so equal
/// elements appear in the reverse of their insertion order. This is not a
/// stable descending sort.
#[derive(Debug, Clone)]
pub struct Descending<T> {
    sorted: Vec<T>,
    index: usize,
}

impl<T: Clone + Ord> Descending<T> {
    /// [`Error::InvalidSource`] when handed no container.
    pub fn from_source(source: Option<&Bag<T>>, index: usize) -> Result<Self> {
        let bag = source.ok_or(Error::InvalidSource)?;
        Ok(Self::snapshot(bag, index))
    }

    pub(crate) fn begin(bag: &Bag<T>) -> Self {
        Self::snapshot(bag, 0)
    }

    pub(crate) fn end(bag: &Bag<T>) -> Self {
        Self::snapshot(bag, bag.len())
    }

    fn snapshot(bag: &Bag<T>, index: usize) -> Self {
        let mut sorted = bag.as_slice().to_vec();
        sorted.sort();
        sorted.reverse();
        Descending { sorted, index }
    }
}

impl<T> Traversal for Descending<T> {
    type Item = T;

    fn current(&self) -> Result<&T> {
        self.sorted.get(self.index).ok_or(Error::Exhausted)
    }

    fn advance(&mut self) -> Result<()> {
        if self.index >= self.sorted.len() {
            return Err(Error::Exhausted);
        }
        self.index += 1;
        Ok(())
    }
}

impl<T: PartialEq> PartialEq for Descending<T> {
    fn eq(&self, other: &Self) -> bool {
        self.sorted == other.sorted && self.index == other.index
    }
}

impl<T: Eq> Eq for Descending<T> {}

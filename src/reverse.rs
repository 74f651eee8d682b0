use crate::{
    bag::Bag,
    view::{Error, Result, Traversal},
};

/// Snapshot cursor in reverse insertion order: the last element added comes
/// first. Distinct from [`Descending`](crate::sorted::Descending), which
/// reverses value order.
#[derive(Debug, Clone)]
pub struct Reverse<T> {
    reversed: Vec<T>,
    index: usize,
}

impl<T: Clone> Reverse<T> {
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
        let mut reversed = bag.as_slice().to_vec();
        reversed.reverse();
        Reverse { reversed, index }
    }
}

impl<T> Traversal for Reverse<T> {
    type Item = T;

    fn current(&self) -> Result<&T> {
        self.reversed.get(self.index).ok_or(Error::Exhausted)
    }

    fn advance(&mut self) -> Result<()> {
        if self.index >= self.reversed.len() {
            return Err(Error::Exhausted);
        }
        self.index += 1;
        Ok(())
    }
}

impl<T: PartialEq> PartialEq for Reverse<T> {
    fn eq(&self, other: &Self) -> bool {
        self.reversed == other.reversed && self.index == other.index
    }
}

impl<T: Eq> Eq for Reverse<T> {}

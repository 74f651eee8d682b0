use crate::{
    bag::Bag,
    view::{Error, Result, Traversal},
};

/// Snapshot cursor that starts at the middle of the insertion sequence and
/// steps alternately one position further left, then right. Integer division
/// puts the start right of centre for even counts.
///
/// The room check only looks at the currently active side: when that side
/// has no space left the cursor jumps straight to the terminal position,
/// even if the other side still held unvisited elements at that step.
#[derive(Debug, Clone)]
pub struct MiddleOut<T> {
    items: Vec<T>,
    index: usize,
    offset: usize,
    move_left: bool,
}

impl<T: Clone> MiddleOut<T> {
    /// [`Error::InvalidSource`] when handed no container.
    pub fn from_source(source: Option<&Bag<T>>, index: usize) -> Result<Self> {
        let bag = source.ok_or(Error::InvalidSource)?;
        Ok(Self::snapshot(bag, index))
    }

    pub(crate) fn begin(bag: &Bag<T>) -> Self {
        Self::snapshot(bag, bag.len() / 2)
    }

    pub(crate) fn end(bag: &Bag<T>) -> Self {
        Self::snapshot(bag, bag.len())
    }

    fn snapshot(bag: &Bag<T>, index: usize) -> Self {
        MiddleOut {
            items: bag.as_slice().to_vec(),
            index,
            offset: 0,
            move_left: true,
        }
    }
}

impl<T> Traversal for MiddleOut<T> {
    type Item = T;

    fn current(&self) -> Result<&T> {
        self.items.get(self.index).ok_or(Error::Exhausted)
    }

    fn advance(&mut self) -> Result<()> {
        if self.index >= self.items.len() {
            return Err(Error::Exhausted);
        }
        if self.move_left {
            if self.index > self.offset {
                self.offset += 1;
                self.index -= self.offset;
                self.move_left = false;
            } else {
                self.index = self.items.len();
            }
        } else if self.index + self.offset < self.items.len() {
            self.offset += 1;
            self.index += self.offset;
            self.move_left = true;
        } else {
            self.index = self.items.len();
        }
        Ok(())
    }
}

impl<T: PartialEq> PartialEq for MiddleOut<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items && self.index == other.index
    }
}

impl<T: Eq> Eq for MiddleOut<T> {}

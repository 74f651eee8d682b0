use crate::{
    bag::Bag,
    view::{Error, Result, Traversal},
};

/// Snapshot cursor over the ascending sort, alternating between the two
/// ends: smallest, largest, second-smallest, second-largest, converging on
/// the middle. An odd-sized container visits its exact middle element last
/// and only once.
///
/// The two consuming pointers start at `left = 0` and `right = len - 1`;
/// each step records the consumed position into `index` and toggles which
/// side goes next. The terminal index is `len / 2`, where the pointers meet,
/// except that zero- and one-element containers terminate at `len`.
#[derive(Debug, Clone)]
pub struct SideCross<T> {
    sorted: Vec<T>,
    index: usize,
    left: usize,
    right: usize,
    left_turn: bool,
}

impl<T: Clone + Ord> SideCross<T> {
    /// [`Error::InvalidSource`] when handed no container.
    pub fn from_source(source: Option<&Bag<T>>, index: usize) -> Result<Self> {
        let bag = source.ok_or(Error::InvalidSource)?;
        Ok(Self::snapshot(bag, index))
    }

    pub(crate) fn begin(bag: &Bag<T>) -> Self {
        Self::snapshot(bag, 0)
    }

    pub(crate) fn end(bag: &Bag<T>) -> Self {
        let terminal = if bag.len() <= 1 {
            bag.len()
        } else {
            bag.len() / 2
        };
        let mut view = Self::snapshot(bag, terminal);
        // crossed pointers, so the end cursor itself can never be read or
        // stepped even though its index is inside the buffer
        view.left = view.sorted.len();
        view.right = 0;
        view
    }

    fn snapshot(bag: &Bag<T>, index: usize) -> Self {
        let mut sorted = bag.as_slice().to_vec();
        sorted.sort();
        let right = sorted.len().saturating_sub(1);
        SideCross {
            sorted,
            index,
            left: 0,
            right,
            left_turn: true,
        }
    }
}

impl<T> SideCross<T> {
    fn pick(&self) -> usize {
        if self.left_turn {
            self.left
        } else {
            self.right
        }
    }

    fn exhausted(&self) -> bool {
        self.index >= self.sorted.len() || self.left > self.right
    }
}

impl<T> Traversal for SideCross<T> {
    type Item = T;

    fn current(&self) -> Result<&T> {
        if self.sorted.is_empty() || self.exhausted() {
            return Err(Error::Exhausted);
        }
        Ok(&self.sorted[self.pick()])
    }

    fn advance(&mut self) -> Result<()> {
        if self.exhausted() {
            return Err(Error::Exhausted);
        }
        if self.sorted.len() == 1 {
            self.index += 1;
        } else if self.left_turn {
            self.index = self.left;
            self.left += 1;
            self.left_turn = false;
        } else {
            self.index = self.right;
            self.right -= 1;
            self.left_turn = true;
        }
        Ok(())
    }
}

/// Compared by the sorted buffer and the recorded position only; the
/// consuming pointers and the turn flag are walk-internal state.
impl<T: PartialEq> PartialEq for SideCross<T> {
    fn eq(&self, other: &Self) -> bool {
        self.sorted == other.sorted && self.index == other.index
    }
}

impl<T: Eq> Eq for SideCross<T> {}

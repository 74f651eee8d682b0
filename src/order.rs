use crate::{
    bag::Bag,
    view::{Error, Result, Traversal},
};

/// Live cursor over the source container in insertion order.
///
/// The only view kind that reads the container directly on each dereference;
/// the borrow keeps the container immutable for as long as the cursor is
/// alive, so the walk can never observe a mid-walk mutation.
#[derive(Debug)]
pub struct Order<'a, T> {
    source: &'a Bag<T>,
    index: usize,
}

// not derived: the cursor is copyable whatever `T` is, it only borrows
impl<T> Copy for Order<'_, T> {}

impl<T> Clone for Order<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Order<'a, T> {
    /// [`Error::InvalidSource`] when handed no container.
    pub fn from_source(source: Option<&'a Bag<T>>, index: usize) -> Result<Self> {
        let source = source.ok_or(Error::InvalidSource)?;
        Ok(Order { source, index })
    }

    pub(crate) fn begin(source: &'a Bag<T>) -> Self {
        Order { source, index: 0 }
    }

    pub(crate) fn end(source: &'a Bag<T>) -> Self {
        Order {
            source,
            index: source.len(),
        }
    }
}

impl<T> Traversal for Order<'_, T> {
    type Item = T;

    fn current(&self) -> Result<&T> {
        self.source
            .as_slice()
            .get(self.index)
            .ok_or(Error::Exhausted)
    }

    fn advance(&mut self) -> Result<()> {
        if self.index >= self.source.len() {
            return Err(Error::Exhausted);
        }
        self.index += 1;
        Ok(())
    }
}

/// Equal only when both cursors watch the same container instance, at the
/// same position.
impl<T> PartialEq for Order<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.source, other.source) && self.index == other.index
    }
}

impl<T> Eq for Order<'_, T> {}

#[cfg(test)]
mod order_test {
    use super::*;
    use crate::view::walk;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_begin_equals_end() {
        let bag: Bag<i32> = Bag::new();
        assert_eq!(bag.begin_order(), bag.end_order());
    }

    #[test]
    fn matches_push_sequence() {
        let bag: Bag<i32> = [5, 3, 8].into_iter().collect();
        let got = walk(bag.begin_order(), &bag.end_order()).unwrap();
        assert_eq!(got, vec![5, 3, 8]);
    }

    #[test]
    fn cursor_sanity() {
        let bag: Bag<i32> = [1, 2].into_iter().collect();
        let mut a = bag.begin_order();
        let b = bag.begin_order();
        assert_eq!(a, b);
        assert_eq!(a.current(), Ok(&1));
        a.advance().unwrap();
        assert_eq!(a.current(), Ok(&2));
        assert_ne!(a, b);
    }

    #[test]
    fn distinct_containers_never_compare_equal() {
        let a: Bag<i32> = [1].into_iter().collect();
        let b: Bag<i32> = [1].into_iter().collect();
        assert_ne!(a.begin_order(), b.begin_order());
    }

    #[test]
    fn exhaustion_is_guarded() {
        let bag: Bag<i32> = [9].into_iter().collect();
        let end = bag.end_order();
        assert_eq!(end.current(), Err(Error::Exhausted));

        let mut cursor = bag.begin_order();
        cursor.advance().unwrap();
        assert_eq!(cursor.advance(), Err(Error::Exhausted));
    }

    #[test]
    fn absent_source_is_rejected() {
        assert_eq!(
            Order::<i32>::from_source(None, 0).unwrap_err(),
            Error::InvalidSource
        );
    }
}

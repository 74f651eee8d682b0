use thiserror::Error;

/// Failure modes of the container and its cursors. All of them are local,
/// synchronous and recoverable; none leaves the container or the cursor in a
/// partially updated state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// `remove` matched nothing; the container is left untouched.
    #[error("value does not exist in the container")]
    NotFound,
    /// The cursor is at or past its terminal position.
    #[error("cursor is exhausted")]
    Exhausted,
    /// A view was constructed without a source container.
    #[error("view has no source container")]
    InvalidSource,
}

pub type Result<T> = std::result::Result<T, Error>;

/// One-directional cursor over some ordering of a [`Bag`](crate::bag::Bag).
///
/// A matched begin/end pair comes from the container's factory methods; the
/// caller dereferences with [`current`](Traversal::current), steps with
/// [`advance`](Traversal::advance) and stops once the cursor compares equal
/// to the end cursor of the same kind.
pub trait Traversal {
    type Item;

    /// Element under the cursor; [`Error::Exhausted`] at the terminal
    /// position.
    fn current(&self) -> Result<&Self::Item>;

    /// Step once towards the terminal position; [`Error::Exhausted`] if
    /// already there.
    fn advance(&mut self) -> Result<()>;

    /// Advance, returning the cursor as it was before the step.
    fn stepped(&mut self) -> Result<Self>
    where
        Self: Clone,
    {
        let prev = self.clone();
        self.advance()?;
        Ok(prev)
    }
}

/// Drain `cursor` up to (excluding) `end`, cloning every element on the way.
pub fn walk<V>(mut cursor: V, end: &V) -> Result<Vec<V::Item>>
where
    V: Traversal + PartialEq,
    V::Item: Clone,
{
    let mut out = Vec::new();
    while cursor != *end {
        out.push(cursor.current()?.clone());
        cursor.advance()?;
    }
    Ok(out)
}

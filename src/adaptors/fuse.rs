use std::iter::FusedIterator;

/// Upstream guard shared by every adaptor.
///
/// Once the wrapped cursor reports completion it is never advanced again, so the
/// adaptor holding it moves from producing to exhausted for good.
#[derive(Debug, Clone)]
pub(crate) struct Fuse<I> {
    iter: I,
    finished: bool,
}

impl<I> Fuse<I> {
    #[inline]
    pub(crate) fn new(iter: I) -> Self {
        Self {
            iter,
            finished: false,
        }
    }

    #[inline]
    pub(crate) fn finished(&self) -> bool {
        self.finished
    }
}

impl<I: Iterator> Iterator for Fuse<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let item = self.iter.next();
        self.finished = item.is_none();
        item
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            self.iter.size_hint()
        }
    }
}

impl<I: Iterator> FusedIterator for Fuse<I> {}

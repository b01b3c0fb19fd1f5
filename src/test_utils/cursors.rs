use std::{cell::Cell, rc::Rc};

/// A cursor that records how many times it has been advanced,
/// including advances after it reported completion.
pub struct Counting<I> {
    iter: I,
    pulls: Pulls,
}

/// Handle to read a [`Counting`] cursor's pull count after the cursor was moved away.
#[derive(Debug, Clone, Default)]
pub struct Pulls(Rc<Cell<usize>>);

impl Pulls {
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl<I: Iterator> Counting<I> {
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> (Self, Pulls) {
        let pulls = Pulls::default();
        let counting = Self {
            iter: iter.into_iter(),
            pulls: pulls.clone(),
        };
        (counting, pulls)
    }
}

impl<I: Iterator> Iterator for Counting<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.pulls.0.set(self.pulls.0.get() + 1);
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// A misbehaving cursor: after reporting completion it starts over from the beginning.
///
/// Every adaptor in this crate must keep reporting completion regardless.
#[derive(Debug, Clone)]
pub struct Unfused<I> {
    start: I,
    iter: I,
}

impl<I: Iterator + Clone> Unfused<I> {
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        let iter = iter.into_iter();
        Self {
            start: iter.clone(),
            iter,
        }
    }
}

impl<I: Iterator + Clone> Iterator for Unfused<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next();
        if item.is_none() {
            self.iter = self.start.clone();
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

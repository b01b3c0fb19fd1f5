/// A source that can hand out a fresh, independent cursor any number of times.
///
/// Asking for a cursor never mutates or exhausts the source itself, so two cursors
/// obtained from the same source replay the same sequence independently.
///
/// This trait is implemented for every [`IntoIterator`] that is also [`Clone`]:
/// shared references to collections (`&Vec<T>`, `&[T]`, `&HashSet<T>`), arrays of
/// `Clone` items, ranges, and any `Clone` iterator (which is then replayed from the
/// position it had when it was cloned).
///
/// Method syntax resolves to the most-dereferenced receiver: `.cursor()` on a `&Vec<T>`
/// picks the `Vec<T>` implementation, which clones the whole collection and yields owned
/// items. Call `Repeatable::cursor(&source)` to borrow through the reference instead.
///
/// # Examples
///
/// ```
/// use iterthing::Repeatable;
///
/// let nums = vec![1, 2, 3];
/// let source = &nums;
///
/// let mut a = Repeatable::cursor(&source);
/// let mut b = Repeatable::cursor(&source);
///
/// assert_eq!(a.next(), Some(&1));
/// assert_eq!(a.next(), Some(&2));
/// assert_eq!(b.next(), Some(&1));
/// ```
///
/// Called on an owned collection, a cursor owns a clone of it:
///
/// ```
/// use iterthing::Repeatable;
///
/// let words = vec![String::from("a"), String::from("b")];
/// let owned: Vec<String> = words.cursor().collect();
///
/// assert_eq!(owned, words);
/// ```
pub trait Repeatable {
    /// The type of the elements each cursor produces.
    type Item;

    /// The cursor handed out by [`cursor()`](Repeatable::cursor).
    type Cursor: Iterator<Item = Self::Item>;

    /// Produces a brand new cursor positioned at the start of the sequence.
    fn cursor(&self) -> Self::Cursor;
}

impl<S> Repeatable for S
where
    S: IntoIterator + Clone,
{
    type Item = S::Item;
    type Cursor = S::IntoIter;

    #[inline]
    fn cursor(&self) -> Self::Cursor {
        self.clone().into_iter()
    }
}

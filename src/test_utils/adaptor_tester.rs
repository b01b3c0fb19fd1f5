use std::fmt::Debug;

use proptest::{prelude::*, test_runner::TestCaseResult};

use super::Unfused;

/// An error returned when an adaptor misbehaves on a given input.
#[derive(Debug)]
pub enum PredError {
    /// The adaptor produced different items than the oracle.
    IncorrectOutput,
    /// `size_hint()` did not bracket the number of items actually left.
    IncorrectSizeHint,
    /// The adaptor produced an item after having reported completion.
    NotFused,
}

impl PredError {
    fn of_adaptor(self, name: &'static str) -> TestCaseError {
        TestCaseError::Fail(format!("`{name}` is implemented incorrectly: {self:?}").into())
    }
}

/// Drives the adaptor built by `adaptor_factory` over `items` and checks it against
/// `expected`.
///
/// The adaptor is fed an [`Unfused`] cursor, so it also has to guard its own
/// exhaustion state.
pub fn test_adaptor<T, A>(
    name: &'static str,
    items: Vec<T>,
    adaptor_factory: impl FnOnce(Unfused<std::vec::IntoIter<T>>) -> A,
    expected: Vec<A::Item>,
) -> TestCaseResult
where
    T: Clone,
    A: Iterator<Item: PartialEq + Debug>,
{
    let mut adaptor = adaptor_factory(Unfused::new(items));
    let mut produced = Vec::with_capacity(expected.len());

    loop {
        let remaining = expected.len() - produced.len();
        let (lower, upper) = adaptor.size_hint();
        if lower > remaining || upper.is_some_and(|upper| upper < remaining) {
            return Err(PredError::IncorrectSizeHint.of_adaptor(name));
        }

        match adaptor.next() {
            Some(item) => produced.push(item),
            None => break,
        }

        if produced.len() > expected.len() {
            return Err(PredError::IncorrectOutput.of_adaptor(name));
        }
    }

    prop_assert_eq!(&produced, &expected, "`{}` produced wrong items", name);

    for _ in 0..3 {
        if adaptor.next().is_some() {
            return Err(PredError::NotFused.of_adaptor(name));
        }
    }

    Ok(())
}

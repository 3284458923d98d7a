use std::iter::FusedIterator;

use log::trace;

use crate::basic_types::Size;
use crate::basic_types::Term;
use crate::fizzbuzz_assert_moderate;

/// A lazy iterator over the terms of a FizzBuzz sequence.
///
/// Created by [`FizzBuzz::terms`](crate::FizzBuzz::terms). The size of the sequence is fixed when
/// the iterator is created; changing the size of the generator afterwards does not affect it.
#[derive(Debug, Clone)]
#[allow(
    missing_copy_implementations,
    reason = "an iterator which is implicitly copied silently loses its progress"
)]
pub struct Terms {
    /// The last position which was produced, 0 before the first call to `next`.
    position: i64,
    size: i64,
}

impl Terms {
    pub(crate) fn new(size: Size) -> Terms {
        Terms {
            position: 0,
            size: size.get(),
        }
    }

    /// The number of terms which have been produced so far.
    pub fn position(&self) -> i64 {
        self.position
    }

    fn remaining(&self) -> i64 {
        self.size - self.position
    }
}

impl Iterator for Terms {
    type Item = Term;

    fn next(&mut self) -> Option<Term> {
        if self.position >= self.size {
            return None;
        }

        self.position += 1;
        fizzbuzz_assert_moderate!(self.position >= 1 && self.position <= self.size);

        let term = Term::at(self.position);
        trace!("Produced term {term} at position {}", self.position);

        Some(term)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

// The remaining length only fits a `usize` for every size when pointers are 64 bits wide.
#[cfg(target_pointer_width = "64")]
impl ExactSizeIterator for Terms {}

impl FusedIterator for Terms {}

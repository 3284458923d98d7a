use log::debug;
use log::warn;

use super::Terms;
use crate::basic_types::Size;
use crate::basic_types::SizeError;
use crate::basic_types::Term;
use crate::fizzbuzz_assert_simple;

/// A generator of the FizzBuzz sequence for the positions `1..=size`.
///
/// The sequence can be produced eagerly with [`FizzBuzz::to_vec`], or lazily with
/// [`FizzBuzz::terms`] (pull-based) and [`FizzBuzz::for_each_term`] (push-based). A reference to
/// the generator can also be iterated directly:
/// ```rust
/// # use fizzbuzz::FizzBuzz;
/// # use fizzbuzz::Term;
/// let fizzbuzz = FizzBuzz::new(5).unwrap();
///
/// let mut words = 0;
/// for term in &fizzbuzz {
///     if let Term::Label(_) = term {
///         words += 1;
///     }
/// }
/// assert_eq!(words, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FizzBuzz {
    size: Size,
}

impl FizzBuzz {
    /// Creates a generator for a sequence of the given size.
    ///
    /// Fails with [`SizeError::NotAnInteger`] if the value does not fit an `i64`, and with
    /// [`SizeError::NotPositive`] if it is smaller than 1.
    /// ```rust
    /// # use fizzbuzz::FizzBuzz;
    /// # use fizzbuzz::SizeError;
    /// assert!(FizzBuzz::new(15).is_ok());
    /// assert_eq!(FizzBuzz::new(0), Err(SizeError::NotPositive(0)));
    /// assert_eq!(
    ///     FizzBuzz::new(u64::MAX),
    ///     Err(SizeError::NotAnInteger(u64::MAX.to_string()))
    /// );
    /// ```
    ///
    /// Text is not a size; it has to be parsed into a [`Size`] first:
    /// ```compile_fail
    /// # use fizzbuzz::FizzBuzz;
    /// let _ = FizzBuzz::new("15");
    /// ```
    pub fn new<S>(size: S) -> Result<FizzBuzz, SizeError>
    where
        S: TryInto<Size>,
        SizeError: From<S::Error>,
    {
        let size = validate(size)?;
        debug!("Created FizzBuzz sequence of size {size}");

        Ok(FizzBuzz::with_size(size))
    }

    /// Creates a generator from an already validated size; this cannot fail.
    pub fn with_size(size: Size) -> FizzBuzz {
        FizzBuzz { size }
    }

    pub fn size(&self) -> i64 {
        self.size.get()
    }

    /// Replaces the size of the sequence.
    ///
    /// The value is validated in the same way as in [`FizzBuzz::new`]. If it is rejected, the
    /// current size is kept.
    pub fn set_size<S>(&mut self, size: S) -> Result<(), SizeError>
    where
        S: TryInto<Size>,
        SizeError: From<S::Error>,
    {
        let size = validate(size)?;
        debug!("Changed FizzBuzz size from {} to {size}", self.size);

        self.size = size;
        Ok(())
    }

    /// Produces the whole sequence at once.
    pub fn to_vec(&self) -> Vec<Term> {
        let terms: Vec<Term> = self.terms().collect();
        fizzbuzz_assert_simple!(i64::try_from(terms.len()).is_ok_and(|len| len == self.size()));

        terms
    }

    /// Returns an iterator which produces the terms one at a time, starting from position 1.
    ///
    /// Every call returns a new iterator; iterators do not share their position.
    pub fn terms(&self) -> Terms {
        Terms::new(self.size)
    }

    /// Hands every term, in order, to the consumer.
    pub fn for_each_term(&self, consumer: impl FnMut(Term)) {
        self.terms().for_each(consumer)
    }

    /// Hands every term, in order, to the consumer until it returns an error.
    ///
    /// The first error is returned and the remaining terms are not produced.
    pub fn try_for_each_term<E>(
        &self,
        mut consumer: impl FnMut(Term) -> Result<(), E>,
    ) -> Result<(), E> {
        for term in self.terms() {
            consumer(term)?;
        }

        Ok(())
    }
}

impl IntoIterator for &FizzBuzz {
    type Item = Term;
    type IntoIter = Terms;

    fn into_iter(self) -> Self::IntoIter {
        self.terms()
    }
}

fn validate<S>(size: S) -> Result<Size, SizeError>
where
    S: TryInto<Size>,
    SizeError: From<S::Error>,
{
    size.try_into().map_err(|error| {
        let error = SizeError::from(error);
        warn!("Rejected FizzBuzz size: {error}");
        error
    })
}

#[cfg(test)]
mod tests {
    use super::FizzBuzz;
    use crate::basic_types::Label;
    use crate::basic_types::Size;
    use crate::basic_types::SizeError;
    use crate::basic_types::SizeErrorKind;
    use crate::basic_types::Term;

    #[test]
    fn size_five_matches_known_sequence() {
        let fizzbuzz = FizzBuzz::new(5).unwrap();

        assert_eq!(
            fizzbuzz.to_vec(),
            vec![
                Term::Number(1),
                Term::Number(2),
                Term::Label(Label::Fizz),
                Term::Number(4),
                Term::Label(Label::Buzz),
            ]
        );
    }

    #[test]
    fn size_one_contains_only_one() {
        let fizzbuzz = FizzBuzz::new(1).unwrap();

        assert_eq!(fizzbuzz.to_vec(), vec![Term::Number(1)]);
    }

    #[test]
    fn fifteenth_term_is_fizz() {
        let terms = FizzBuzz::new(15).unwrap().to_vec();

        assert_eq!(terms[8], Term::Label(Label::Fizz));
        assert_eq!(terms[9], Term::Label(Label::Buzz));
        assert_eq!(terms[14], Term::Label(Label::Fizz));
        assert!(terms.iter().all(|term| *term != "FizzBuzz"));
    }

    #[test]
    fn construction_rejects_non_positive_sizes() {
        for size in [0, -1, -3, i64::MIN] {
            let error = FizzBuzz::new(size).unwrap_err();
            assert_eq!(error, SizeError::NotPositive(size));
            assert_eq!(error.kind(), SizeErrorKind::Argument);
        }
    }

    #[test]
    fn construction_rejects_integers_beyond_i64() {
        let error = FizzBuzz::new(u64::MAX).unwrap_err();
        assert_eq!(error.kind(), SizeErrorKind::Type);

        let error = FizzBuzz::new(i128::MIN).unwrap_err();
        assert_eq!(error.kind(), SizeErrorKind::Type);
    }

    #[test]
    fn parsed_text_goes_through_size() {
        let size: Size = "15".parse().unwrap();
        assert_eq!(FizzBuzz::new(size).unwrap().size(), 15);

        let error = "1.5".parse::<Size>().unwrap_err();
        assert_eq!(error.kind(), SizeErrorKind::Type);
    }

    #[test]
    fn construction_accepts_validated_sizes() {
        let fizzbuzz = FizzBuzz::new(Size::DEFAULT).unwrap();

        assert_eq!(fizzbuzz, FizzBuzz::with_size(Size::DEFAULT));
        assert_eq!(fizzbuzz.size(), 100);
    }

    #[test]
    fn rejected_size_keeps_previous_size() {
        let mut fizzbuzz = FizzBuzz::new(5).unwrap();

        assert_eq!(fizzbuzz.set_size(0), Err(SizeError::NotPositive(0)));
        assert_eq!(fizzbuzz.size(), 5);
        assert_eq!(fizzbuzz.to_vec().len(), 5);

        let error = fizzbuzz.set_size(usize::MAX).unwrap_err();
        assert_eq!(error.kind(), SizeErrorKind::Type);
        assert_eq!(fizzbuzz.size(), 5);
    }

    #[test]
    fn accepted_size_replaces_previous_size() {
        let mut fizzbuzz = FizzBuzz::new(5).unwrap();

        fizzbuzz.set_size(10_u32).unwrap();

        assert_eq!(fizzbuzz.size(), 10);
        assert_eq!(fizzbuzz.to_vec().len(), 10);
    }

    #[test]
    fn terms_restart_from_the_first_position() {
        let fizzbuzz = FizzBuzz::new(6).unwrap();

        let mut first = fizzbuzz.terms();
        let _ = first.next();
        let _ = first.next();

        let second: Vec<Term> = fizzbuzz.terms().collect();
        assert_eq!(second, fizzbuzz.to_vec());
        assert_eq!(first.next(), Some(Term::Label(Label::Fizz)));
    }

    #[test]
    fn terms_keep_the_size_of_their_creation() {
        let mut fizzbuzz = FizzBuzz::new(3).unwrap();
        let terms = fizzbuzz.terms();

        fizzbuzz.set_size(7).unwrap();

        assert_eq!(terms.count(), 3);
        assert_eq!(fizzbuzz.terms().count(), 7);
    }

    #[test]
    fn consumer_receives_every_term() {
        let fizzbuzz = FizzBuzz::new(10).unwrap();

        let mut received = Vec::new();
        fizzbuzz.for_each_term(|term| received.push(term));

        assert_eq!(received, fizzbuzz.to_vec());
    }

    #[test]
    fn failing_consumer_stops_the_sequence() {
        let fizzbuzz = FizzBuzz::new(10).unwrap();

        let mut received = Vec::new();
        let result = fizzbuzz.try_for_each_term(|term| {
            if term == "Buzz" {
                return Err(received.len());
            }
            received.push(term);
            Ok(())
        });

        assert_eq!(result, Err(4));
        assert_eq!(received.len(), 4);
    }
}

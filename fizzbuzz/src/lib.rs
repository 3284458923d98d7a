//! # FizzBuzz
//! A generator of the FizzBuzz sequence: for every position `i` in `1..=size` it produces either
//! the number `i` itself or a word.
//!
//! The words are chosen by testing divisibility in a fixed order: by 3 ("Fizz"), then by 5
//! ("Buzz"), then by 15 ("FizzBuzz"). The first test that succeeds decides the term. Because
//! every multiple of 15 is already a multiple of 3, the word "FizzBuzz" never appears in the
//! output:
//! ```rust
//! # use fizzbuzz::FizzBuzz;
//! # use fizzbuzz::Label;
//! # use fizzbuzz::Term;
//! let fizzbuzz = FizzBuzz::new(15).unwrap();
//! let terms = fizzbuzz.to_vec();
//!
//! assert_eq!(terms.len(), 15);
//! assert_eq!(terms[14], Term::Label(Label::Fizz));
//! ```
//!
//! # Producing the sequence
//! The sequence can be materialized at once with [`FizzBuzz::to_vec`], or produced lazily. Lazy
//! production comes in two flavours: a pull-based iterator returned by [`FizzBuzz::terms`], and a
//! push-based variant, [`FizzBuzz::for_each_term`], which hands every term to a callback:
//! ```rust
//! # use fizzbuzz::FizzBuzz;
//! # use fizzbuzz::Term;
//! let fizzbuzz = FizzBuzz::new(5).unwrap();
//!
//! // Pull the terms one by one.
//! let mut terms = fizzbuzz.terms();
//! assert_eq!(terms.next(), Some(Term::Number(1)));
//! assert_eq!(terms.next(), Some(Term::Number(2)));
//!
//! // Or let the generator push them.
//! let mut printed = Vec::new();
//! fizzbuzz.for_each_term(|term| printed.push(term.to_string()));
//! assert_eq!(printed, ["1", "2", "Fizz", "4", "Buzz"]);
//! ```
//!
//! # Validating the size
//! The size is validated whenever it is given, either to [`FizzBuzz::new`] or to
//! [`FizzBuzz::set_size`]. An integer which does not fit an `i64`, or text which is not an integer
//! literal when parsed into a [`Size`], results in a [`SizeError`] of kind
//! [`SizeErrorKind::Type`]; an integer smaller than 1 results in one of kind
//! [`SizeErrorKind::Argument`]. A rejected size never changes the generator.
pub(crate) mod basic_types;
pub(crate) mod fizzbuzz_asserts;
pub(crate) mod sequence;

pub mod asserts {
    pub use crate::fizzbuzz_asserts::*;
}

pub use crate::basic_types::Label;
pub use crate::basic_types::Size;
pub use crate::basic_types::SizeError;
pub use crate::basic_types::SizeErrorKind;
pub use crate::basic_types::Term;
pub use crate::sequence::FizzBuzz;
pub use crate::sequence::Terms;

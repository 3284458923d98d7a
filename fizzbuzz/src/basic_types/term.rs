use std::fmt::Display;

/// A single value of a FizzBuzz sequence: either the position itself or a [`Label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(
    variant_size_differences,
    reason = "a label is a single byte while a number is a full i64"
)]
pub enum Term {
    Number(i64),
    Label(Label),
}

/// The words which replace a position in a FizzBuzz sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Fizz,
    Buzz,
    FizzBuzz,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Fizz => "Fizz",
            Label::Buzz => "Buzz",
            Label::FizzBuzz => "FizzBuzz",
        }
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Term {
    /// Computes the term at the given (1-indexed) position.
    ///
    /// Divisibility is tested by 3, then by 5, then by 15, and the first match wins. Since every
    /// multiple of 15 is also a multiple of 3, [`Label::FizzBuzz`] is never produced.
    pub fn at(position: i64) -> Term {
        if position % 3 == 0 {
            Term::Label(Label::Fizz)
        } else if position % 5 == 0 {
            Term::Label(Label::Buzz)
        } else if position % 15 == 0 {
            Term::Label(Label::FizzBuzz)
        } else {
            Term::Number(position)
        }
    }

    pub fn as_number(self) -> Option<i64> {
        match self {
            Term::Number(number) => Some(number),
            Term::Label(_) => None,
        }
    }

    pub fn as_label(self) -> Option<Label> {
        match self {
            Term::Number(_) => None,
            Term::Label(label) => Some(label),
        }
    }
}

impl From<i64> for Term {
    fn from(number: i64) -> Self {
        Term::Number(number)
    }
}

impl From<Label> for Term {
    fn from(label: Label) -> Self {
        Term::Label(label)
    }
}

impl PartialEq<i64> for Term {
    fn eq(&self, other: &i64) -> bool {
        self.as_number() == Some(*other)
    }
}

impl PartialEq<&str> for Term {
    fn eq(&self, other: &&str) -> bool {
        self.as_label().is_some_and(|label| label.as_str() == *other)
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Number(number) => write!(f, "{number}"),
            Term::Label(label) => write!(f, "{label}"),
        }
    }
}

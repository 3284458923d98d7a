use std::fmt::Display;
use std::str::FromStr;

use super::SizeError;

/// The number of terms in a FizzBuzz sequence.
///
/// A [`Size`] is always at least 1. It can be created from any integer type, which only checks the
/// range, or parsed from text with [`str::parse`], which additionally rejects anything that is not
/// an integer literal. Text is not accepted by [`FizzBuzz::new`](crate::FizzBuzz::new) directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Size(i64);

impl Size {
    /// The smallest allowed size.
    pub const MIN: Size = Size(1);

    /// The size used when none is given on the command line.
    pub const DEFAULT: Size = Size(100);

    pub fn new(size: i64) -> Result<Size, SizeError> {
        if size < 1 {
            return Err(SizeError::NotPositive(size));
        }

        Ok(Size(size))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl Default for Size {
    fn default() -> Self {
        Size::DEFAULT
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Size> for i64 {
    fn from(size: Size) -> Self {
        size.0
    }
}

impl TryFrom<i64> for Size {
    type Error = SizeError;

    fn try_from(size: i64) -> Result<Self, Self::Error> {
        Size::new(size)
    }
}

macro_rules! size_from_lossless {
    ($($int:ty),+) => {
        $(
            impl TryFrom<$int> for Size {
                type Error = SizeError;

                fn try_from(size: $int) -> Result<Self, Self::Error> {
                    Size::new(i64::from(size))
                }
            }
        )+
    };
}

size_from_lossless!(i8, i16, i32, u8, u16, u32);

macro_rules! size_from_wide {
    ($($int:ty),+) => {
        $(
            impl TryFrom<$int> for Size {
                type Error = SizeError;

                fn try_from(size: $int) -> Result<Self, Self::Error> {
                    // Values outside of the `i64` range are not representable as a size.
                    let size = i64::try_from(size)
                        .map_err(|_| SizeError::NotAnInteger(size.to_string()))?;
                    Size::new(size)
                }
            }
        )+
    };
}

size_from_wide!(u64, usize, i128);

impl FromStr for Size {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let size = s
            .trim()
            .parse::<i64>()
            .map_err(|_| SizeError::NotAnInteger(s.to_owned()))?;

        Size::new(size)
    }
}

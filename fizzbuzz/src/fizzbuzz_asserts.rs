#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const FIZZBUZZ_ASSERT_LEVEL_DEFINITION: u8 = FIZZBUZZ_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const FIZZBUZZ_ASSERT_LEVEL_DEFINITION: u8 = FIZZBUZZ_ASSERT_MODERATE;

pub const FIZZBUZZ_ASSERT_SIMPLE: u8 = 1;
pub const FIZZBUZZ_ASSERT_MODERATE: u8 = 2;

#[macro_export]
#[doc(hidden)]
macro_rules! fizzbuzz_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::FIZZBUZZ_ASSERT_LEVEL_DEFINITION >= $crate::asserts::FIZZBUZZ_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! fizzbuzz_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::FIZZBUZZ_ASSERT_LEVEL_DEFINITION >= $crate::asserts::FIZZBUZZ_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

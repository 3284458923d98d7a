use fizzbuzz::Size;
use fizzbuzz::SizeError;
use fizzbuzz::SizeErrorKind;
use pyo3::exceptions::PyTypeError;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBool;
use pyo3::types::PyInt;

/// A size as given from Python, which can be any object.
///
/// Only `int` values which fit an `i64` are integers; `bool` is rejected even though it is a
/// subclass of `int`.
pub struct SizeArgument<'a, 'py>(pub &'a Bound<'py, PyAny>);

impl TryFrom<SizeArgument<'_, '_>> for Size {
    type Error = SizeError;

    fn try_from(argument: SizeArgument<'_, '_>) -> Result<Size, SizeError> {
        let value = argument.0;

        if value.is_instance_of::<PyBool>() || !value.is_instance_of::<PyInt>() {
            return Err(not_an_integer(value));
        }

        let size: i64 = value.extract().map_err(|_| not_an_integer(value))?;
        Size::new(size)
    }
}

fn not_an_integer(value: &Bound<'_, PyAny>) -> SizeError {
    let description = value
        .repr()
        .map_or_else(|_| "<unrepresentable>".to_owned(), |repr| repr.to_string());

    SizeError::NotAnInteger(description)
}

pub fn size_error_to_py(error: SizeError) -> PyErr {
    match error.kind() {
        SizeErrorKind::Type => PyTypeError::new_err(error.to_string()),
        SizeErrorKind::Argument => PyValueError::new_err(error.to_string()),
    }
}

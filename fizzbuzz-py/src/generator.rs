use pyo3::exceptions::PyOverflowError;
use pyo3::prelude::*;

use crate::size::SizeArgument;
use crate::size::size_error_to_py;
use crate::terms::TermIterator;
use crate::terms::term_to_py;

#[pyclass]
#[derive(Clone, Copy, Debug)]
pub struct FizzBuzz(fizzbuzz::FizzBuzz);

#[pymethods]
impl FizzBuzz {
    #[new]
    fn new(size: &Bound<'_, PyAny>) -> PyResult<FizzBuzz> {
        fizzbuzz::FizzBuzz::new(SizeArgument(size))
            .map(FizzBuzz)
            .map_err(size_error_to_py)
    }

    #[getter]
    fn size(&self) -> i64 {
        self.0.size()
    }

    /// Replace the size. A rejected value leaves the current size in place.
    #[setter]
    fn set_size(&mut self, size: &Bound<'_, PyAny>) -> PyResult<()> {
        self.0.set_size(SizeArgument(size)).map_err(size_error_to_py)
    }

    /// Get all terms of the sequence as a list of `int` and `str` values.
    fn to_list(&self, py: Python<'_>) -> PyResult<Vec<PyObject>> {
        self.0.terms().map(|term| term_to_py(py, term)).collect()
    }

    /// Call the callback with every term of the sequence, in order.
    ///
    /// An exception raised by the callback stops the iteration and is propagated.
    fn each<'py>(
        slf: Bound<'py, Self>,
        callback: &Bound<'py, PyAny>,
    ) -> PyResult<Bound<'py, Self>> {
        // Copy the generator so the callback is free to change the size while iterating.
        let generator = slf.borrow().0;
        let py = slf.py();

        generator.try_for_each_term(|term| {
            let _ = callback.call1((term_to_py(py, term)?,))?;
            Ok::<(), PyErr>(())
        })?;

        Ok(slf)
    }

    fn __iter__(&self) -> TermIterator {
        TermIterator(self.0.terms())
    }

    fn __len__(&self) -> PyResult<usize> {
        usize::try_from(self.0.size())
            .map_err(|_| PyOverflowError::new_err("size does not fit in a Python length"))
    }

    fn __repr__(&self) -> String {
        format!("FizzBuzz(size={})", self.0.size())
    }
}

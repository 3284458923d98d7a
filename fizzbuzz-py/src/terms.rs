use fizzbuzz::Term;
use fizzbuzz::Terms;
use pyo3::IntoPyObjectExt;
use pyo3::prelude::*;

/// A Python iterator over the terms of a sequence.
#[pyclass]
pub struct TermIterator(pub Terms);

#[pymethods]
impl TermIterator {
    fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    fn __next__(&mut self, py: Python<'_>) -> PyResult<Option<PyObject>> {
        self.0.next().map(|term| term_to_py(py, term)).transpose()
    }

    fn __length_hint__(&self) -> usize {
        self.0.size_hint().0
    }
}

/// Numbers become `int`, labels become `str`.
pub fn term_to_py(py: Python<'_>, term: Term) -> PyResult<PyObject> {
    match term {
        Term::Number(number) => number.into_py_any(py),
        Term::Label(label) => label.as_str().into_py_any(py),
    }
}

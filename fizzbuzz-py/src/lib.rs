mod generator;
mod size;
mod terms;

use fizzbuzz::Size;
use pyo3::prelude::*;

#[pymodule]
fn fizzbuzz_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<generator::FizzBuzz>()?;
    m.add_class::<terms::TermIterator>()?;
    m.add("DEFAULT_SIZE", Size::DEFAULT.get())?;

    Ok(())
}

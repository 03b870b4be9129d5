//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::MoveRecord;

/// Python wrapper for MoveRecord.
#[pyclass(name = "MoveRecord")]
#[derive(Clone, Debug)]
pub struct PyMoveRecord(pub MoveRecord);

#[pymethods]
impl PyMoveRecord {
    /// "player" or "computer".
    #[getter]
    fn side(&self) -> &'static str {
        self.0.side.as_str()
    }

    #[getter]
    fn step(&self) -> u32 {
        self.0.step
    }

    #[getter]
    fn position_after(&self) -> u32 {
        self.0.position_after
    }

    fn __repr__(&self) -> String {
        format!(
            "MoveRecord(side={}, step={}, position_after={})",
            self.0.side, self.0.step, self.0.position_after
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

mod size;
mod size_error;
mod term;

pub use size::Size;
pub use size_error::SizeError;
pub use size_error::SizeErrorKind;
pub use term::Label;
pub use term::Term;

mod fizzbuzz;
mod terms;

pub use fizzbuzz::FizzBuzz;
pub use terms::Terms;

//! Command-line support for the php2js binary.

pub mod args;
pub mod inputs;
pub mod reporter;

#[cfg(test)]
#[path = "../../tests/inputs_tests.rs"]
mod inputs_tests;
#[cfg(test)]
#[path = "../../tests/reporter_tests.rs"]
mod reporter_tests;

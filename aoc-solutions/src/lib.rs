//! Daily puzzle solutions with automatic registration
//!
//! Each day lives in its own module directory next to its `sample` (and,
//! locally, `input`) file. Solutions use the `AutoRegisterPuzzle` derive
//! macro, so linking this crate is enough to make them available to
//! `RegistryBuilder::register_all_plugins`.

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;

/// Default directory holding the `dayNN/{sample,input}` files
pub const INPUTS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src");

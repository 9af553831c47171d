//! Standalone demo modules. Each exposes exactly one `pub fn run()` that
//! prints a few illustrative lines and returns; none of them share state
//! with each other or with the dispatcher.

pub mod abstraction;
pub mod async_await;
pub mod boxing;
pub mod closures_fn;
pub mod closures_fnmut;
pub mod composition;
pub mod constructors;
pub mod encapsulation;
pub mod error_handling;
pub mod events;
pub mod function_values;
pub mod interfaces;
pub mod iterator_basics;
pub mod iterator_pipelines;
pub mod loops_vs_iterators;
pub mod ownership;
pub mod polymorphism;
pub mod predicates;
pub mod statics;
pub mod structs_impls;
pub mod trait_inheritance;

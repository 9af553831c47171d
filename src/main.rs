mod demos;
mod menu;

use std::io;

use menu::MenuRegistry;

/// Builds the full demo menu. Keys are stable for the life of the process;
/// order here is the order the menu renders in.
fn build_registry() -> MenuRegistry {
    let mut registry = MenuRegistry::new();
    registry.register("1", "Ownership: move vs copy", demos::ownership::run);
    registry.register("2", "Box and heap allocation", demos::boxing::run);
    registry.register("3", "Structs and impl blocks", demos::structs_impls::run);
    registry.register("4", "Supertraits and default methods", demos::trait_inheritance::run);
    registry.register("5", "Polymorphism: static vs dynamic dispatch", demos::polymorphism::run);
    registry.register("6", "Abstraction with traits", demos::abstraction::run);
    registry.register("7", "Implementing multiple traits", demos::interfaces::run);
    registry.register("8", "Encapsulation and module privacy", demos::encapsulation::run);
    registry.register("9", "Associated functions and statics", demos::statics::run);
    registry.register("10", "Constructor patterns", demos::constructors::run);
    registry.register("11", "Composition over inheritance", demos::composition::run);
    registry.register("12", "Function pointers and call lists", demos::function_values::run);
    registry.register("13", "Events: publisher and subscribers", demos::events::run);
    registry.register("14", "Closures that return values (Fn)", demos::closures_fn::run);
    registry.register("15", "Stateful closures (FnMut)", demos::closures_fnmut::run);
    registry.register("16", "Predicates: filter, retain, any, all", demos::predicates::run);
    registry.register("17", "Async tasks with tokio", demos::async_await::run);
    registry.register("18", "Error handling with Result", demos::error_handling::run);
    registry.register("19", "Iterator basics", demos::iterator_basics::run);
    registry.register("20", "Iterator pipelines and grouping", demos::iterator_pipelines::run);
    registry.register("21", "Loops vs iterator chains", demos::loops_vs_iterators::run);
    registry
}

fn main() -> io::Result<()> {
    let registry = build_registry();
    let stdin = io::stdin();
    menu::start(&registry, "0", stdin.lock(), io::stdout())
}

//! Box and heap allocation.
//!
//! A `Box<T>` moves a value onto the heap behind a pointer; `Box<dyn Any>`
//! erases the concrete type and `downcast` recovers it, checked at runtime.

use std::any::Any;

pub fn run() {
    println!("Box and heap allocation\n");

    // Stack value vs the same value boxed on the heap.
    let on_stack = 123;
    let on_heap = Box::new(123);
    println!("on_stack = {}, on_heap = {} (deref through the Box)", on_stack, *on_heap);

    // Type erasure: Box<dyn Any> forgets the concrete type.
    let erased: Box<dyn Any> = Box::new(42_i32);

    // Recovering the value is a checked runtime operation.
    match erased.downcast::<i32>() {
        Ok(n) => println!("downcast::<i32> -> {}", n),
        Err(_) => println!("downcast::<i32> failed"),
    }

    // Downcasting to the wrong type fails instead of misreading memory.
    let erased: Box<dyn Any> = Box::new("not a number");
    match erased.downcast::<i32>() {
        Ok(n) => println!("downcast::<i32> -> {}", n),
        Err(original) => {
            let s = original.downcast::<&str>().map(|b| *b).unwrap_or("?");
            println!("downcast::<i32> failed, value was &str {:?}", s);
        }
    }

    // Boxing also enables heterogeneous collections of trait objects.
    let mixed: Vec<Box<dyn std::fmt::Display>> = vec![
        Box::new(7),
        Box::new(2.5),
        Box::new("seven"),
    ];
    print!("heterogeneous vec ->");
    for item in &mixed {
        print!(" {}", item);
    }
    println!();
}

//! Value-returning closures (`Fn`). Closures capture their environment and
//! pass anywhere a matching `Fn` bound is asked for.

fn apply(describe: &str, value: i32, f: impl Fn(i32) -> i32) {
    println!("{:<12} {} -> {}", describe, value, f(value));
}

// Returning a closure: the factor is captured by move.
fn multiplier(factor: i32) -> impl Fn(i32) -> i32 {
    move |x| x * factor
}

pub fn run() {
    println!("Closures that return values (Fn)\n");

    let square = |x: i32| x * x;
    let add_tax = |price: i32| price + price / 5;

    apply("square", 7, square);
    apply("add_tax", 100, add_tax);

    // Capturing the environment by reference.
    let bonus = 10;
    apply("with capture", 5, |x| x + bonus);

    // A closure built at runtime from data.
    let triple = multiplier(3);
    apply("triple", 14, &triple);

    // Composition: feed one closure's output into another.
    let composed = move |x| square(triple(x));
    apply("square∘triple", 2, composed);
}

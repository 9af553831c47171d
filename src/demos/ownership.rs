//! Move vs copy semantics.
//!
//! `Copy` scalars duplicate on assignment; heap-owning values move, and
//! shared mutation goes through a reference instead of a second owner.

use colored::Colorize;

pub fn run() {
    println!("{}", "Ownership: move vs copy".bold().green());
    println!();

    // Copy types: assignment duplicates the value.
    let a = 10;
    let mut b = a;
    b += 10;
    println!("Copy types    -> a = {}, b = {}", a, b);

    // Owned types: assignment moves. `v1` would be unusable after this
    // line, so we clone when both bindings need their own data.
    let v1 = vec![1, 2];
    let mut v2 = v1.clone();
    v2[0] = 99;
    println!("Cloned vec    -> v1[0] = {}, v2[0] = {}", v1[0], v2[0]);

    // Shared mutation: one owner, mutation through a &mut borrow. This is
    // the closest analogue to two variables aliasing one heap object.
    let mut shared = vec![1, 2];
    bump_first(&mut shared);
    println!("Borrowed vec  -> shared[0] = {} (mutated through &mut)", shared[0]);

    // Moving into a function ends the caller's ownership.
    let s = String::from("hello");
    take_ownership(s);
    // `s` is gone here; printing it would not compile.
}

fn bump_first(values: &mut Vec<i32>) {
    values[0] = 99;
}

fn take_ownership(s: String) {
    println!("Function owns -> {:?} (dropped when the function returns)", s);
}

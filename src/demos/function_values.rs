//! Function pointers and call lists.
//!
//! A `fn` pointer is a first-class value with a concrete type; a vec of
//! them is a multicast call list that fires every target in order.

type Printer = fn(&str);

fn print_to_console(msg: &str) {
    println!("console: {}", msg);
}

fn print_to_log(msg: &str) {
    println!("log:     {} (pretend appended to a file)", msg);
}

fn broadcast(targets: &[Printer], msg: &str) {
    for target in targets {
        target(msg);
    }
}

pub fn run() {
    println!("Function pointers and call lists\n");

    // A single function pointer, reassignable like any other value.
    let mut print: Printer = print_to_console;
    print("hello through a fn pointer");

    print = print_to_log;
    print("same variable, different target");

    // Multicast: every registered target runs, in registration order.
    let mut targets: Vec<Printer> = vec![print_to_console];
    targets.push(print_to_log);
    println!();
    broadcast(&targets, "now printing to both");

    // Closures capturing nothing coerce to fn pointers too.
    let shout: Printer = |msg| println!("SHOUT:   {}", msg.to_uppercase());
    shout("capture-free closures coerce");
}

//! Polymorphism: static dispatch with generics vs dynamic dispatch with
//! trait objects. Same trait, two call mechanisms.

use colored::Colorize;

trait Shape {
    fn name(&self) -> &'static str;
    fn area(&self) -> f64;
}

struct Circle {
    radius: f64,
}

struct Rectangle {
    width: f64,
    height: f64,
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }
    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "rectangle"
    }
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

// Static dispatch: monomorphized per concrete type, resolved at compile time.
fn report<S: Shape>(shape: &S) {
    println!("static  -> {} area = {:.2}", shape.name(), shape.area());
}

pub fn run() {
    println!("{}", "Polymorphism: static vs dynamic dispatch".bold().green());
    println!();

    let circle = Circle { radius: 1.5 };
    let rect = Rectangle {
        width: 3.0,
        height: 2.0,
    };

    report(&circle);
    report(&rect);

    // Dynamic dispatch: one vtable call per shape, concrete types mixed
    // freely in a single collection.
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle { radius: 1.0 }),
        Box::new(Rectangle {
            width: 4.0,
            height: 0.5,
        }),
    ];
    let total: f64 = shapes.iter().map(|s| s.area()).sum();
    for shape in &shapes {
        println!("dynamic -> {} area = {:.2}", shape.name(), shape.area());
    }
    println!("total area = {:.2}", total);
}

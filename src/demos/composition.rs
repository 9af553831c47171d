//! Is-a vs has-a. The is-a relationship is a trait implementation; the
//! has-a relationship is a plain field. Rust pushes hard towards the
//! latter.

trait Vehicle {
    fn describe(&self) -> String;
}

// Has-a: the car owns an engine and delegates to it.
struct Engine {
    horsepower: u32,
}

impl Engine {
    fn start(&self) -> String {
        format!("engine started ({} hp)", self.horsepower)
    }
}

struct Car {
    model: String,
    engine: Engine,
}

impl Car {
    fn start(&self) -> String {
        // Delegation instead of inherited behaviour.
        format!("{}: {}", self.model, self.engine.start())
    }
}

// Is-a: Car is a Vehicle because it implements the trait.
impl Vehicle for Car {
    fn describe(&self) -> String {
        format!("{} is a vehicle with a {} hp engine", self.model, self.engine.horsepower)
    }
}

pub fn run() {
    println!("Composition over inheritance\n");

    let car = Car {
        model: "Nano".into(),
        engine: Engine { horsepower: 38 },
    };

    println!("has-a -> {}", car.start());
    println!("is-a  -> {}", car.describe());

    // The trait object view only exposes the is-a contract.
    let as_vehicle: &dyn Vehicle = &car;
    println!("dyn   -> {}", as_vehicle.describe());
}

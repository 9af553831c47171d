//! Structs and impl blocks: data plus behaviour without classes.

#[derive(Debug)]
struct Car {
    model: String,
    speed: u32,
}

impl Car {
    fn new(model: &str) -> Self {
        Self {
            model: model.to_string(),
            speed: 0,
        }
    }

    fn accelerate(&mut self, by: u32) {
        self.speed += by;
    }

    fn describe(&self) -> String {
        format!("{} travelling at {} km/h", self.model, self.speed)
    }
}

pub fn run() {
    println!("Structs and impl blocks\n");

    // Each instance owns its own field data.
    let mut swift = Car::new("Swift");
    let city = Car::new("City");

    swift.accelerate(40);
    swift.accelerate(20);

    println!("{}", swift.describe());
    println!("{}", city.describe());
    println!("debug view -> {:?}", swift);
}

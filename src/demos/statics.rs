//! Associated functions vs methods, and process-wide state.
//!
//! The instance counter lives in a `lazy_static` mutex: shared by every
//! `Sensor` ever created, while each sensor keeps its own id.

use std::sync::Mutex;

use lazy_static::lazy_static;

lazy_static! {
    static ref SENSORS_CREATED: Mutex<u32> = Mutex::new(0);
}

struct Sensor {
    id: u32,
}

impl Sensor {
    // Associated function: called on the type, no self.
    fn new() -> Self {
        let mut count = SENSORS_CREATED.lock().unwrap();
        *count += 1;
        Self { id: *count }
    }

    fn created_so_far() -> u32 {
        *SENSORS_CREATED.lock().unwrap()
    }

    // Method: called on an instance.
    fn read(&self) -> String {
        format!("sensor #{} reads OK", self.id)
    }
}

pub fn run() {
    println!("Associated functions and statics\n");

    let first = Sensor::new();
    let second = Sensor::new();
    let third = Sensor::new();

    println!("{}", first.read());
    println!("{}", second.read());
    println!("{}", third.read());
    println!("created so far (shared state): {}", Sensor::created_so_far());
    println!("ids (per-instance state): {}, {}, {}", first.id, second.id, third.id);
}

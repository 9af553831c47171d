//! Error handling with Result: a custom thiserror enum, `?` propagation,
//! matching specific variants, and guaranteed cleanup via Drop.

use colored::Colorize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
enum OrderError {
    #[error("malformed line {0:?}: expected `name:quantity`")]
    Malformed(String),
    #[error("quantity {given:?} is not a number")]
    BadQuantity { given: String },
    #[error("quantity for {name} must be between 1 and {max}, got {got}")]
    OutOfRange { name: String, got: u32, max: u32 },
}

const MAX_QUANTITY: u32 = 100;

/// Parses one `name:quantity` order line. Every failure path maps to a
/// specific variant; `?` keeps the happy path flat.
fn parse_order(line: &str) -> Result<(String, u32), OrderError> {
    let (name, qty) = line
        .split_once(':')
        .ok_or_else(|| OrderError::Malformed(line.to_string()))?;

    let quantity: u32 = qty
        .trim()
        .parse()
        .map_err(|_| OrderError::BadQuantity {
            given: qty.trim().to_string(),
        })?;

    if quantity == 0 || quantity > MAX_QUANTITY {
        return Err(OrderError::OutOfRange {
            name: name.trim().to_string(),
            got: quantity,
            max: MAX_QUANTITY,
        });
    }
    Ok((name.trim().to_string(), quantity))
}

// Drop runs on every exit path, the closest thing to a finally block.
struct Session(&'static str);

impl Drop for Session {
    fn drop(&mut self) {
        println!("cleanup: {} closed", self.0);
    }
}

pub fn run() {
    println!("{}", "Error handling with Result".bold().green());
    println!();

    let _session = Session("order intake");

    let lines = ["coffee: 3", "beans", "tea: many", "water: 0", "sugar: 12"];
    for line in lines {
        match parse_order(line) {
            Ok((name, qty)) => println!("ok   -> {} x{}", name, qty),
            // Specific variants first, then the rest uniformly.
            Err(err @ OrderError::OutOfRange { .. }) => {
                println!("rule -> {}", err)
            }
            Err(err) => println!("err  -> {}", err),
        }
    }
    // _session drops here and prints its cleanup line.
}

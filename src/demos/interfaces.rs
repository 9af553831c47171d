//! One type, several traits. Trait bounds compose with `+`, so a function
//! can demand exactly the capabilities it needs.

trait Printable {
    fn print(&self);
}

trait Summable {
    fn total(&self) -> i64;
}

struct Invoice {
    number: u32,
    lines: Vec<(String, i64)>,
}

impl Printable for Invoice {
    fn print(&self) {
        println!("invoice #{}", self.number);
        for (item, cents) in &self.lines {
            println!("  {:<10} {:>6}", item, cents);
        }
    }
}

impl Summable for Invoice {
    fn total(&self) -> i64 {
        self.lines.iter().map(|(_, cents)| cents).sum()
    }
}

// Requires both capabilities at once.
fn print_with_total<T: Printable + Summable>(doc: &T) {
    doc.print();
    println!("  {:<10} {:>6}", "total", doc.total());
}

pub fn run() {
    println!("Implementing multiple traits\n");

    let invoice = Invoice {
        number: 1042,
        lines: vec![
            ("coffee".into(), 450),
            ("beans".into(), 1200),
        ],
    };

    print_with_total(&invoice);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_all_lines() {
        let invoice = Invoice {
            number: 1,
            lines: vec![("a".into(), 1), ("b".into(), 2), ("c".into(), 39)],
        };
        assert_eq!(invoice.total(), 42);
    }
}

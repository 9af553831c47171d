//! Iterator basics over a record collection: filter, map, sort and
//! aggregate, the declarative replacement for hand-written loops.

use itertools::Itertools;

#[derive(Debug, Clone)]
struct Employee {
    name: String,
    age: u32,
    salary: u32,
}

fn sample_employees() -> Vec<Employee> {
    let raw = [
        ("Amit", 30, 60_000),
        ("Rohan", 24, 45_000),
        ("Sneha", 29, 75_000),
        ("John", 35, 55_000),
        ("Meera", 22, 40_000),
    ];
    raw.iter()
        .map(|&(name, age, salary)| Employee {
            name: name.to_string(),
            age,
            salary,
        })
        .collect()
}

pub fn run() {
    println!("Iterator basics\n");

    let employees = sample_employees();

    // Filter: lazily selects, nothing runs until the for loop drives it.
    println!("older than 25:");
    for e in employees.iter().filter(|e| e.age > 25) {
        println!("  - {}, age {}", e.name, e.age);
    }

    // Map: projection to just the field we need.
    let names: Vec<&str> = employees.iter().map(|e| e.name.as_str()).collect();
    println!("\nall names: {:?}", names);

    // Sorting without mutating the source collection.
    println!("\nby salary, highest first:");
    for e in employees.iter().sorted_by_key(|e| std::cmp::Reverse(e.salary)) {
        println!("  - {:<6} {}", e.name, e.salary);
    }

    // Aggregates.
    let total: u32 = employees.iter().map(|e| e.salary).sum();
    let average = total as f64 / employees.len() as f64;
    let youngest = employees.iter().min_by_key(|e| e.age);
    println!("\ntotal payroll: {}", total);
    println!("average salary: {:.0}", average);
    if let Some(e) = youngest {
        println!("youngest: {} ({})", e.name, e.age);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_and_aggregate_agree_with_the_data() {
        let employees = sample_employees();
        assert_eq!(employees.iter().filter(|e| e.age > 25).count(), 3);
        assert_eq!(employees.iter().map(|e| e.salary).sum::<u32>(), 275_000);
    }

    #[test]
    fn sorted_by_key_is_descending_on_reverse() {
        let employees = sample_employees();
        let salaries: Vec<u32> = employees
            .iter()
            .sorted_by_key(|e| std::cmp::Reverse(e.salary))
            .map(|e| e.salary)
            .collect();
        assert_eq!(salaries, vec![75_000, 60_000, 55_000, 45_000, 40_000]);
    }
}

//! Predicates: boolean closures driving filter, retain, any, all and
//! position. One signature, `Fn(&T) -> bool`, reused everywhere.

fn is_even(n: &i32) -> bool {
    n % 2 == 0
}

fn count_matching<T>(items: &[T], pred: impl Fn(&T) -> bool) -> usize {
    items.iter().filter(|&item| pred(item)).count()
}

pub fn run() {
    println!("Predicates: filter, retain, any, all\n");

    let numbers = vec![3, 8, 10, 15, 22, 27];
    println!("numbers: {:?}", numbers);

    // A named function works wherever a closure does.
    let evens: Vec<_> = numbers.iter().copied().filter(is_even).collect();
    println!("filter(is_even)      -> {:?}", evens);

    println!("any > 20             -> {}", numbers.iter().any(|&n| n > 20));
    println!("all > 0              -> {}", numbers.iter().all(|&n| n > 0));
    println!("position of first 1x -> {:?}", numbers.iter().position(|&n| (10..20).contains(&n)));

    // retain mutates in place with the same predicate shape.
    let mut names = vec!["Amit", "Jo", "Sneha", "Bo"];
    names.retain(|name| name.len() > 2);
    println!("retain(len > 2)      -> {:?}", names);

    println!("count_matching even  -> {}", count_matching(&numbers, is_even));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_with_named_function_predicate() {
        assert_eq!(count_matching(&[1, 2, 3, 4], is_even), 2);
    }

    #[test]
    fn counts_with_closure_predicate() {
        let words = ["a", "bb", "ccc"];
        assert_eq!(count_matching(&words, |w| w.len() >= 2), 2);
        assert_eq!(count_matching(&words, |_| false), 0);
    }
}

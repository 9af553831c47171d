//! Stateful closures (`FnMut`): side effects and mutable captures. Where a
//! value-returning closure computes, these accumulate.

fn repeat(times: usize, mut action: impl FnMut()) {
    for _ in 0..times {
        action();
    }
}

pub fn run() {
    println!("Stateful closures (FnMut)\n");

    // Pure side effect, no capture.
    repeat(2, || println!("tick"));

    // Mutable capture: the closure owns a counter that survives calls.
    let mut calls = 0;
    repeat(3, || {
        calls += 1;
        println!("call #{}", calls);
    });
    println!("counter after the loop: {}", calls);

    // for_each is the iterator-side home of side-effecting closures.
    let mut total = 0;
    [4, 8, 15, 16].iter().for_each(|n| {
        total += n;
        println!("running total: {}", total);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_calls_exactly_n_times() {
        let mut count = 0;
        repeat(5, || count += 1);
        assert_eq!(count, 5);
    }

    #[test]
    fn repeat_zero_never_calls() {
        let mut count = 0;
        repeat(0, || count += 1);
        assert_eq!(count, 0);
    }
}

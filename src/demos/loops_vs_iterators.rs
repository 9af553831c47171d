//! The same computation twice: an imperative loop and an iterator chain.
//! Both find the names of high scorers, sorted; only the shape differs.

fn sample_scores() -> Vec<(&'static str, u32)> {
    vec![
        ("Amit", 71),
        ("Rohan", 48),
        ("Sneha", 93),
        ("John", 55),
        ("Meera", 88),
    ]
}

fn high_scorers_loop(scores: &[(&'static str, u32)], cutoff: u32) -> Vec<&'static str> {
    let mut result = Vec::new();
    for &(name, score) in scores {
        if score >= cutoff {
            result.push(name);
        }
    }
    result.sort_unstable();
    result
}

fn high_scorers_chain(scores: &[(&'static str, u32)], cutoff: u32) -> Vec<&'static str> {
    let mut result: Vec<_> = scores
        .iter()
        .filter(|&&(_, score)| score >= cutoff)
        .map(|&(name, _)| name)
        .collect();
    result.sort_unstable();
    result
}

pub fn run() {
    println!("Loops vs iterator chains\n");

    let scores = sample_scores();
    let cutoff = 70;

    let by_loop = high_scorers_loop(&scores, cutoff);
    let by_chain = high_scorers_chain(&scores, cutoff);

    println!("imperative loop -> {:?}", by_loop);
    println!("iterator chain  -> {:?}", by_chain);
    println!("same answer: {}", by_loop == by_chain);

    // The chain also stays lazy until something drives it.
    let mut evaluated = 0;
    let lazy = scores.iter().map(|&(name, _)| {
        evaluated += 1;
        name
    });
    let first_two: Vec<_> = lazy.take(2).collect();
    println!("\nlazy: asked for 2, evaluated {} -> {:?}", evaluated, first_two);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_and_chain_agree() {
        let scores = sample_scores();
        for cutoff in [0, 50, 70, 100] {
            assert_eq!(
                high_scorers_loop(&scores, cutoff),
                high_scorers_chain(&scores, cutoff),
                "cutoff {}",
                cutoff
            );
        }
    }

    #[test]
    fn cutoff_above_everyone_yields_empty() {
        assert!(high_scorers_chain(&sample_scores(), 101).is_empty());
    }
}

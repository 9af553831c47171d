//! Longer iterator pipelines: grouping, flattening, folding and the
//! itertools combinators that round out the standard adapters.

use std::collections::HashMap;

use itertools::Itertools;

#[derive(Debug, Clone)]
struct Sale {
    region: &'static str,
    product: &'static str,
    amount: u32,
}

fn sample_sales() -> Vec<Sale> {
    vec![
        Sale { region: "north", product: "coffee", amount: 120 },
        Sale { region: "south", product: "tea", amount: 80 },
        Sale { region: "north", product: "tea", amount: 40 },
        Sale { region: "east", product: "coffee", amount: 200 },
        Sale { region: "south", product: "coffee", amount: 60 },
        Sale { region: "north", product: "coffee", amount: 90 },
    ]
}

/// Revenue per region, one pass.
fn revenue_by_region(sales: &[Sale]) -> HashMap<&'static str, u32> {
    sales.iter().fold(HashMap::new(), |mut acc, sale| {
        *acc.entry(sale.region).or_insert(0) += sale.amount;
        acc
    })
}

pub fn run() {
    println!("Iterator pipelines and grouping\n");

    let sales = sample_sales();

    // into_group_map: key -> all values for that key.
    let by_product = sales
        .iter()
        .map(|s| (s.product, s.amount))
        .into_group_map();
    for (product, amounts) in by_product.iter().sorted() {
        println!("{:<7} sales {:?} (total {})", product, amounts, amounts.iter().sum::<u32>());
    }

    // counts: how many sales per region.
    let per_region = sales.iter().map(|s| s.region).counts();
    println!("\nsales per region: {:?}", per_region);

    // fold into a map, then present it deterministically.
    let revenue = revenue_by_region(&sales);
    println!("\nrevenue by region:");
    for (region, total) in revenue.iter().sorted() {
        println!("  {:<6} {}", region, total);
    }

    // flat_map + join: flatten nested data into one display line.
    let teams = vec![vec!["ana", "bo"], vec!["cy"], vec!["dee", "ed"]];
    let roster = teams.iter().flat_map(|team| team.iter()).join(", ");
    println!("\nroster: {}", roster);

    // chunks: fixed-size batching straight off the slice.
    let amounts: Vec<u32> = sales.iter().map(|s| s.amount).collect();
    let batch_totals: Vec<u32> = amounts
        .chunks(2)
        .map(|batch| batch.iter().sum())
        .collect();
    println!("batched totals (pairs): {:?}", batch_totals);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revenue_sums_every_region() {
        let revenue = revenue_by_region(&sample_sales());
        assert_eq!(revenue["north"], 250);
        assert_eq!(revenue["south"], 140);
        assert_eq!(revenue["east"], 200);
        assert_eq!(revenue.len(), 3);
    }

    #[test]
    fn group_map_collects_all_amounts_per_product() {
        let by_product = sample_sales()
            .iter()
            .map(|s| (s.product, s.amount))
            .into_group_map();
        assert_eq!(by_product["coffee"], vec![120, 200, 60, 90]);
        assert_eq!(by_product["tea"], vec![80, 40]);
    }

    #[test]
    fn counts_matches_manual_tally() {
        let per_region = sample_sales().iter().map(|s| s.region).counts();
        assert_eq!(per_region["north"], 3);
        assert_eq!(per_region["south"], 2);
        assert_eq!(per_region["east"], 1);
    }
}

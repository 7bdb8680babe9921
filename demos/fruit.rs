use std::collections::HashMap;
use vose::AliasTable;

#[path = "logger.rs"]
mod logger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init();

    let fruit = AliasTable::from_pairs([("apple", 0.2), ("banana", 0.5), ("cherry", 0.3)])?;
    let mut rng = rand::rng();

    println!("A randomly drawn fruit is: {}", fruit.draw_one(&mut rng));
    println!("5 randomly drawn fruits: {:?}", fruit.draw_many(&mut rng, 5));

    let mut hist: HashMap<&str, u64> = HashMap::default();
    for f in fruit.draw_iter(&mut rng).take(10_000) {
        *hist.entry(*f).or_default() += 1;
    }

    let mut values: Vec<(&str, u64)> = hist.into_iter().collect();
    values.sort_by(|(_, ca), (_, cb)| cb.cmp(ca));
    for (name, count) in values {
        println!("{count: >5} {name}");
    }

    Ok(())
}

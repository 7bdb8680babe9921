use std::collections::BTreeMap;
use vose::AliasTable;

#[path = "logger.rs"]
mod logger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init();

    // Three events with weights 10, 30 and 60.
    let table = AliasTable::from_weights(&[10.0, 30.0, 60.0])?;
    let mut rng = rand::rng();

    println!("Single sample: {}", table.draw_one(&mut rng));
    println!("10 samples: {:?}", table.draw_many(&mut rng, 10));

    let mut hist: BTreeMap<usize, u64> = BTreeMap::new();
    for i in table.draw_many(&mut rng, 10_000) {
        *hist.entry(i).or_default() += 1;
    }
    // roughly {0: 1000, 1: 3000, 2: 6000}
    println!("Statistics from 10,000 samples: {hist:?}");

    Ok(())
}

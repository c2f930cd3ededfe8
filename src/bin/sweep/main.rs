use std::time::Instant;

use rayon::prelude::*;

use toyrc::{
    helpers::round_trip,
    models::Prob,
    symbols::{self, SAMPLE},
    Mode, Result,
};

fn main() -> Result<()> {
    let sample = symbols::parse(SAMPLE)?;
    let mut flipped = sample.clone();
    if let Some(last) = flipped.last_mut() {
        *last ^= 1;
    }

    let mut modes = Vec::new();
    for p in [4, 8, 12, 14, 15] {
        modes.push(Mode::Fixed(Prob::new(p)?));
    }
    modes.push(Mode::Adaptive);

    let tables: Vec<Vec<(&[u8], Mode)>> = vec![
        // fixed probabilities against adaptive
        modes.iter().map(|&mode| (sample.as_slice(), mode)).collect(),
        // adaptive on shorter prefixes
        [64, 48, 32, 16].iter().map(|&len| (&sample[..len], Mode::Adaptive)).collect(),
        // a single flipped symbol at the very end
        vec![(sample.as_slice(), Mode::Adaptive), (flipped.as_slice(), Mode::Adaptive)],
    ];

    let timer = Instant::now();
    for (i, table) in tables.iter().enumerate() {
        if i > 0 {
            println!("\n----\n");
        }
        let rows: Vec<_> = table
            .par_iter()
            .map(|&(bits, mode)| round_trip(bits, mode).map(|encoded| (bits.len(), mode, encoded)))
            .collect::<Result<_>>()?;

        for (len, mode, encoded) in rows {
            println!(
                "encoded (p = {}; len={:2}): «{}» ({} digits)",
                mode,
                len,
                String::from_utf8_lossy(&encoded.digits),
                encoded.digits.len()
            );
        }
    }
    println!("\n[sweep] took {:?}", timer.elapsed());

    Ok(())
}

use itertools::Itertools;
use math::prelude::*;
use rand::rngs::OsRng;
use sss_core::ShamirScheme;

const PRIME: &str = "340282366920938463463374607431768211297";
const SECRET: u32 = 1234;
const THRESHOLD: usize = 3;
const SHARE_COUNT: usize = 5;

/// Split a secret 3-of-5 over a fixed 128-bit prime and recover it from every
/// possible 3-share subset.
fn main() {
    let field: PrimeField = PRIME.parse().expect("valid prime literal");
    let scheme = ShamirScheme::new(THRESHOLD, SHARE_COUNT, field)
        .expect("valid threshold configuration");
    let secret = biguint!(SECRET);

    let shares = scheme
        .split_secret(&secret, &mut OsRng)
        .expect("split should succeed");

    println!("Prime: {}", scheme.field());
    println!("Secret: {secret}");
    println!("Shares:");
    for share in &shares {
        println!("  ({share})");
    }

    for subset in shares.iter().cloned().combinations(THRESHOLD) {
        let recovered = scheme
            .reconstruct_secret(&subset)
            .expect("recovery should succeed");
        let xs = subset.iter().map(|s| s.x().to_string()).join(", ");
        assert_eq!(recovered, secret, "subset x = {xs}");
        println!("Recovered from x = {{{xs}}}: {recovered}");
    }
}

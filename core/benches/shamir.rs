use criterion::{black_box, criterion_group, criterion_main, Criterion};
use math::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sss_core::ShamirScheme;

const CONFIGURATIONS: &[(usize, usize)] = &[(3, 5), (10, 20)];
const PRIME_BITS: &[u64] = &[128, 256];

fn bench_split_and_recover(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(0xbe7c);
    let mut group = c.benchmark_group("shamir");

    for &bits in PRIME_BITS {
        let modulus =
            generate_prime(bits, &mut rng).expect("prime generation succeeds");
        let field = PrimeField::new(modulus).expect("valid modulus");
        let secret = field.random_element(&mut rng);

        for &(threshold, share_count) in CONFIGURATIONS {
            let scheme = ShamirScheme::new(threshold, share_count, field.clone())
                .expect("valid threshold configuration");
            let label = format!("{threshold}-of-{share_count}/{bits}-bit");

            group.bench_function(format!("split/{label}"), |b| {
                b.iter(|| {
                    scheme
                        .split_secret(black_box(&secret), &mut rng)
                        .expect("split succeeds")
                })
            });

            let shares = scheme
                .split_secret(&secret, &mut rng)
                .expect("split succeeds");
            group.bench_function(format!("recover/{label}"), |b| {
                b.iter(|| {
                    let recovered = scheme
                        .reconstruct_secret(black_box(&shares))
                        .expect("recovery succeeds");
                    assert_eq!(recovered, secret);
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_split_and_recover);
criterion_main!(benches);

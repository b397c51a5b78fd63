#![no_main]

use cmplx_lib::math::ComplexValue;
use libfuzzer_sys::fuzz_target;
use rand::Rng as _;
use rand_pcg::Pcg64;
use rand_seeder::Seeder;

fn random_value(rng: &mut Pcg64) -> ComplexValue {
    // components up to 1e308 keep the magnitude below f64::MAX
    let scale = 10_f64.powi(rng.random_range(-300..=308));
    ComplexValue::new(
        rng.random_range(-1. ..=1.) * scale,
        rng.random_range(-1. ..=1.) * scale,
    )
    .unwrap()
}

// Checks that magnitude comparisons form a total preorder on values generated from the input seed.
fuzz_target!(|data: &[u8]| {
    let mut rng: Pcg64 = Seeder::from(data).make_rng();

    let mut values: Vec<_> = (0..16).map(|_| random_value(&mut rng)).collect();
    for a in &values {
        let magnitude = a.magnitude().unwrap();
        assert!(magnitude >= 0. && magnitude.is_finite(), "{a}");
        for b in &values {
            let holds = [a < b, a == b, b < a];
            assert_eq!(holds.iter().filter(|h| **h).count(), 1, "{a} vs {b}");
            assert_eq!(a <= b, b >= a);
            assert!((a + b).identical(&(b + a)));
        }
    }

    values.sort();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
});

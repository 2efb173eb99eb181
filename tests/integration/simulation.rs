//! Statistical checks on the Monte Carlo failure-time sampler.

use rand::rngs::StdRng;
use rand::SeedableRng;

use ordo::core::{find_optimal, SearchOptions, Simulator};

use crate::fixtures::{ab_table, table};

#[test]
fn survival_fraction_converges_to_success_probability() {
    // The fraction of trials that never fail must approach
    // P(L=0) = ∏(1-p) as the trial count grows.
    let tb = table(&[
        ("a", 2.0, 0.3, &[]),
        ("b", 1.0, 0.2, &[]),
        ("c", 4.0, 0.1, &[]),
    ]);
    let plan = find_optimal(&tb, &SearchOptions::default()).unwrap();

    let sim = Simulator::new(100_000);
    let mut rng = StdRng::seed_from_u64(2024);
    let samples = sim.run(&tb, &plan.ordering, &mut rng);

    let survival = sim.survival_fraction(&samples);
    let expected = tb.success_probability(); // 0.7 * 0.8 * 0.9 = 0.504
    assert!(
        (survival - expected).abs() < 0.005,
        "survival {} vs analytic {}",
        survival,
        expected
    );
}

#[test]
fn samples_respect_the_winning_timeline() {
    let tb = ab_table();
    let plan = find_optimal(&tb, &SearchOptions::default()).unwrap();
    let total: f64 = tb.total_duration();

    let sim = Simulator::new(20_000);
    let mut rng = StdRng::seed_from_u64(5);
    let samples = sim.run(&tb, &plan.ordering, &mut rng);

    assert!(!samples.is_empty());
    for &s in &samples {
        assert!((0.0..total).contains(&s));
    }
}

#[test]
fn more_trials_tighten_the_estimate() {
    let tb = ab_table();
    let plan = find_optimal(&tb, &SearchOptions::default()).unwrap();
    let analytic = tb.success_probability();

    let small = Simulator::new(500);
    let large = Simulator::new(200_000);

    // Average the small-sample error over several seeds so the
    // comparison is not hostage to one lucky draw.
    let mut small_err = 0.0;
    for seed in 0..10 {
        let samples = small.run(&tb, &plan.ordering, &mut StdRng::seed_from_u64(seed));
        small_err += (small.survival_fraction(&samples) - analytic).abs();
    }
    small_err /= 10.0;

    let samples = large.run(&tb, &plan.ordering, &mut StdRng::seed_from_u64(0));
    let large_err = (large.survival_fraction(&samples) - analytic).abs();

    assert!(
        large_err < small_err + 0.01,
        "large-sample error {} should not exceed small-sample error {}",
        large_err,
        small_err
    );
    assert!(large_err < 0.005);
}

#[test]
fn forced_chain_failures_accumulate_in_order() {
    // a runs first; failures inside a's window must be at least as
    // common as failures in b's window given a's higher hazard.
    let tb = table(&[("a", 2.0, 0.6, &[]), ("b", 2.0, 0.1, &["a"])]);
    let plan = find_optimal(&tb, &SearchOptions::default()).unwrap();

    let sim = Simulator::new(50_000);
    let mut rng = StdRng::seed_from_u64(31);
    let samples = sim.run(&tb, &plan.ordering, &mut rng);

    let in_a = samples.iter().filter(|&&s| s < 2.0).count();
    let in_b = samples.len() - in_a;
    assert!(in_a > in_b);

    // Window-level fractions match the analytic reach probabilities.
    let frac_a = in_a as f64 / 50_000.0;
    assert!((frac_a - 0.6).abs() < 0.01);
    let frac_b = in_b as f64 / 50_000.0;
    assert!((frac_b - 0.4 * 0.1).abs() < 0.01);
}

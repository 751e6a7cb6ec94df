pub mod field_tests;
pub mod group_tests;
pub mod scalar_tests;

use bls381_tests::constant_time::{describe, TestConfig, TimingTester};

/// Warm up, time both closures, and assert the comparison passes
pub fn assert_constant_time<A, B>(name: &str, config: &TestConfig, mut a: A, mut b: B)
where
    A: FnMut(),
    B: FnMut(),
{
    for _ in 0..config.num_warmup {
        a();
        b();
    }

    let tester = TimingTester::new(config.num_samples, config.num_iterations);
    let times_a = tester.measure(&mut a);
    let times_b = tester.measure(&mut b);

    let analysis = match tester.analyze_constant_time(
        &times_a,
        &times_b,
        config.combined_score_threshold,
    ) {
        Ok(result) => result,
        Err(e) => panic!("{name}: analysis error: {e}"),
    };

    println!("{}", describe(&analysis, name));

    assert!(
        analysis.is_constant_time,
        "{name} is not constant-time: combined_score={:.3} (threshold: {:.3})",
        analysis.combined_score,
        config.combined_score_threshold
    );
}

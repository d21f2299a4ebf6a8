use super::*;
use crate::reduction::compute_distance;
use pa_generate::ErrorModel;
use pa_types::{Cost, Seq};
use std::cmp::max;
use wfa_test::*;

fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Run `f` on the hardcoded pairs and on random pairs of length at most `max_n`.
fn for_inputs(max_n: usize, mut f: impl FnMut(Seq, Seq, &str)) {
    for (a, b) in test_sequences() {
        f(a, b, "hardcoded");
    }
    for ((a, b), (n, e, error_model, seed)) in gen_seqs() {
        if n > max_n {
            continue;
        }
        f(
            &a,
            &b,
            &format!("seed {seed:>10} n {n:>5} e {e:>.2} error_model {error_model:?}"),
        );
    }
}

#[test]
fn unit_cost() {
    init_log();
    test_aligner(WavefrontAligner::unit(), &AffinePenalties::unit());
}

#[test]
fn unit_cost_packed() {
    test_aligner(
        WavefrontAligner::unit().with_extend(ExtendStrategy::Packed),
        &AffinePenalties::unit(),
    );
}

#[test]
fn affine_cost() {
    init_log();
    test_aligner(WavefrontAligner::default(), &AffinePenalties::default());
}

#[test]
fn affine_cost_packed() {
    test_aligner(
        WavefrontAligner::default().with_extend(ExtendStrategy::Packed),
        &AffinePenalties::default(),
    );
}

#[test]
fn other_penalties() {
    for penalties in [
        AffinePenalties::new(3, 5, 1).unwrap(),
        AffinePenalties::new(1, 1, 1).unwrap(),
        AffinePenalties::new(10, 1, 1).unwrap(),
        AffinePenalties::linear(2, 1).unwrap(),
    ] {
        test_aligner_up_to(
            WavefrontAligner::new(penalties, ReductionConfig::none()),
            &penalties,
            300,
        );
    }
}

#[test]
fn identical_sequences_extend_to_the_end() {
    let aligner = WavefrontAligner::default();
    let mut instance = aligner.build(b"ACGTACGT", b"ACGTACGT");
    assert_eq!(instance.align_for_bounded_dist(None), Some(0));
    let offset = instance.wavefronts.m(0).unwrap().get(0);
    assert_eq!(offset, 8);
    assert_eq!(compute_distance(8, 8, offset, 0), 0);
}

#[test]
fn default_aligner_shorthand() {
    for (a, b) in test_sequences() {
        assert_eq!(
            wfa_affine(a, b),
            reference_cost(a, b, &AffinePenalties::default())
        );
    }
}

#[test]
fn empty_sequences() {
    let penalties = AffinePenalties::default();
    let aligner = WavefrontAligner::default();
    assert_eq!(aligner.cost(b"", b""), 0);
    assert_eq!(aligner.cost(b"", b"ACGTA"), penalties.gap_cost(5));
    assert_eq!(aligner.cost(b"ACGTA", b""), penalties.gap_cost(5));
    assert_eq!(WavefrontAligner::unit().cost(b"", b"ACGTA"), 5);
}

#[test]
fn bounded_dist() {
    let aligner = WavefrontAligner::default();
    for_inputs(200, |a, b, params| {
        let cost = aligner.cost(a, b);
        if cost > 0 {
            assert_eq!(
                aligner.cost_for_bounded_dist(a, b, cost - 1),
                None,
                "{params}"
            );
        }
        assert_eq!(
            aligner.cost_for_bounded_dist(a, b, cost),
            Some(cost),
            "{params}"
        );
    });
}

#[test]
fn reduction_is_an_upper_bound() {
    init_log();
    for penalties in [AffinePenalties::unit(), AffinePenalties::default()] {
        for reduction in [
            ReductionConfig::dynamic(10, 50),
            ReductionConfig::dynamic(3, 5),
            ReductionConfig::dynamic(0, 0),
        ] {
            let aligner = WavefrontAligner::new(penalties, reduction);
            for_inputs(300, |a, b, params| {
                let optimal = reference_cost(a, b, &penalties);
                let cost = aligner.cost(a, b);
                assert!(
                    cost >= optimal,
                    "{params}\n{reduction:?}: {cost} < {optimal}"
                );
            });
        }
    }
}

#[test]
fn reduction_with_loose_threshold_is_exact() {
    // No reachable diagonal is further than max(|a|, |b|) from the end, so only
    // unreachable diagonals can be dropped.
    let penalties = AffinePenalties::default();
    for_inputs(300, |a, b, params| {
        let threshold = max(a.len(), b.len()) as Fr;
        let aligner = WavefrontAligner::new(penalties, ReductionConfig::dynamic(0, threshold));
        assert_eq!(
            aligner.cost(a, b),
            reference_cost(a, b, &penalties),
            "{params}"
        );
    });
}

#[test]
fn reduction_narrows_the_band() {
    init_log();
    let (a, b) = pa_generate::generate_model(2000, 0.1, ErrorModel::Uniform, 31415);
    let exact = WavefrontAligner::default();
    let reduced = WavefrontAligner::new(
        AffinePenalties::default(),
        ReductionConfig::dynamic(10, 20),
    );

    let (exact_cost, exact_stats) = exact.cost_with_stats(&a, &b);
    let (reduced_cost, reduced_stats) = reduced.cost_with_stats(&a, &b);
    assert!(reduced_cost >= exact_cost);
    assert_eq!(exact_stats.reductions, 0);
    assert_eq!(exact_stats.pruned_diagonals, 0);
    assert!(reduced_stats.reductions > 0);
    assert!(reduced_stats.pruned_diagonals > 0);
    assert!(reduced_stats.extended_diagonals < exact_stats.extended_diagonals);
}

#[test]
fn stats_accumulate() {
    let aligner = WavefrontAligner::default();
    let (cost_1, stats_1) = aligner.cost_with_stats(b"ACGTACGT", b"ACGTTCGT");
    let (cost_2, stats_2) = aligner.cost_with_stats(b"GATTACA", b"GATACA");
    assert_eq!((cost_1, cost_2), (4, 8));
    assert_eq!(stats_1.score, 4);
    assert_eq!(stats_1.len_pattern, 8);

    let mut total = WavefrontStats::default();
    total += stats_1;
    total += stats_2;
    assert_eq!(total.score, 12 as Cost);
    assert_eq!(total.len_pattern, 15);
    assert_eq!(total.len_text, 14);
    assert_eq!(
        total.matched_chars,
        stats_1.matched_chars + stats_2.matched_chars
    );
}

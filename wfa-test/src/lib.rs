use bio::alignment::pairwise::Aligner as BioAligner;
use itertools::Itertools;
use rand::{seq::IteratorRandom, thread_rng, Rng};

use pa_generate::ErrorModel;
use pa_types::*;
use wfa_types::AffinePenalties;

pub fn test_sequences() -> Vec<(Seq<'static>, Seq<'static>)> {
    vec![
        (b"TTGGGTCAATCAGCCAGTTTTTA", b"TTTGAGTGGGTCATCACCGATTTTAT"),
        (b"ACTGACCAGT", b"CCGACAGGA"),
        (b"AGTTTTAT", b"ACCGATTTTTA"),
        (b"CTCTCTTCTCTCTCTA", b"CCTCTCTCTCTCCTCTC"),
        (b"AGTGGGTTGCCTTCATTCCG", b"AGTGGTGTCTTCAGGCCTTCATTCCG"),
        (b"GCACGTCGCCCCCCGCCCGCG", b"GCCCGCCCGCCCGCCCCCGCCCCC"),
        (b"GATTACA", b"GATCACA"),
        (b"", b"ACGT"),
        (b"ACGT", b""),
        (b"", b""),
        (b"CGCGTGTATCCGTCCACATCGAGCCGCCCTTGTTGCTTTTCGAGCGCTCATTTCCCGCAAGAGTGGCGTGCGGTCACTTTCGCGCAGCAATTAGAGTACTAACGGGTAGACGTGGCTTTCCTCCTCGTCCTGTCAACGCGCATAGGATGTCCTGCAGCAGGCCGCCGCGATTGCCTAAATCAAGGGGTTCCAATGGAGTTTCCATCTGATATCCGCGCTCCGGTTCTGAGTCTAAAGTGGAAATACTCCGAATGGGCCGGTATGAGGTTGGGTCAATCAGCCAGTTTTTA",
         b"CGCTGGGGATGCCTCCACCTTTCGAGTGCCTGTTGGTTCCGACGCTATCATAGTCCCCATGCAAGGAGATGGCTGCGCGTCCTATCGCGCGGCAAATAGAGTCTACGGGGGCGGCTGTCCTCCTCGTCCTGGTCAACGGCCATAGGATTTCCGCGATGGTCGCCCGGATGTGCCTAAACCAAGGCTCCGATGGAGCTGCCTCTGATATCCGCGCTGCCGGTTTCCTGACGTCTGAAAACGTTGGAAAATACCTCCGAATGGGCCCCGTTTGAGTGGGTCATCACCGATTTTAT"),
    ]
}

const FIXED: bool = false;

pub fn gen_seqs() -> impl Iterator<Item = ((Sequence, Sequence), (usize, f32, ErrorModel, u64))> {
    let rng = &mut thread_rng();
    let mut ns = vec![
        0usize, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 30, 40, 50,
        60, 70, 80, 90, 100, 110, 120, 130, 140, 150, 160, 170, 180, 190, 200, 250, 255, 256, 257,
        300, 500, 511, 512, 513,
    ];
    let mut es = vec![
        0.0f32, 0.01, 0.02, 0.03, 0.05, 0.10, 0.20, 0.30, 0.40, 0.50, 0.60, 0.70, 1.0,
    ];

    // A random quarter of the lengths and error rates per run; coverage builds up over CI runs.
    if !FIXED {
        let nl = ns.len();
        ns = ns.into_iter().choose_multiple(rng, nl / 4);
        let el = es.len();
        es = es.into_iter().choose_multiple(rng, el / 4);
    }

    let models = [
        ErrorModel::Uniform,
        ErrorModel::NoisyInsert,
        ErrorModel::NoisyDelete,
        ErrorModel::SymmetricRepeat,
    ];
    let seeds = if FIXED {
        [31415]
    } else {
        [rng.gen_range(0..u64::MAX)]
    };
    ns.into_iter()
        .cartesian_product(es)
        .cartesian_product(models)
        .cartesian_product(seeds)
        .map(|(((n, e), error_model), seed)| {
            let (a, b) = pa_generate::generate_model(n, e, error_model, seed);
            ((a, b), (n, e, error_model, seed))
        })
}

/// The optimal gap-affine score of aligning `a` to `b`.
///
/// Unit costs use `triple_accel::levenshtein_exp`; all other penalties run a
/// quadratic global alignment with `bio`.
pub fn reference_cost(a: Seq, b: Seq, penalties: &AffinePenalties) -> Cost {
    if *penalties == AffinePenalties::unit() {
        return triple_accel::levenshtein_exp(a, b) as Cost;
    }
    if a.is_empty() || b.is_empty() {
        return penalties.gap_cost(a.len() + b.len());
    }
    let mismatch = penalties.mismatch;
    let score = |x: u8, y: u8| if x == y { 0i32 } else { -mismatch };
    let mut aligner = BioAligner::with_capacity(
        a.len(),
        b.len(),
        -penalties.gap_opening,
        -penalties.gap_extension,
        score,
    );
    -aligner.global(a, b).score
}

/// Check the score of `aligner` on `a` and `b` against [`reference_cost`].
pub fn test_aligner_on_input(
    a: Seq,
    b: Seq,
    aligner: &mut impl Aligner,
    penalties: &AffinePenalties,
    params: &str,
) {
    // Set to true for local debugging.
    const D: bool = false;

    // useful in case of panics inside the alignment code.
    eprintln!("{params}");
    if D {
        eprintln!("a {}\nb {}", seq_to_string(a), seq_to_string(b));
    }
    let cost = reference_cost(a, b, penalties);
    let aligner_cost = aligner.align(a, b).0;
    assert_eq!(
        cost,
        aligner_cost,
        "\n{params}\nlet a = \"{}\".as_bytes();\nlet b = \"{}\".as_bytes();\nPenalties {penalties:?}\nAligner\n{aligner:?}",
        seq_to_string(a),
        seq_to_string(b),
    );
}

/// Test the given aligner on a large set of random sequences:
/// - length 0 to 513
/// - error rate 0.0 to 1.0
/// - error models: uniform, noisy insert, noisy delete, symmetric repeat (using `pa_generate`)
///
/// The cost reported by the aligner must match [`reference_cost`] for `penalties`.
pub fn test_aligner(aligner: impl Aligner, penalties: &AffinePenalties) {
    test_aligner_up_to(aligner, penalties, usize::MAX);
}

/// As test_aligner, but only test sequences with n <= max_n.
pub fn test_aligner_up_to(mut aligner: impl Aligner, penalties: &AffinePenalties, max_n: usize) {
    for (a, b) in test_sequences() {
        test_aligner_on_input(
            a,
            b,
            &mut aligner,
            penalties,
            &format!(
                "hardcoded test_sequences: a {:?} b {:?}",
                seq_to_string(a),
                seq_to_string(b)
            ),
        );
    }
    for ((a, b), (n, e, error_model, seed)) in gen_seqs() {
        if n > max_n {
            continue;
        }
        test_aligner_on_input(
            &a,
            &b,
            &mut aligner,
            penalties,
            &format!("seed {seed:>10} n {n:>5} e {e:>.2} error_model {error_model:?}"),
        );
    }
}

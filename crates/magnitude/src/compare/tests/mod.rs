
use crate::{
    compare::{CompareOp, Comparator, eq, gt, gte, lt, lte},
    error::MagnitudeError,
    operand::{Comparable, Operand, Shape},
};
use std::collections::VecDeque;

// ---- fixtures ----------------------------------------------------------

#[derive(Debug)]
struct Weighted(i64);

impl Comparable for Weighted {
    fn magnitude(&self) -> i64 {
        self.0
    }
}

struct ShapeTier {
    small: Operand,
    medium: Operand,
    large: Operand,
}

// One tier per shape, with magnitudes 0 / 1 / 2.
fn tiers() -> Vec<ShapeTier> {
    vec![
        ShapeTier {
            small: Operand::from(0),
            medium: Operand::from(1),
            large: Operand::from(2),
        },
        ShapeTier {
            small: Operand::from("0"),
            medium: Operand::from("1"),
            large: Operand::from("2"),
        },
        ShapeTier {
            small: Operand::from_list(Vec::<i64>::new()),
            medium: Operand::from(vec![10]),
            large: Operand::from(vec![10, 20]),
        },
        ShapeTier {
            small: Operand::from_map(Vec::<(i64, i64)>::new()),
            medium: Operand::from_map(vec![(0, 0)]),
            large: Operand::from_map(vec![(0, 0), (1, 1)]),
        },
        ShapeTier {
            small: Operand::from(VecDeque::<i64>::new()),
            medium: Operand::from(VecDeque::from([10])),
            large: Operand::from(VecDeque::from([10, 20])),
        },
        ShapeTier {
            small: Operand::custom(Weighted(0)),
            medium: Operand::custom(Weighted(1)),
            large: Operand::custom(Weighted(2)),
        },
    ]
}

// Pairs are (small, medium), (medium, large), (large, small), (medium, medium).
fn assert_tier_table(op: CompareOp, expected: [bool; 4]) {
    let comparator = Comparator::default();

    for tier in tiers() {
        let pairs = [
            (&tier.small, &tier.medium),
            (&tier.medium, &tier.large),
            (&tier.large, &tier.small),
            (&tier.medium, &tier.medium),
        ];

        for ((left, right), want) in pairs.iter().zip(expected) {
            let got = comparator
                .compare(op, left, right)
                .expect("tier operands should resolve");
            assert_eq!(got, want, "{left:?} {op} {right:?}");
        }
    }
}

// ---- operator tables ---------------------------------------------------

#[test]
fn gt_matches_tier_table() {
    assert_tier_table(CompareOp::Gt, [false, false, true, false]);
}

#[test]
fn gte_matches_tier_table() {
    assert_tier_table(CompareOp::Gte, [false, false, true, true]);
}

#[test]
fn lt_matches_tier_table() {
    assert_tier_table(CompareOp::Lt, [true, true, false, false]);
}

#[test]
fn lte_matches_tier_table() {
    assert_tier_table(CompareOp::Lte, [true, true, false, true]);
}

#[test]
fn eq_matches_tier_table() {
    assert_tier_table(CompareOp::Eq, [false, false, false, true]);
}

// ---- cross-shape comparisons -------------------------------------------

#[test]
fn containers_compare_by_count_across_shapes() {
    // a length-1 sequence equals an entry-1 mapping
    assert_eq!(eq(vec![0], Operand::from_map(vec![(0, 0)])), Ok(true));
    assert_eq!(
        eq(
            Operand::from(vec![0, 1]),
            Operand::from_map(vec![(0, 0), (1, 1)])
        ),
        Ok(true)
    );
}

#[test]
fn integer_zero_equals_parsed_text_zero() {
    assert_eq!(gt(0, "0"), Ok(false));
    assert_eq!(eq(0, "0"), Ok(true));
}

#[test]
fn one_is_less_or_equal_to_two() {
    assert_eq!(lte(1, 2), Ok(true));
}

#[test]
fn custom_values_compare_against_integers() {
    // capability accessor participates in resolution
    assert_eq!(gt(Operand::custom(Weighted(3)), 2), Ok(true));
    assert_eq!(eq(5, Operand::custom(Weighted(5))), Ok(true));
    assert_eq!(lt(Operand::custom(Weighted(-1)), 0), Ok(true));
}

#[test]
fn lenient_unparsable_texts_compare_equal() {
    // documented hazard of the lenient default
    assert_eq!(eq("not a number", "also not a number"), Ok(true));
    assert_eq!(eq("not a number", 0), Ok(true));
}

// ---- failure propagation -----------------------------------------------

#[test]
fn null_fails_the_comparison_from_either_side() {
    let expected = MagnitudeError::UnsupportedShape { shape: Shape::Null };

    assert_eq!(gt(Operand::Null, 1), Err(expected.clone()));
    assert_eq!(lte(1, Operand::Null), Err(expected.clone()));
    assert_eq!(eq(Operand::Null, Operand::Null), Err(expected));
}

#[test]
fn strict_comparator_surfaces_parse_failures() {
    let comparator = Comparator::strict();
    let left = Operand::from("abc");
    let right = Operand::from(0);

    assert_eq!(
        comparator.gt(&left, &right),
        Err(MagnitudeError::TextParseFailure {
            text: "abc".to_string()
        })
    );

    // parsable text still compares
    assert_eq!(comparator.eq(&Operand::from("12"), &Operand::from(12)), Ok(true));
}

// ---- entry-point surface -----------------------------------------------

#[test]
fn free_functions_accept_anything_convertible() {
    assert_eq!(gt(2, 1), Ok(true));
    assert_eq!(gte("2", 2), Ok(true));
    assert_eq!(lt(vec![1], vec![1, 2]), Ok(true));
    assert_eq!(lte(1u8, 1i64), Ok(true));
    assert_eq!(eq([0, 1], vec![5, 6]), Ok(true));
}

#[test]
fn operator_labels_are_stable() {
    assert_eq!(CompareOp::Eq.to_string(), "==");
    assert_eq!(CompareOp::Lt.to_string(), "<");
    assert_eq!(CompareOp::Lte.to_string(), "<=");
    assert_eq!(CompareOp::Gt.to_string(), ">");
    assert_eq!(CompareOp::Gte.to_string(), ">=");
}

use proptest::prelude::*;

use crate::domain::calls::{Call, CallType};
use crate::domain::scoring::{call_adjustment, compute_adjusted_points, total_points, RoundPoints};
use crate::domain::teams::TeamId;
use crate::domain::test_gens;
use crate::domain::test_prelude;

#[test]
fn no_calls_leaves_points_unchanged() {
    assert_eq!(
        compute_adjusted_points(60, 40, &[]),
        RoundPoints::new(60, 40)
    );
}

#[test]
fn successful_tichu_adds_hundred() {
    let calls = [Call::tichu(TeamId::A, true)];
    assert_eq!(
        compute_adjusted_points(100, 0, &calls),
        RoundPoints::new(200, 0)
    );
}

#[test]
fn one_two_ignores_outcome_field() {
    let calls = [Call::one_two(TeamId::B)];
    assert_eq!(
        compute_adjusted_points(50, 50, &calls),
        RoundPoints::new(50, 250)
    );

    // a stray outcome on a 1-2 does not change anything
    let calls = [Call::new(CallType::OneTwo, TeamId::B, Some(false))];
    assert_eq!(
        compute_adjusted_points(50, 50, &calls),
        RoundPoints::new(50, 250)
    );
}

#[test]
fn failed_grand_tichu_costs_two_hundred() {
    let calls = [Call::grand_tichu(TeamId::B, false)];
    assert_eq!(
        compute_adjusted_points(75, 25, &calls),
        RoundPoints::new(75, -175)
    );
}

#[test]
fn pending_call_contributes_nothing() {
    let calls = [Call::pending(CallType::Tichu, TeamId::A)];
    assert_eq!(call_adjustment(&calls[0]), 0);
    assert_eq!(
        compute_adjusted_points(30, 70, &calls),
        RoundPoints::new(30, 70)
    );
}

#[test]
fn calls_stack_across_teams() {
    // A goes out first with a successful tichu, B's grand tichu fails.
    let calls = [
        Call::tichu(TeamId::A, true),
        Call::grand_tichu(TeamId::B, false),
    ];
    assert_eq!(
        compute_adjusted_points(45, 55, &calls),
        RoundPoints::new(145, -145)
    );
}

#[test]
fn one_two_with_successful_tichu() {
    let calls = [Call::tichu(TeamId::A, true), Call::one_two(TeamId::A)];
    assert_eq!(
        compute_adjusted_points(0, 0, &calls),
        RoundPoints::new(300, 0)
    );
}

#[test]
fn extreme_raw_values_saturate() {
    let calls = [Call::grand_tichu(TeamId::A, true), Call::tichu(TeamId::B, false)];
    assert_eq!(
        compute_adjusted_points(i32::MAX, i32::MIN, &calls),
        RoundPoints::new(i32::MAX, i32::MIN)
    );
    assert_eq!(
        total_points([RoundPoints::new(i32::MAX, 0), RoundPoints::new(10, -10)]),
        RoundPoints::new(i32::MAX, -10)
    );
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Raw points summing to 100 with no calls pass through untouched.
    #[test]
    fn prop_balanced_without_calls_is_identity(a in test_gens::raw_points()) {
        let b = 100 - a;
        prop_assert_eq!(compute_adjusted_points(a, b, &[]), RoundPoints::new(a, b));
    }

    /// A 1-2 adds exactly 200 to its team whatever else was declared.
    #[test]
    fn prop_one_two_adds_exactly_200(
        a in test_gens::raw_points(),
        b in test_gens::raw_points(),
        team in test_gens::team_id(),
        others in test_gens::bid_calls(),
    ) {
        let without = compute_adjusted_points(a, b, &others);
        let mut with = others.clone();
        with.push(Call::one_two(team));
        let with = compute_adjusted_points(a, b, &with);

        prop_assert_eq!(with.get(team) - without.get(team), 200);
        prop_assert_eq!(with.get(team.opponent()), without.get(team.opponent()));
    }

    /// A resolved bid moves its team by exactly +/- its bonus.
    #[test]
    fn prop_bid_outcome_is_symmetric(
        a in test_gens::raw_points(),
        b in test_gens::raw_points(),
        team in test_gens::team_id(),
        call_type in test_gens::bid_type(),
        successful in any::<bool>(),
    ) {
        let base = RoundPoints::new(a, b);
        let adjusted = compute_adjusted_points(a, b, &[Call::new(call_type, team, Some(successful))]);
        let expected = if successful { call_type.bonus() } else { -call_type.bonus() };

        prop_assert_eq!(adjusted.delta_from(base).get(team), expected);
        prop_assert_eq!(adjusted.delta_from(base).get(team.opponent()), 0);
    }
}

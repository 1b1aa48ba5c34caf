use super::common::*;
use crate::scoring::{ScoreFactor, ScoreTier};

#[test]
fn strong_listing_reaches_the_cap() {
    let engine = engine();
    let property = listing("perfect", 25_000_000, 160, Some(4), "Luanda", 7);

    let breakdown = engine.score(&property);

    assert_eq!(breakdown.total, 100);
    assert_eq!(breakdown.tier, ScoreTier::Excellent);

    let points_for = |factor: ScoreFactor| {
        breakdown
            .components
            .iter()
            .find(|component| component.factor == factor)
            .map(|component| component.points)
    };
    assert_eq!(points_for(ScoreFactor::Price), Some(25));
    assert_eq!(points_for(ScoreFactor::Area), Some(20));
    assert_eq!(points_for(ScoreFactor::Bedrooms), Some(15));
    assert_eq!(points_for(ScoreFactor::Location), Some(20));
    assert_eq!(points_for(ScoreFactor::Features), Some(20));
}

#[test]
fn price_tiers_reward_cheaper_listings() {
    let engine = engine();
    let score_at = |price: u64| engine.score(&listing("p", price, 90, None, "Huambo", 0)).total;

    assert_eq!(score_at(29_999_999) - score_at(30_000_000), 5);
    assert_eq!(score_at(59_999_999) - score_at(60_000_000), 5);
    assert_eq!(score_at(99_999_999) - score_at(100_000_000), 5);
}

#[test]
fn area_tiers_never_penalize_more_space() {
    let engine = engine();
    let score_at = |area: u32| engine.score(&listing("a", 50_000_000, area, None, "Huambo", 0)).total;

    assert!(score_at(151) >= score_at(150));
    assert!(score_at(101) >= score_at(100));
    assert!(score_at(81) >= score_at(80));
    assert_eq!(score_at(151) - score_at(80), 15);
}

#[test]
fn missing_bedrooms_contribute_nothing() {
    let engine = engine();
    let without = engine.score(&listing("w", 50_000_000, 90, None, "Huambo", 0));
    let with_one = engine.score(&listing("o", 50_000_000, 90, Some(1), "Huambo", 0));

    // A single bedroom still earns the floor points; absence earns none.
    assert_eq!(with_one.total - without.total, 5);
    assert!(without
        .components
        .iter()
        .all(|component| component.factor != ScoreFactor::Bedrooms));
}

#[test]
fn bedroom_tiers_scale_with_count() {
    let engine = engine();
    let score_at =
        |bedrooms: u8| engine.score(&listing("b", 50_000_000, 90, Some(bedrooms), "Huambo", 0)).total;

    assert_eq!(score_at(5), score_at(4));
    assert_eq!(score_at(4) - score_at(3), 3);
    assert_eq!(score_at(3) - score_at(2), 4);
    assert_eq!(score_at(2) - score_at(1), 3);
    assert_eq!(score_at(1), score_at(0));
}

#[test]
fn location_tiers_follow_the_configured_markets() {
    let engine = engine();
    let score_in = |city: &str| engine.score(&listing("c", 50_000_000, 90, None, city, 0)).total;

    assert_eq!(score_in("Luanda") - score_in("Benguela"), 5);
    assert_eq!(score_in("Benguela") - score_in("Namibe"), 5);
}

#[test]
fn feature_points_cap_at_twenty() {
    let engine = engine();
    let score_with = |count: usize| engine.score(&listing("f", 50_000_000, 90, None, "Huambo", count)).total;

    assert_eq!(score_with(2) - score_with(0), 6);
    assert_eq!(score_with(7), score_with(20));
    assert_eq!(score_with(7) - score_with(0), 20);
}

#[test]
fn totals_stay_within_bounds() {
    let engine = engine();
    for price in [1, 45_000_000, 250_000_000] {
        for area in [40, 120, 400] {
            for bedrooms in [None, Some(0), Some(6)] {
                for features in [0, 5, 30] {
                    let total = engine
                        .score(&listing("grid", price, area, bedrooms, "Luanda", features))
                        .total;
                    assert!(total <= 100);
                }
            }
        }
    }
}

#[test]
fn tier_bands_split_at_sixty_and_eighty() {
    assert_eq!(ScoreTier::for_total(80), ScoreTier::Excellent);
    assert_eq!(ScoreTier::for_total(79), ScoreTier::Good);
    assert_eq!(ScoreTier::for_total(60), ScoreTier::Good);
    assert_eq!(ScoreTier::for_total(59), ScoreTier::Poor);
    assert_eq!(ScoreTier::for_total(0), ScoreTier::Poor);
}

//! Score, streak, and evolution state machine.
//!
//! The reducer is pure: it takes a profile by value and returns the next
//! one. The controller holds the only copy and replaces it wholesale.

use crate::model::{EvolutionTier, Outcome, Profile};

/// Points at which a profile reaches [`EvolutionTier::T2`].
pub const TIER_2_POINTS: u32 = 20;
/// Points at which a profile reaches [`EvolutionTier::T3`].
pub const TIER_3_POINTS: u32 = 40;
/// A correct answer made while the streak is at least this long scores double.
pub const BONUS_STREAK: u32 = 3;

/// Evolution tier for a point total.
pub fn tier_of(points: u32) -> EvolutionTier {
    if points < TIER_2_POINTS {
        EvolutionTier::T1
    } else if points < TIER_3_POINTS {
        EvolutionTier::T2
    } else {
        EvolutionTier::T3
    }
}

/// Points awarded for a correct answer given the streak before it.
pub fn points_for_correct(streak: u32) -> u32 {
    if streak >= BONUS_STREAK {
        2
    } else {
        1
    }
}

/// Apply an outcome to a profile.
pub fn apply(profile: Profile, outcome: Outcome) -> Profile {
    match outcome {
        Outcome::Correct => Profile::new(
            profile
                .points()
                .saturating_add(points_for_correct(profile.streak())),
            profile.streak().saturating_add(1),
        ),
        Outcome::Incorrect => Profile::new(profile.points(), 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(tier_of(0), EvolutionTier::T1);
        assert_eq!(tier_of(19), EvolutionTier::T1);
        assert_eq!(tier_of(20), EvolutionTier::T2);
        assert_eq!(tier_of(39), EvolutionTier::T2);
        assert_eq!(tier_of(40), EvolutionTier::T3);
        assert_eq!(tier_of(u32::MAX), EvolutionTier::T3);
    }

    #[test]
    fn tier_is_monotone() {
        let mut prev = tier_of(0);
        for points in 1..=100 {
            let tier = tier_of(points);
            assert!(tier >= prev, "tier dropped at {points}");
            prev = tier;
        }
    }

    #[test]
    fn streak_bonus_after_three() {
        let mut profile = Profile::default();
        for _ in 0..3 {
            profile = apply(profile, Outcome::Correct);
        }
        assert_eq!(profile.points(), 3);
        assert_eq!(profile.streak(), 3);

        profile = apply(profile, Outcome::Correct);
        assert_eq!(profile.points(), 5);
        assert_eq!(profile.streak(), 4);

        profile = apply(profile, Outcome::Correct);
        assert_eq!(profile.points(), 7);
        assert_eq!(profile.streak(), 5);
    }

    #[test]
    fn incorrect_resets_streak_and_keeps_points() {
        for (points, streak) in [(0, 0), (7, 2), (18, 9), (55, 30)] {
            let next = apply(Profile::new(points, streak), Outcome::Incorrect);
            assert_eq!(next.points(), points);
            assert_eq!(next.streak(), 0);
            assert_eq!(next.evolution_tier(), tier_of(points));
        }
    }

    #[test]
    fn correct_answer_can_cross_tier() {
        let profile = apply(Profile::new(19, 0), Outcome::Correct);
        assert_eq!(profile.points(), 20);
        assert_eq!(profile.evolution_tier(), EvolutionTier::T2);

        let profile = apply(Profile::new(38, 5), Outcome::Correct);
        assert_eq!(profile.points(), 40);
        assert_eq!(profile.evolution_tier(), EvolutionTier::T3);
    }

    #[test]
    fn points_saturate() {
        let profile = apply(Profile::new(u32::MAX, 10), Outcome::Correct);
        assert_eq!(profile.points(), u32::MAX);
        assert_eq!(profile.streak(), 11);
    }
}

//! Ordering of evaluated candidates

use std::cmp::Ordering;

use crate::model::SmartMatch;

/// Best-fit first: carriable before not, then no height violation before a
/// violation, then larger margin first. The sort is stable, so remaining ties
/// keep evaluation order. Nothing is dropped.
pub fn rank_matches(mut matches: Vec<SmartMatch>) -> Vec<SmartMatch> {
    matches.sort_by(compare_matches);
    matches
}

pub fn compare_matches(a: &SmartMatch, b: &SmartMatch) -> Ordering {
    b.can_carry
        .cmp(&a.can_carry)
        .then_with(|| a.height_violation.cmp(&b.height_violation))
        .then_with(|| b.margin.total_cmp(&a.margin))
}

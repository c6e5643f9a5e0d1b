//! Difficulty tiers

mod assigner;

pub use assigner::{Tier, TierAssigner, TierAssignment, TierError, quantile_sizes};

/// Human-readable name for a tier
///
/// Three-tier runs read Easy / Medium / Hard; any other count is numbered.
#[must_use]
pub fn tier_label(tier: Tier, tier_count: usize) -> String {
    match (tier_count, tier.value()) {
        (3, 1) => "Easy".to_string(),
        (3, 2) => "Medium".to_string(),
        (3, 3) => "Hard".to_string(),
        (_, n) => format!("Tier {n}"),
    }
}

use bouquet_designs::Design;

use crate::bouquet::{Arrangement, StemCount};
use crate::supply::Availability;

/// Select stems for `design` from `supply` without touching it.
///
/// Requirements are walked in design order. Each takes as many stems as it
/// can, bounded by its cap and by the room the remaining requirements need
/// (one stem each). A requirement with nothing on hand vetoes the design.
/// Returns `None` unless the selection hits the design total exactly.
///
/// Requirements are duplicate-free, so every stem is read once and the
/// selection never depends on its own tentative takes.
pub fn try_extract(supply: &impl Availability, design: &Design) -> Option<Arrangement> {
    let requirements = design.requirements();
    let mut remaining = design.total();
    let mut remaining_requirements = requirements.len() as u32;
    let mut taken = Vec::with_capacity(requirements.len());

    for requirement in requirements {
        let available = supply.available(&requirement.stem);
        if available == 0 {
            return None;
        }
        remaining_requirements -= 1;
        let room = remaining.saturating_sub(remaining_requirements);
        let take = available.min(requirement.max_count).min(room);

        taken.push(StemCount {
            stem: requirement.stem,
            count: take,
        });
        remaining -= take;
    }

    (remaining == 0).then(|| Arrangement::new(taken))
}

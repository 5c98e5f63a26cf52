//! Turn order for pending actions

use std::cmp::Ordering;

use crate::types::Action;

/// Compare two actions by priority, then speed (both descending)
///
/// `Equal` means a genuine tie that only the RNG may break.
pub fn compare_actions(a: &Action, b: &Action) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| b.speed.cmp(&a.speed))
}

/// Order actions for execution
///
/// Higher priority goes first, then higher speed. Actions tied on both are
/// shuffled with draws from `rng` (values in `[0, 1)`); submission order
/// never decides a tie. The RNG is only consulted when a tie exists, so a
/// single action or a tie-free list never draws.
pub fn determine_action_order<R>(mut actions: Vec<Action>, rng: &mut R) -> Vec<Action>
where
    R: FnMut() -> f64 + ?Sized,
{
    if actions.len() < 2 {
        return actions;
    }

    actions.sort_by(compare_actions);

    for tied in actions.chunk_by_mut(|a, b| compare_actions(a, b) == Ordering::Equal) {
        if tied.len() > 1 {
            tracing::trace!(
                priority = tied[0].priority,
                speed = tied[0].speed,
                count = tied.len(),
                "Breaking speed tie"
            );
            shuffle(tied, rng);
        }
    }

    actions
}

// Fisher-Yates over a tied run
fn shuffle<R>(tied: &mut [Action], rng: &mut R)
where
    R: FnMut() -> f64 + ?Sized,
{
    for i in (1..tied.len()).rev() {
        let j = draw_index(rng(), i + 1);
        tied.swap(i, j);
    }
}

fn draw_index(draw: f64, len: usize) -> usize {
    let scaled = (draw.clamp(0.0, 1.0) * len as f64) as usize;
    scaled.min(len - 1)
}

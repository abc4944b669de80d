//! Stacking helpers used by the desktop reducer.

use crate::model::DesktopState;

/// Returns the z-index for a window being raised right now: one above the highest index in the
/// live collection, or the configured base for the first window.
///
/// The maximum is read when the new index is committed, never from an earlier snapshot. If the
/// counter is exhausted the stack is compacted first so the result still tops every window.
pub fn next_z_index(state: &mut DesktopState) -> u32 {
    let base = state.config.base_z_index;
    match state.max_z_index() {
        None => base,
        Some(u32::MAX) => {
            compact_window_stack(state);
            state.max_z_index().map_or(base, |max| max.saturating_add(1))
        }
        Some(max) => max + 1,
    }
}

/// Raises a window to the top of the stack and un-minimizes it.
///
/// Returns `false` when no window has `window_id`.
pub fn raise_window(state: &mut DesktopState, window_id: &str) -> bool {
    let Some(index) = state
        .windows
        .iter()
        .position(|w| w.id.as_str() == window_id)
    else {
        return false;
    };

    let z_index = next_z_index(state);
    if let Some(window) = state.windows.get_mut(index) {
        window.z_index = z_index;
        window.minimized = false;
    }
    true
}

/// Renumbers z-indexes to consecutive ranks starting at the configured base, preserving the
/// relative stacking order.
pub fn compact_window_stack(state: &mut DesktopState) {
    let mut order: Vec<usize> = (0..state.windows.len()).collect();
    order.sort_by_key(|&index| state.windows.get(index).map(|w| w.z_index));

    let base = state.config.base_z_index;
    for (rank, index) in order.into_iter().enumerate() {
        if let Some(window) = state.windows.get_mut(index) {
            window.z_index = base.saturating_add(rank as u32);
        }
    }
}

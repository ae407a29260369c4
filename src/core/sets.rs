use bevy::prelude::*;

/// Per-frame ordering: input is sampled once, then all state is advanced,
/// then transforms and effects are written for the renderer.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TickSet {
    Input,
    Simulate,
    Sync,
}

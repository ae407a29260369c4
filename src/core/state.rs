use bevy::prelude::States;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub(crate) enum GameState {
    /// Scene is built and the overlay is still covering it
    #[default]
    Loading,
    Exploring,
}

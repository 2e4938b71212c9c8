//! Which bodies the user is looking at.

use bevy::prelude::*;

use crate::orbit::CelestialBodyId;

/// Selected body and optional comparison target.
///
/// A body is never its own comparison target: selecting the current target
/// clears the target, and targeting the selected body is ignored.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<CelestialBodyId>,
    target: Option<CelestialBodyId>,
}

impl SelectionState {
    pub fn selected(&self) -> Option<CelestialBodyId> {
        self.selected
    }

    pub fn target(&self) -> Option<CelestialBodyId> {
        self.target
    }

    /// Select a body, or clear the selection with `None`.
    pub fn select(&mut self, id: Option<CelestialBodyId>) {
        if id.is_some() && id == self.target {
            self.target = None;
        }
        self.selected = id;
    }

    /// Set or clear the comparison target.
    pub fn set_target(&mut self, id: Option<CelestialBodyId>) {
        if id.is_some() && id == self.selected {
            return;
        }
        self.target = id;
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.target = None;
    }

    /// Selected and target bodies, when both are set.
    pub fn comparison(&self) -> Option<(CelestialBodyId, CelestialBodyId)> {
        self.selected.zip(self.target)
    }
}

/// Body currently under the pointer.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoveredBody(pub Option<CelestialBodyId>);

/// Message sent when the selection changes, for camera and UI reactions.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionChanged(pub Option<CelestialBodyId>);

pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectionState>()
            .init_resource::<HoveredBody>()
            .add_message::<SelectionChanged>()
            .add_systems(Update, log_selection_changes);
    }
}

fn log_selection_changes(mut changes: MessageReader<SelectionChanged>) {
    for SelectionChanged(id) in changes.read() {
        match id {
            Some(id) => info!("Selected {}", id),
            None => info!("Selection cleared"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_and_target() {
        let mut state = SelectionState::default();
        state.select(Some(CelestialBodyId::Earth));
        state.set_target(Some(CelestialBodyId::Mars));
        assert_eq!(
            state.comparison(),
            Some((CelestialBodyId::Earth, CelestialBodyId::Mars))
        );
    }

    #[test]
    fn test_selecting_target_clears_it() {
        let mut state = SelectionState::default();
        state.select(Some(CelestialBodyId::Earth));
        state.set_target(Some(CelestialBodyId::Mars));
        state.select(Some(CelestialBodyId::Mars));
        assert_eq!(state.selected(), Some(CelestialBodyId::Mars));
        assert_eq!(state.target(), None);
    }

    #[test]
    fn test_cannot_target_selected_body() {
        let mut state = SelectionState::default();
        state.select(Some(CelestialBodyId::Jupiter));
        state.set_target(Some(CelestialBodyId::Jupiter));
        assert_eq!(state.target(), None);
    }

    #[test]
    fn test_deselect_keeps_target() {
        let mut state = SelectionState::default();
        state.select(Some(CelestialBodyId::Earth));
        state.set_target(Some(CelestialBodyId::Venus));
        state.select(None);
        assert_eq!(state.selected(), None);
        assert_eq!(state.target(), Some(CelestialBodyId::Venus));
        state.clear();
        assert_eq!(state, SelectionState::default());
    }
}

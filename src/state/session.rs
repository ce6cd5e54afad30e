use tracing::debug;

use crate::model::{BehaviorConfig, DeletePolicy, IdGenerator};
use crate::ops::Outcome;

use super::history::{History, Snapshot};
use super::{Action, AppState, reduce};

/// A running session: current state, id source, delete policy and history
pub struct Session {
    state: AppState,
    ids: Box<dyn IdGenerator>,
    delete_policy: DeletePolicy,
    history: History,
}

impl Session {
    pub fn new(ids: Box<dyn IdGenerator>, delete_policy: DeletePolicy) -> Self {
        Self::with_state(AppState::new(), ids, delete_policy)
    }

    /// Start from an existing state with an empty history
    pub fn with_state(
        state: AppState,
        ids: Box<dyn IdGenerator>,
        delete_policy: DeletePolicy,
    ) -> Self {
        Session {
            state,
            ids,
            delete_policy,
            history: History::new(),
        }
    }

    pub fn from_config(behavior: &BehaviorConfig) -> Self {
        Self::new(behavior.ids.generator(), behavior.on_category_delete)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn delete_policy(&self) -> DeletePolicy {
        self.delete_policy
    }

    /// Run an action through the reducer. Changes to categories or todos are
    /// recorded for undo.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let kind = action.kind();
        let before = Snapshot::capture(&self.state);
        let state = std::mem::take(&mut self.state);
        let (next, outcome) = reduce(state, action, self.ids.as_mut(), self.delete_policy);
        self.state = next;

        match outcome {
            Outcome::Applied => {
                if before.differs_from(&self.state) {
                    self.history.push(before);
                }
            }
            _ => debug!(action = kind, %outcome, "action not applied"),
        }
        outcome
    }

    /// Step back one data change. Refused while the editor or the category
    /// dialog is open, since either may point at a category the step removes.
    pub fn undo(&mut self) -> bool {
        if self.history_locked() {
            debug!("undo refused while editing or dialog open");
            return false;
        }
        let undone = self.history.undo(&mut self.state);
        debug!(undone, "undo");
        undone
    }

    /// Re-apply the last undone change. Same restriction as `undo`.
    pub fn redo(&mut self) -> bool {
        if self.history_locked() {
            debug!("redo refused while editing or dialog open");
            return false;
        }
        let redone = self.history.redo(&mut self.state);
        debug!(redone, "redo");
        redone
    }

    fn history_locked(&self) -> bool {
        self.state.is_editing() || self.state.show_modal()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

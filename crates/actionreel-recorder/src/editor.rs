//! Action editor model.
//!
//! Backs the host's list view: reorder, patch, delete and insert synthetic
//! steps. An entry's id is always its current index.

use actionreel_protocols::{Action, ActionPatch, ActionType, EditError, validate_action};
use tracing::{debug, info};

type Observer = Box<dyn FnMut(&[Action])>;

/// Synthetic step the user can insert by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntheticKind {
    Extract,
    AiExtract,
    AiFill,
}

impl SyntheticKind {
    pub fn action_type(&self) -> ActionType {
        match self {
            SyntheticKind::Extract => ActionType::Extract,
            SyntheticKind::AiExtract => ActionType::AiExtract,
            SyntheticKind::AiFill => ActionType::AiFill,
        }
    }

    fn draft(&self) -> Action {
        match self {
            SyntheticKind::Extract => Action::new(ActionType::Extract).with_output_key("extracted"),
            SyntheticKind::AiExtract => {
                Action::new(ActionType::AiExtract).with_output_key("ai_extracted")
            }
            SyntheticKind::AiFill => Action::new(ActionType::AiFill)
                .with_selector("")
                .with_prompt(""),
        }
    }
}

/// Which fields the edit form for an entry shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditForm {
    pub index: usize,
    pub action_type: ActionType,
    pub show_prompt: bool,
    pub show_output_key: bool,
}

impl EditForm {
    pub fn for_action(index: usize, action: &Action) -> Self {
        let action_type = action.action_type;
        Self {
            index,
            action_type,
            show_prompt: matches!(
                action_type,
                ActionType::Extract | ActionType::AiExtract | ActionType::AiFill
            ),
            show_output_key: matches!(action_type, ActionType::Extract | ActionType::AiExtract),
        }
    }
}

/// Editable list of actions with change observers.
#[derive(Default)]
pub struct ActionEditor {
    actions: Vec<Action>,
    selected: Option<usize>,
    observers: Vec<Observer>,
}

impl ActionEditor {
    pub fn new(actions: Vec<Action>) -> Self {
        Self {
            actions,
            ..Default::default()
        }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn into_actions(self) -> Vec<Action> {
        self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// `(id, action)` pairs for the list view.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Action)> {
        self.actions.iter().enumerate()
    }

    /// Call `observer` with the full list after every change.
    pub fn on_change(&mut self, observer: impl FnMut(&[Action]) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn set_actions(&mut self, actions: Vec<Action>) {
        self.actions = actions;
        self.selected = None;
        self.changed();
    }

    pub fn add_action(&mut self, action: Action) -> usize {
        self.actions.push(action);
        self.changed();
        self.actions.len() - 1
    }

    /// Apply `patch` to the action at `index`. The patched action must
    /// validate; otherwise nothing changes.
    pub fn update_action(&mut self, index: usize, patch: &ActionPatch) -> Result<(), EditError> {
        let current = self.get(index)?;
        let updated = current.patched(patch);
        validate_action(&updated)?;
        self.actions[index] = updated;
        debug!(index, "Action updated");
        self.changed();
        Ok(())
    }

    pub fn delete_action(&mut self, index: usize) -> Result<Action, EditError> {
        self.get(index)?;
        let removed = self.actions.remove(index);
        self.selected = match self.selected {
            Some(s) if s == index => None,
            Some(s) if s > index => Some(s - 1),
            other => other,
        };
        self.changed();
        Ok(removed)
    }

    /// Move the action at `from` so it ends up at `to`.
    pub fn move_action(&mut self, from: usize, to: usize) -> Result<(), EditError> {
        self.get(from)?;
        self.get(to)?;
        if from == to {
            return Ok(());
        }
        let action = self.actions.remove(from);
        self.actions.insert(to, action);
        self.selected = self.selected.map(|s| match s {
            s if s == from => to,
            s if from < s && to >= s => s - 1,
            s if from > s && to <= s => s + 1,
            s => s,
        });
        self.changed();
        Ok(())
    }

    pub fn clear_all(&mut self) {
        self.actions.clear();
        self.selected = None;
        info!("Action list cleared");
        self.changed();
    }

    pub fn select(&mut self, index: usize) -> Result<EditForm, EditError> {
        let form = EditForm::for_action(index, self.get(index)?);
        self.selected = Some(index);
        Ok(form)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Append a draft synthetic step, select it and return its form.
    pub fn insert_synthetic(&mut self, kind: SyntheticKind) -> EditForm {
        let draft = kind.draft();
        let form = EditForm::for_action(self.actions.len(), &draft);
        self.actions.push(draft);
        self.selected = Some(form.index);
        self.changed();
        form
    }

    fn get(&self, index: usize) -> Result<&Action, EditError> {
        self.actions.get(index).ok_or(EditError::IndexOutOfRange {
            index,
            len: self.actions.len(),
        })
    }

    fn changed(&mut self) {
        for observer in self.observers.iter_mut() {
            observer(&self.actions);
        }
    }
}

#[cfg(test)]
#[path = "editor_tests.rs"]
mod tests;

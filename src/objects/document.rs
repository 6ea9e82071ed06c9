//! Document editing toggle: Editing ⇄ Saved.

use crate::core::{Operation, StateHistory};
use crate::fsm::{StateMachine, StateObject, StepResult, Transition};
use crate::state_enum;

state_enum! {
    pub enum DocumentState {
        Editing,
        Saved,
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DocumentOp {
    Save,
    Edit,
}

impl Operation for DocumentOp {
    fn name(&self) -> &'static str {
        match self {
            Self::Save => "save_document",
            Self::Edit => "edit_document",
        }
    }
}

/// Starts in `Editing`; saving and resuming editing alternate.
#[derive(Debug)]
pub struct DocumentEditingSystem {
    machine: StateMachine<DocumentState, DocumentOp>,
}

impl DocumentEditingSystem {
    pub fn new() -> Self {
        let machine = StateMachine::new(DocumentState::Editing).with_transitions([
            Transition::between(
                DocumentOp::Save,
                DocumentState::Editing,
                DocumentState::Saved,
                "Document saved successfully",
            ),
            Transition::between(
                DocumentOp::Edit,
                DocumentState::Saved,
                DocumentState::Editing,
                "Editing resumed",
            ),
        ]);
        Self { machine }
    }

    pub fn state(&self) -> DocumentState {
        *self.machine.current_state()
    }

    pub fn save_document(&mut self) -> StepResult<DocumentState> {
        self.machine.fire(DocumentOp::Save)
    }

    pub fn edit_document(&mut self) -> StepResult<DocumentState> {
        self.machine.fire(DocumentOp::Edit)
    }
}

impl Default for DocumentEditingSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl StateObject for DocumentEditingSystem {
    type State = DocumentState;
    type Op = DocumentOp;

    const OPERATIONS: &'static [DocumentOp] = &[DocumentOp::Save, DocumentOp::Edit];

    fn state(&self) -> &DocumentState {
        self.machine.current_state()
    }

    fn history(&self) -> &StateHistory<DocumentState> {
        self.machine.history()
    }

    fn apply(&mut self, op: DocumentOp) -> StepResult<DocumentState> {
        self.machine.fire(op)
    }
}

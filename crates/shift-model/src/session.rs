//! Explicit state machine for the upload → parse → transform flow.
//!
//! One session owns one "current table" slot. Every transition carries
//! its full payload instead of mutating shared variables, so a failed
//! step can never leave a half-populated table visible. Selecting a new
//! file is legal from every state, including mid-parse, and discards
//! all prior state.

use thiserror::Error;

use crate::table::Table;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No file selected yet.
    Idle,
    /// A file has been selected and its parse is in flight.
    Parsing { file_name: String },
    /// The file parsed into a table; ready to accept an instruction.
    Parsed { file_name: String, table: Table },
    /// A transformation request is in flight.
    Processing {
        file_name: String,
        table: Table,
        instruction: String,
    },
    /// The service returned a replacement table; it is now the current
    /// table and may be submitted again.
    Processed { file_name: String, table: Table },
    /// A parse or transformation failed; holds the user-facing message.
    Failed { message: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
    #[error("the current table has no data rows; upload and parse a file first")]
    NoDataRows,
    #[error("enter a natural language instruction first")]
    MissingInstruction,
}

impl SessionState {
    pub fn new() -> Self {
        SessionState::Idle
    }

    /// Start parsing a newly selected file. Allowed from every state;
    /// any in-flight result or previously parsed table is discarded.
    pub fn select_file(&mut self, file_name: impl Into<String>) {
        *self = SessionState::Parsing {
            file_name: file_name.into(),
        };
    }

    /// Complete the in-flight parse with its table.
    pub fn parse_succeeded(&mut self, table: Table) -> Result<(), TransitionError> {
        match std::mem::replace(self, SessionState::Idle) {
            SessionState::Parsing { file_name } => {
                *self = SessionState::Parsed { file_name, table };
                Ok(())
            }
            other => Err(self.restore(other, "finish parsing")),
        }
    }

    /// Submit a natural language instruction against the current table.
    /// Requires a parsed (or previously processed) table with at least
    /// one data row and a non-blank instruction.
    pub fn submit(&mut self, instruction: impl Into<String>) -> Result<(), TransitionError> {
        let instruction = instruction.into();
        match &*self {
            SessionState::Parsed { table, .. } | SessionState::Processed { table, .. } => {
                if table.rows.is_empty() {
                    return Err(TransitionError::NoDataRows);
                }
                if instruction.trim().is_empty() {
                    return Err(TransitionError::MissingInstruction);
                }
            }
            other => {
                return Err(TransitionError::InvalidTransition {
                    action: "submit an instruction",
                    state: other.name(),
                });
            }
        }
        match std::mem::replace(self, SessionState::Idle) {
            SessionState::Parsed { file_name, table }
            | SessionState::Processed { file_name, table } => {
                *self = SessionState::Processing {
                    file_name,
                    table,
                    instruction,
                };
                Ok(())
            }
            other => Err(self.restore(other, "submit an instruction")),
        }
    }

    /// Complete the in-flight transformation. The replacement table
    /// becomes the current table wholesale.
    pub fn process_succeeded(&mut self, table: Table) -> Result<(), TransitionError> {
        match std::mem::replace(self, SessionState::Idle) {
            SessionState::Processing { file_name, .. } => {
                *self = SessionState::Processed { file_name, table };
                Ok(())
            }
            other => Err(self.restore(other, "finish processing")),
        }
    }

    /// Record a failure. Allowed from any state; the message is the one
    /// surfaced to the user.
    pub fn fail(&mut self, message: impl Into<String>) {
        *self = SessionState::Failed {
            message: message.into(),
        };
    }

    /// Drop everything and return to `Idle`.
    pub fn reset(&mut self) {
        *self = SessionState::Idle;
    }

    /// The current table, when one exists in this state.
    pub fn table(&self) -> Option<&Table> {
        match self {
            SessionState::Parsed { table, .. }
            | SessionState::Processing { table, .. }
            | SessionState::Processed { table, .. } => Some(table),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Parsing { .. } => "parsing",
            SessionState::Parsed { .. } => "parsed",
            SessionState::Processing { .. } => "processing",
            SessionState::Processed { .. } => "processed",
            SessionState::Failed { .. } => "failed",
        }
    }

    fn restore(&mut self, state: SessionState, action: &'static str) -> TransitionError {
        let name = state.name();
        *self = state;
        TransitionError::InvalidTransition {
            action,
            state: name,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::new()
    }
}

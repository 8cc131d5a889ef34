//! Implements InputPort. Numbered console menu driving the project use case.
//!
//! Each menu pass prints the operations, reads a selection and dispatches it. Any error
//! raised during a pass is reported once, here, and the menu is shown again.

use super::console::Console;
use crate::domain::{DomainError, ProjectDraft};
use crate::ports::InputPort;
use crate::usecases::ProjectService;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info};

/// Selection value meaning "quit". Produced by empty input, but typing it also quits.
pub const EXIT_SELECTION: i32 = -1;

const MENU_HEADER: &str = "\nThese are the available selections. Press the Enter key to quit:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    AddProject,
}

impl Operation {
    pub fn label(&self) -> &'static str {
        match self {
            Operation::AddProject => "Add a project",
        }
    }
}

/// What the user picked at the menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Exit,
    Operation(Operation),
    /// A number with no operation behind it.
    Unmapped(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Menu controller. Owns the console, the operations table and the loop state.
pub struct CommandLoop<R, W> {
    console: Console<R, W>,
    service: Arc<ProjectService>,
    operations: Vec<Operation>,
    state: LoopState,
}

impl<R, W> CommandLoop<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(console: Console<R, W>, service: Arc<ProjectService>) -> Self {
        Self {
            console,
            service,
            operations: vec![Operation::AddProject],
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Run one menu pass and return the resulting state.
    ///
    /// Validation and repository errors are printed and leave the loop running. Only a
    /// failure to write to the console itself is returned.
    pub async fn menu_pass(&mut self) -> Result<LoopState, DomainError> {
        match self.process_selection().await {
            Ok(()) => {}
            Err(DomainError::InputClosed) => {
                info!("standard input closed");
                self.exit_menu().await?;
            }
            Err(e) => {
                self.console
                    .print_line(&format!("\nError: {} Try again.", e))
                    .await?
            }
        }
        Ok(self.state)
    }

    /// Map a raw selection to an operation. `None` is the empty-input case.
    pub fn resolve(&self, input: Option<i32>) -> Selection {
        let n = match input {
            None | Some(EXIT_SELECTION) => return Selection::Exit,
            Some(n) => n,
        };
        n.checked_sub(1)
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| self.operations.get(i).copied())
            .map_or(Selection::Unmapped(n), Selection::Operation)
    }

    /// Give back the console writer (captured output in tests).
    pub fn into_writer(self) -> W {
        self.console.into_writer()
    }

    async fn process_selection(&mut self) -> Result<(), DomainError> {
        let selection = self.get_user_selection().await?;
        debug!(?selection, "menu selection");

        match selection {
            Selection::Exit => self.exit_menu().await,
            Selection::Operation(Operation::AddProject) => self.create_project().await,
            Selection::Unmapped(n) => {
                self.console
                    .print_line(&format!("\n{} is not a valid selection. Try again.", n))
                    .await
            }
        }
    }

    async fn get_user_selection(&mut self) -> Result<Selection, DomainError> {
        self.print_operations().await?;
        let input = self.console.read_integer("Enter a menu selection").await?;
        Ok(self.resolve(input))
    }

    async fn print_operations(&mut self) -> Result<(), DomainError> {
        self.console.print_line(MENU_HEADER).await?;
        for (i, op) in self.operations.iter().enumerate() {
            self.console
                .print_line(&format!("   {}) {}", i + 1, op.label()))
                .await?;
        }
        Ok(())
    }

    /// Prompt for every field, then hand the complete draft to the service.
    async fn create_project(&mut self) -> Result<(), DomainError> {
        let name = self.console.read_line("Enter the project name").await?;
        let estimated_hours = self
            .console
            .read_decimal("Enter the estimated hours")
            .await?;
        let actual_hours = self.console.read_decimal("Enter the actual hours").await?;
        let difficulty = self
            .console
            .read_integer("Enter the project difficulty (1-5)")
            .await?;
        let notes = self.console.read_line("Enter the project notes").await?;

        let draft = ProjectDraft {
            name,
            estimated_hours,
            actual_hours,
            difficulty,
            notes,
        };

        let project = self.service.add_project(draft).await?;
        self.console
            .print_line(&format!(
                "\nYou have successfully created project: {}",
                project
            ))
            .await
    }

    async fn exit_menu(&mut self) -> Result<(), DomainError> {
        self.state = LoopState::Terminated;
        self.console.print_line("Exiting the menu.").await
    }
}

#[async_trait]
impl<R, W> InputPort for CommandLoop<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn run(&mut self) -> Result<(), DomainError> {
        while self.state == LoopState::Running {
            self.menu_pass().await?;
        }
        Ok(())
    }
}

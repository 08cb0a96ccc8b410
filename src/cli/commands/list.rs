//! List command implementation.
//!
//! `dcm list` prints the configured service names, one per line.

use serde_yaml::Mapping;

use crate::error::Result;
use crate::services::{for_each_service, Outcome};
use crate::ui::UserInterface;

use super::dispatcher::Command;

/// The list command implementation.
pub struct ListCommand<'a> {
    services: &'a Mapping,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(services: &'a Mapping) -> Self {
        Self { services }
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<Outcome> {
        Ok(for_each_service(self.services, ui, |name, _, ui| {
            ui.message(name);
            Outcome::success()
        }))
    }
}

//! Dir command implementation.
//!
//! `dcm dir [service]` prints a service's checkout folder, falling back to
//! the project base directory when no service is given or the folder does
//! not exist. The output is a bare path, meant for shell substitution
//! (`cd $(dcm dir api)`).

use crate::config::Project;
use crate::error::Result;
use crate::services::Outcome;
use crate::ui::UserInterface;

use super::dispatcher::Command;

/// The dir command implementation.
pub struct DirCommand<'a> {
    project: &'a Project,
    service: Option<String>,
}

impl<'a> DirCommand<'a> {
    /// Create a new dir command.
    pub fn new(project: &'a Project, service: Option<String>) -> Self {
        Self { project, service }
    }
}

impl Command for DirCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<Outcome> {
        let dir = match &self.service {
            Some(service) => {
                let dir = self.project.service_dir(service);
                if dir.exists() {
                    dir
                } else {
                    self.project.dir.clone()
                }
            }
            None => self.project.dir.clone(),
        };

        ui.message(&dir.display().to_string());
        Ok(Outcome::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn project_in(temp: &TempDir) -> Project {
        let mut project = Project::resolve(
            Some(temp.path().to_path_buf()),
            Some("proj".to_string()),
        )
        .unwrap();
        project.srv = temp.path().to_path_buf();
        project
    }

    #[test]
    fn without_service_prints_the_project_dir() {
        let temp = TempDir::new().unwrap();
        let project = project_in(&temp);
        let mut ui = MockUI::new();

        let outcome = DirCommand::new(&project, None).execute(&mut ui).unwrap();

        assert_eq!(outcome.code, 0);
        assert_eq!(ui.messages(), [temp.path().display().to_string()]);
    }

    #[test]
    fn missing_service_folder_falls_back_to_the_project_dir() {
        let temp = TempDir::new().unwrap();
        let project = project_in(&temp);
        let mut ui = MockUI::new();

        DirCommand::new(&project, Some("not_exists".to_string()))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.messages(), [temp.path().display().to_string()]);
    }

    #[test]
    fn existing_service_folder_is_printed() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("api")).unwrap();
        let project = project_in(&temp);
        let mut ui = MockUI::new();

        DirCommand::new(&project, Some("api".to_string()))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(
            ui.messages(),
            [temp.path().join("api").display().to_string()]
        );
    }
}

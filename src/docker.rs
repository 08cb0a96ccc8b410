//! docker and docker-compose invocation helpers.
//!
//! Container and image names follow the compose v1 convention: containers
//! are named `<project>_<service>_<n>` and locally built images
//! `<project>_<service>`. Matching is by literal prefix/substring, so
//! services whose names prefix each other are an accepted limitation.

use crate::config::Project;
use crate::error::{DcmError, Result};
use crate::process::{CommandSpec, ProcessRunner};

/// Run docker-compose with the project's name and manifest injected via
/// `COMPOSE_PROJECT_NAME` and `COMPOSE_FILE`, streams inherited.
pub fn compose(runner: &dyn ProcessRunner, project: &Project, args: &[String]) -> Result<()> {
    let mut spec = CommandSpec::new("docker-compose", args.to_vec());
    spec.cwd = Some(project.dir.clone());
    spec.env = vec![
        ("COMPOSE_PROJECT_NAME".to_string(), project.name.clone()),
        ("COMPOSE_FILE".to_string(), project.file.display().to_string()),
    ];
    runner.run(&spec)
}

/// Resolve the running container id for a service.
///
/// Queries `docker ps` filtered by the `<project>_<service>_` name prefix
/// and takes the first match; an empty result is an error naming the
/// expected prefix.
pub fn container_id(
    runner: &dyn ProcessRunner,
    project: &Project,
    service: &str,
) -> Result<String> {
    let prefix = format!("{}_{}_", project.name, service);
    let filter = format!("name={}", prefix);
    let spec = CommandSpec::new("docker", ["ps", "-q", "-f", filter.as_str()]);
    let output = runner.capture(&spec)?;

    match output.trim().lines().next() {
        Some(id) if !id.trim().is_empty() => Ok(id.trim().to_string()),
        _ => Err(DcmError::ContainerNotFound { prefix }),
    }
}

/// Find the local image repository built for a service, if any.
///
/// Scans the `docker images` listing for a repository containing the
/// literal `<project>_<service>`. Absence is not an error; the service
/// simply has no local image.
pub fn image_repository(
    runner: &dyn ProcessRunner,
    project: &Project,
    service: &str,
) -> Result<Option<String>> {
    let listing = runner.capture(&CommandSpec::new("docker", ["images"]))?;
    let needle = format!("{}_{}", project.name, service);

    for line in listing.lines() {
        let Some(repository) = line.split_whitespace().next() else {
            continue;
        };
        if repository.contains(&needle) {
            return Ok(Some(repository.to_string()));
        }
    }

    Ok(None)
}

/// Exec an interactive bash shell inside a container.
pub fn exec_shell(runner: &dyn ProcessRunner, container: &str) -> Result<()> {
    runner.run(&CommandSpec::new("docker", ["exec", "-it", container, "bash"]))
}

/// Pull an image from the registry, streams inherited.
pub fn pull(runner: &dyn ProcessRunner, image: &str) -> Result<()> {
    runner.run(&CommandSpec::new("docker", ["pull", image]))
}

/// Kill a running container.
pub fn kill(runner: &dyn ProcessRunner, container: &str) -> Result<()> {
    runner.run(&CommandSpec::new("docker", ["kill", container]))
}

/// Remove a container together with its volumes.
pub fn remove_container(runner: &dyn ProcessRunner, container: &str) -> Result<()> {
    runner.run(&CommandSpec::new("docker", ["rm", "-v", container]))
}

/// Remove a local image.
pub fn remove_image(runner: &dyn ProcessRunner, repository: &str) -> Result<()> {
    runner.run(&CommandSpec::new("docker", ["rmi", repository]))
}

//! Per-service iteration and the soft/hard failure protocol.
//!
//! Most sub-commands do one thing for every service declared in the
//! manifest. [`for_each_service`] owns that loop: it validates the shape of
//! each entry, hands a [`ServiceConfig`] view to the caller's action, and
//! decides from the returned [`Outcome`] whether to keep going.
//!
//! Failure severity is carried by the exit code next to the error:
//!
//! - `code == 0` with an error is a *soft* failure: surfaced as a warning,
//!   iteration continues (one repository failing to update must not block
//!   the rest);
//! - `code != 0` with an error is a *hard* failure: iteration stops and
//!   the outcome propagates (a broken checkout root aborts the whole run).
//!
//! A service entry whose value is not a mapping violates the manifest
//! invariant and aborts the whole iteration as a hard failure.

use serde_yaml::{Mapping, Value};

use crate::config::value::{lookup, lookup_str};
use crate::error::DcmError;
use crate::ui::UserInterface;

/// Exit code plus optional surfaced error for one operation.
///
/// The pairing encodes severity: an error next to a zero code is reported
/// but non-fatal, an error next to a non-zero code aborts and becomes the
/// process exit code.
#[derive(Debug, Default)]
pub struct Outcome {
    /// Exit code (0 for success or soft failure).
    pub code: i32,

    /// Error to surface, if any.
    pub error: Option<DcmError>,
}

impl Outcome {
    /// Clean success.
    pub fn success() -> Self {
        Self::default()
    }

    /// Failure exit code without an error to print (usage paths).
    pub fn failure(code: i32) -> Self {
        Self { code, error: None }
    }

    /// Soft failure: surfaced but non-fatal.
    pub fn soft(error: DcmError) -> Self {
        Self {
            code: 0,
            error: Some(error),
        }
    }

    /// Hard failure: aborts the current operation.
    pub fn hard(code: i32, error: DcmError) -> Self {
        Self {
            code,
            error: Some(error),
        }
    }

    /// Whether this outcome aborts further work.
    pub fn is_hard(&self) -> bool {
        self.code != 0 && self.error.is_some()
    }
}

/// Read-only view of one service's sub-configuration.
///
/// Accessors are built on [`lookup`], so a missing `labels` mapping or a
/// label of the wrong type reads as "absent" rather than an error.
#[derive(Debug, Clone, Copy)]
pub struct ServiceConfig<'a> {
    mapping: &'a Mapping,
}

impl<'a> ServiceConfig<'a> {
    /// Wrap a service sub-configuration mapping.
    pub fn new(mapping: &'a Mapping) -> Self {
        Self { mapping }
    }

    /// The underlying mapping.
    pub fn as_mapping(&self) -> &'a Mapping {
        self.mapping
    }

    fn get(&self, path: &[&str]) -> Option<&'a Value> {
        let (key, rest) = path.split_first()?;
        lookup(self.mapping.get(*key)?, rest)
    }

    /// Docker-hub image reference; presence makes this an image service.
    pub fn image(&self) -> Option<&'a str> {
        self.get(&["image"])?.as_str()
    }

    /// A `labels` entry by key.
    pub fn label(&self, key: &str) -> Option<&'a str> {
        lookup_str(self.get(&["labels", key])?, &[])
    }

    /// Git repository URL for local-build services.
    pub fn repository(&self) -> Option<&'a str> {
        self.label("dcm.repository")
    }

    /// Branch to checkout/track.
    pub fn branch(&self) -> Option<&'a str> {
        self.label("dcm.branch")
    }

    /// Relative path to the post-start init script.
    pub fn init_script(&self) -> Option<&'a str> {
        self.label("dcm.initscript")
    }

    /// Whether `update` may touch this service.
    pub fn updateable(&self) -> bool {
        self.label("dcm.updateable") != Some("false")
    }
}

/// Run `action` for every service in the manifest, in declared order.
///
/// Returns `(0, None)` when every action succeeded or failed softly. Soft
/// failures are surfaced through `ui` as warnings and iteration continues;
/// the first hard failure is returned immediately, skipping the remaining
/// services. A non-mapping service value (or non-string service name) is a
/// hard failure for the whole run.
pub fn for_each_service<F>(
    services: &Mapping,
    ui: &mut dyn UserInterface,
    mut action: F,
) -> Outcome
where
    F: FnMut(&str, ServiceConfig<'_>, &mut dyn UserInterface) -> Outcome,
{
    for (name, value) in services {
        let Some(name) = name.as_str() else {
            return Outcome::hard(
                1,
                DcmError::MalformedService {
                    service: format!("{:?}", name),
                },
            );
        };

        let Some(mapping) = value.as_mapping() else {
            return Outcome::hard(
                1,
                DcmError::MalformedService {
                    service: name.to_string(),
                },
            );
        };

        let outcome = action(name, ServiceConfig::new(mapping), ui);
        if outcome.is_hard() {
            return outcome;
        }
        if let Some(error) = outcome.error {
            ui.warning(&error.to_string());
        }
    }

    Outcome::success()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    fn services(source: &str) -> Mapping {
        serde_yaml::from_str(source).unwrap()
    }

    #[test]
    fn all_successes_complete_cleanly() {
        let services = services("srv1:\n  config: value\nsrv2:\n  config: value");
        let mut ui = MockUI::new();
        let mut visited = Vec::new();

        let outcome = for_each_service(&services, &mut ui, |name, _, _| {
            visited.push(name.to_string());
            Outcome::success()
        });

        assert_eq!(outcome.code, 0);
        assert!(outcome.error.is_none());
        assert_eq!(visited, vec!["srv1", "srv2"]);
    }

    #[test]
    fn visits_services_in_declared_order() {
        let services = services("zeta: {}\nalpha: {}\nmid: {}");
        let mut ui = MockUI::new();
        let mut visited = Vec::new();

        for_each_service(&services, &mut ui, |name, _, _| {
            visited.push(name.to_string());
            Outcome::success()
        });

        assert_eq!(visited, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn non_mapping_service_aborts_the_run() {
        let services = services("srv1: just-a-string\nsrv2:\n  config: value");
        let mut ui = MockUI::new();
        let mut visited = 0;

        let outcome = for_each_service(&services, &mut ui, |_, _, _| {
            visited += 1;
            Outcome::success()
        });

        assert_eq!(outcome.code, 1);
        assert!(matches!(
            outcome.error,
            Some(DcmError::MalformedService { service }) if service == "srv1"
        ));
        assert_eq!(visited, 0);
    }

    #[test]
    fn soft_failure_continues_to_later_services() {
        let services = services("first: {}\nsecond: {}");
        let mut ui = MockUI::new();
        let mut visited = Vec::new();

        let outcome = for_each_service(&services, &mut ui, |name, _, _| {
            visited.push(name.to_string());
            if name == "first" {
                Outcome::soft(DcmError::UnknownService { name: name.into() })
            } else {
                Outcome::success()
            }
        });

        assert_eq!(outcome.code, 0);
        assert!(outcome.error.is_none());
        assert_eq!(visited, vec!["first", "second"]);
        assert!(ui.has_warning("first"));
    }

    #[test]
    fn hard_failure_short_circuits() {
        let services = services("first: {}\nsecond: {}");
        let mut ui = MockUI::new();
        let mut visited = Vec::new();

        let outcome = for_each_service(&services, &mut ui, |name, _, _| {
            visited.push(name.to_string());
            Outcome::hard(1, DcmError::NoServiceName)
        });

        assert_eq!(outcome.code, 1);
        assert!(outcome.error.is_some());
        assert_eq!(visited, vec!["first"]);
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn service_config_reads_image_and_labels() {
        let services = services(
            r#"
api:
  image: registry.example.com/api:1.2
  labels:
    dcm.repository: git@example.com:org/api.git
    dcm.branch: develop
    dcm.initscript: script/init.sh
"#,
        );
        let mapping = services.get("api").unwrap().as_mapping().unwrap();
        let config = ServiceConfig::new(mapping);

        assert_eq!(config.image(), Some("registry.example.com/api:1.2"));
        assert_eq!(config.repository(), Some("git@example.com:org/api.git"));
        assert_eq!(config.branch(), Some("develop"));
        assert_eq!(config.init_script(), Some("script/init.sh"));
        assert!(config.updateable());
    }

    #[test]
    fn service_config_absent_labels_read_as_none() {
        let services = services("api:\n  build: ./api");
        let mapping = services.get("api").unwrap().as_mapping().unwrap();
        let config = ServiceConfig::new(mapping);

        assert_eq!(config.image(), None);
        assert_eq!(config.repository(), None);
        assert_eq!(config.branch(), None);
        assert!(config.updateable());
    }

    #[test]
    fn service_config_scalar_labels_read_as_none() {
        // `labels` of the wrong type degrades to absent, not an error.
        let services = services("api:\n  labels: oops");
        let mapping = services.get("api").unwrap().as_mapping().unwrap();
        let config = ServiceConfig::new(mapping);

        assert_eq!(config.repository(), None);
    }

    #[test]
    fn updateable_false_label_disables_updates() {
        let services = services("db:\n  labels:\n    dcm.updateable: \"false\"");
        let mapping = services.get("db").unwrap().as_mapping().unwrap();
        assert!(!ServiceConfig::new(mapping).updateable());
    }

    #[test]
    fn outcome_severity_predicates() {
        assert!(!Outcome::success().is_hard());
        assert!(!Outcome::soft(DcmError::NoServiceName).is_hard());
        assert!(Outcome::hard(1, DcmError::NoServiceName).is_hard());
        assert!(!Outcome::failure(1).is_hard());
    }
}

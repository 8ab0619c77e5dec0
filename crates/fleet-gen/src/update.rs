//! Placeholder substitution in sample configuration files.
//!
//! A configuration file marks each value to fill in with
//! `*****UPDATE_WITH_<NAME>*****`. A [`ConfigItem`] names one such value and
//! the file it lives in, optionally reading a template and writing the result
//! to a separate output file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use regex::{NoExpand, Regex};
use tracing::{info, warn};

use crate::errors::UpdateError;

/// One value to patch in a configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigItem {
    pub name: String,
    /// Input file, relative to the updater root. Also the output unless
    /// `output_file` is set.
    pub file: PathBuf,
    pub output_file: Option<PathBuf>,
}

/// What happened when a value was applied to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    /// The input file has no placeholder for the item; nothing was written.
    NotFound,
    /// The input file or the output directory is missing.
    Skipped,
}

impl ConfigItem {
    pub fn new(name: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            output_file: None,
        }
    }

    /// Writes the patched contents to `output_file` instead of the input.
    pub fn with_output_file(mut self, output_file: impl Into<PathBuf>) -> Self {
        self.output_file = Some(output_file.into());
        self
    }

    /// Matches `*****UPDATE_WITH_<NAME>*****`.
    pub fn placeholder(&self) -> Result<Regex, UpdateError> {
        let pattern = format!(r"\*{{5}}UPDATE_WITH_{}\*{{5}}", regex::escape(&self.name));
        Ok(Regex::new(&pattern)?)
    }

    /// Replaces every placeholder in `contents` with `value`, taken literally.
    ///
    /// Returns `None` when `contents` has no placeholder for this item.
    pub fn substitute(&self, contents: &str, value: &str) -> Result<Option<String>, UpdateError> {
        let placeholder = self.placeholder()?;
        if !placeholder.is_match(contents) {
            return Ok(None);
        }
        Ok(Some(placeholder.replace_all(contents, NoExpand(value)).into_owned()))
    }

    /// Whether the input file exists and, for a separate output, its directory does.
    pub fn enabled(&self, root: &Path) -> bool {
        if !root.join(&self.file).is_file() {
            return false;
        }
        match &self.output_file {
            None => true,
            Some(output) => root
                .join(output)
                .parent()
                .is_some_and(|dir| dir.is_dir()),
        }
    }

    /// Applies `value` to the item's file under `root`.
    pub fn update(&self, root: &Path, value: &str) -> Result<UpdateOutcome, UpdateError> {
        if !self.enabled(root) {
            warn!(item = %self.name, "Skipping due to missing file or directory");
            return Ok(UpdateOutcome::Skipped);
        }

        let input = root.join(&self.file);
        let contents = fs::read_to_string(&input).map_err(|source| UpdateError::Io {
            path: input.display().to_string(),
            source,
        })?;

        let Some(patched) = self.substitute(&contents, value)? else {
            warn!(
                item = %self.name,
                file = %self.file.display(),
                "Placeholder not found"
            );
            return Ok(UpdateOutcome::NotFound);
        };

        let output = root.join(self.output_file.as_ref().unwrap_or(&self.file));
        fs::write(&output, patched).map_err(|source| UpdateError::Io {
            path: output.display().to_string(),
            source,
        })?;

        info!(item = %self.name, file = %output.display(), "Updated");
        Ok(UpdateOutcome::Updated)
    }
}

impl FromStr for ConfigItem {
    type Err = UpdateError;

    /// Parses `NAME=FILE` or `NAME=FILE,OUTPUT`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || UpdateError::InvalidItem(input.to_string());

        let (name, files) = input.split_once('=').ok_or_else(invalid)?;
        if name.is_empty() || files.is_empty() {
            return Err(invalid());
        }

        let item = match files.split_once(',') {
            Some((file, output)) if !file.is_empty() && !output.is_empty() => {
                ConfigItem::new(name, file).with_output_file(output)
            }
            Some(_) => return Err(invalid()),
            None => ConfigItem::new(name, files),
        };
        Ok(item)
    }
}

/// Outcome of applying a command map, by item name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    pub updated: Vec<String>,
    pub not_found: Vec<String>,
    pub skipped: Vec<String>,
    /// Command keys that match no known item.
    pub unknown: Vec<String>,
}

/// Applies values to a fixed set of items under one root directory.
#[derive(Debug, Clone)]
pub struct ConfigUpdater {
    root: PathBuf,
    items: Vec<ConfigItem>,
}

impl ConfigUpdater {
    pub fn new(root: impl Into<PathBuf>, items: Vec<ConfigItem>) -> Self {
        Self {
            root: root.into(),
            items,
        }
    }

    /// Applies a JSON object whose keys are item names and values the new values.
    ///
    /// The whole map is parsed before any file is touched. Keys are applied in
    /// sorted order.
    pub fn apply_command_json(&self, json: &str) -> Result<UpdateReport, UpdateError> {
        let commands: BTreeMap<String, String> = serde_json::from_str(json)?;
        self.apply_commands(&commands)
    }

    pub fn apply_commands(
        &self,
        commands: &BTreeMap<String, String>,
    ) -> Result<UpdateReport, UpdateError> {
        let mut report = UpdateReport::default();

        for (name, value) in commands {
            let Some(item) = self.items.iter().find(|i| &i.name == name) else {
                warn!(item = %name, "Command file specified unknown configuration");
                report.unknown.push(name.clone());
                continue;
            };

            let bucket = match item.update(&self.root, value)? {
                UpdateOutcome::Updated => &mut report.updated,
                UpdateOutcome::NotFound => &mut report.not_found,
                UpdateOutcome::Skipped => &mut report.skipped,
            };
            bucket.push(name.clone());
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    const PROPERTIES: &str = "project.id=*****UPDATE_WITH_PROJECT_ID*****\n\
                              js.key=*****UPDATE_WITH_JS_API_KEY*****\n";

    #[test]
    fn test_substitute_replaces_placeholder() {
        let item = ConfigItem::new("PROJECT_ID", "config.properties");
        let patched = item.substitute(PROPERTIES, "my-project").unwrap().unwrap();

        assert!(patched.starts_with("project.id=my-project\n"));
        assert!(patched.contains("*****UPDATE_WITH_JS_API_KEY*****"));
    }

    #[test]
    fn test_substitute_replaces_every_occurrence() {
        let item = ConfigItem::new("KEY", "f");
        let patched = item
            .substitute("a=*****UPDATE_WITH_KEY***** b=*****UPDATE_WITH_KEY*****", "x")
            .unwrap()
            .unwrap();
        assert_eq!(patched, "a=x b=x");
    }

    #[test]
    fn test_substitute_value_is_literal() {
        let item = ConfigItem::new("KEY", "f");
        let patched = item
            .substitute("k=*****UPDATE_WITH_KEY*****", "$1 ${name} \\n")
            .unwrap()
            .unwrap();
        assert_eq!(patched, "k=$1 ${name} \\n");
    }

    #[test]
    fn test_substitute_needs_five_stars() {
        let item = ConfigItem::new("KEY", "f");
        assert_eq!(item.substitute("k=****UPDATE_WITH_KEY****", "x").unwrap(), None);
        assert_eq!(item.substitute("k=UPDATE_WITH_KEY", "x").unwrap(), None);
    }

    #[test]
    fn test_update_in_place() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("config.properties"), PROPERTIES).unwrap();
        let item = ConfigItem::new("PROJECT_ID", "config.properties");

        let outcome = item.update(dir.path(), "my-project").unwrap();

        assert_eq!(outcome, UpdateOutcome::Updated);
        let contents = fs::read_to_string(dir.path().join("config.properties")).unwrap();
        assert!(contents.starts_with("project.id=my-project\n"));
    }

    #[test]
    fn test_update_from_template_keeps_template() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("overrides")).unwrap();
        let template = "{\"api_key\": \"*****UPDATE_WITH_IOS_API_KEY*****\"}";
        fs::write(dir.path().join("template.json"), template).unwrap();
        let item = ConfigItem::new("IOS_API_KEY", "template.json")
            .with_output_file("overrides/defaults.json");

        let outcome = item.update(dir.path(), "abc123").unwrap();

        assert_eq!(outcome, UpdateOutcome::Updated);
        assert_eq!(
            fs::read_to_string(dir.path().join("overrides/defaults.json")).unwrap(),
            "{\"api_key\": \"abc123\"}"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("template.json")).unwrap(),
            template
        );
    }

    #[test]
    fn test_update_missing_placeholder_leaves_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("local.properties"), "sdk.dir=/opt/sdk\n").unwrap();
        let item = ConfigItem::new("ANDROID_SDK_PATH", "local.properties");

        let outcome = item.update(dir.path(), "/home/sdk").unwrap();

        assert_eq!(outcome, UpdateOutcome::NotFound);
        assert_eq!(
            fs::read_to_string(dir.path().join("local.properties")).unwrap(),
            "sdk.dir=/opt/sdk\n"
        );
    }

    #[test]
    fn test_enabled_checks_input_and_output_dir() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("template.json"), "{}").unwrap();

        assert!(ConfigItem::new("A", "template.json").enabled(dir.path()));
        assert!(!ConfigItem::new("A", "missing.json").enabled(dir.path()));
        assert!(
            ConfigItem::new("A", "template.json")
                .with_output_file("out.json")
                .enabled(dir.path())
        );
        assert!(
            !ConfigItem::new("A", "template.json")
                .with_output_file("no_such_dir/out.json")
                .enabled(dir.path())
        );
    }

    #[test]
    fn test_update_skips_missing_file() {
        let dir = tempdir().unwrap();
        let item = ConfigItem::new("A", "missing.properties");
        assert_eq!(item.update(dir.path(), "x").unwrap(), UpdateOutcome::Skipped);
        assert!(!dir.path().join("missing.properties").exists());
    }

    #[test]
    fn test_parse_item() {
        let item: ConfigItem = "PROJECT_ID=backend/config.properties".parse().unwrap();
        assert_eq!(item, ConfigItem::new("PROJECT_ID", "backend/config.properties"));

        let item: ConfigItem = "IOS_API_KEY=tools/template.json,ios/defaults.json"
            .parse()
            .unwrap();
        assert_eq!(item.output_file, Some(PathBuf::from("ios/defaults.json")));

        assert!("PROJECT_ID".parse::<ConfigItem>().is_err());
        assert!("=file".parse::<ConfigItem>().is_err());
        assert!("A=file,".parse::<ConfigItem>().is_err());
    }

    #[test]
    fn test_apply_command_json() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("config.properties"), PROPERTIES).unwrap();
        fs::write(dir.path().join("local.properties"), "sdk.dir=\n").unwrap();
        let updater = ConfigUpdater::new(
            dir.path(),
            vec![
                ConfigItem::new("PROJECT_ID", "config.properties"),
                ConfigItem::new("JS_API_KEY", "config.properties"),
                ConfigItem::new("ANDROID_SDK_PATH", "local.properties"),
                ConfigItem::new("IOS_API_KEY", "missing.json"),
            ],
        );

        let report = updater
            .apply_command_json(
                r#"{
                    "PROJECT_ID": "my-project",
                    "JS_API_KEY": "js-key",
                    "ANDROID_SDK_PATH": "/opt/sdk",
                    "IOS_API_KEY": "ios-key",
                    "NOT_AN_ITEM": "x"
                }"#,
            )
            .unwrap();

        assert_eq!(report.updated, ["JS_API_KEY", "PROJECT_ID"]);
        assert_eq!(report.not_found, ["ANDROID_SDK_PATH"]);
        assert_eq!(report.skipped, ["IOS_API_KEY"]);
        assert_eq!(report.unknown, ["NOT_AN_ITEM"]);
        assert_eq!(
            fs::read_to_string(dir.path().join("config.properties")).unwrap(),
            "project.id=my-project\njs.key=js-key\n"
        );
    }

    #[test]
    fn test_non_string_command_rejected_before_writing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("config.properties"), PROPERTIES).unwrap();
        let updater = ConfigUpdater::new(
            dir.path(),
            vec![ConfigItem::new("PROJECT_ID", "config.properties")],
        );

        let err = updater
            .apply_command_json(r#"{"PROJECT_ID": "p", "JS_API_KEY": 42}"#)
            .unwrap_err();

        assert!(matches!(err, UpdateError::Commands(_)));
        assert_eq!(
            fs::read_to_string(dir.path().join("config.properties")).unwrap(),
            PROPERTIES
        );
    }
}

//! Rules for the `/communication` tree.
//!
//! Shapes handled here are disjoint:
//! - `/communication` (root)
//! - `/communication/<segment>` (subdir)
//! - `/communication/<type>/<rest>` (BUILD exemption, then source files)

use super::snake_case::SnakeCase;
use crate::error::RuleSetError;
use crate::rule::{MatchOutcome, Rule, compile};
use layoutguard_types::{Violation, ids};
use regex::Regex;

#[derive(Debug)]
pub struct CommunicationRoot {
    root: Regex,
}

impl CommunicationRoot {
    pub fn new() -> Result<Self, RuleSetError> {
        Ok(Self {
            root: compile(ids::RULE_COMMUNICATION_ROOT, r"^/communication$")?,
        })
    }
}

impl Rule for CommunicationRoot {
    fn id(&self) -> &'static str {
        ids::RULE_COMMUNICATION_ROOT
    }

    fn check(&self, path: &str) -> MatchOutcome {
        if self.root.is_match(path) {
            MatchOutcome::Matched
        } else {
            MatchOutcome::NoMatch
        }
    }
}

/// A direct child of `/communication` must be snake_case.
#[derive(Debug)]
pub struct CommunicationSubdir {
    shape: Regex,
    snake: SnakeCase,
}

impl CommunicationSubdir {
    pub fn new() -> Result<Self, RuleSetError> {
        Ok(Self {
            shape: compile(ids::RULE_COMMUNICATION_SUBDIR, r"^/communication/([^/]+)$")?,
            snake: SnakeCase::new(ids::RULE_COMMUNICATION_SUBDIR)?,
        })
    }
}

impl Rule for CommunicationSubdir {
    fn id(&self) -> &'static str {
        ids::RULE_COMMUNICATION_SUBDIR
    }

    fn check(&self, path: &str) -> MatchOutcome {
        let Some(caps) = self.shape.captures(path) else {
            return MatchOutcome::NoMatch;
        };
        if self.snake.is_match(&caps[1]) {
            MatchOutcome::Matched
        } else {
            MatchOutcome::MatchedWithError(Violation::DirectoryNotSnakeCase)
        }
    }
}

/// `/communication/<type>/BUILD` is exempt from source-file naming when `<type>` is
/// snake_case. Otherwise the rule stays silent and the source-file rule decides.
#[derive(Debug)]
pub struct CommunicationBuildFile {
    shape: Regex,
    snake: SnakeCase,
}

impl CommunicationBuildFile {
    pub fn new() -> Result<Self, RuleSetError> {
        Ok(Self {
            shape: compile(
                ids::RULE_COMMUNICATION_BUILD_FILE,
                r"^/communication/([^/]+)/BUILD$",
            )?,
            snake: SnakeCase::new(ids::RULE_COMMUNICATION_BUILD_FILE)?,
        })
    }
}

impl Rule for CommunicationBuildFile {
    fn id(&self) -> &'static str {
        ids::RULE_COMMUNICATION_BUILD_FILE
    }

    fn check(&self, path: &str) -> MatchOutcome {
        match self.shape.captures(path) {
            Some(caps) if self.snake.is_match(&caps[1]) => MatchOutcome::Matched,
            _ => MatchOutcome::NoMatch,
        }
    }
}

/// Everything at depth two or more under `/communication` must be
/// `<type>_codec.(h|cpp)` or `<type>_conversion.(h|cpp)`, where `<type>` is exactly
/// the snake_case parent directory.
///
/// The back-reference is checked in two steps: the file pattern extracts the
/// candidate prefix, then it is compared with the directory segment.
#[derive(Debug)]
pub struct CommunicationSourceFile {
    shape: Regex,
    file: Regex,
    snake: SnakeCase,
}

impl CommunicationSourceFile {
    pub fn new() -> Result<Self, RuleSetError> {
        Ok(Self {
            shape: compile(
                ids::RULE_COMMUNICATION_SOURCE_FILE,
                r"^/communication/([^/]*)/(.*)$",
            )?,
            file: compile(
                ids::RULE_COMMUNICATION_SOURCE_FILE,
                r"^(.+)_(?:codec|conversion)\.(?:h|cpp)$",
            )?,
            snake: SnakeCase::new(ids::RULE_COMMUNICATION_SOURCE_FILE)?,
        })
    }

    fn is_valid(&self, type_segment: &str, file_name: &str) -> bool {
        if !self.snake.is_match(type_segment) {
            return false;
        }
        self.file
            .captures(file_name)
            .is_some_and(|caps| &caps[1] == type_segment)
    }
}

impl Rule for CommunicationSourceFile {
    fn id(&self) -> &'static str {
        ids::RULE_COMMUNICATION_SOURCE_FILE
    }

    fn check(&self, path: &str) -> MatchOutcome {
        let Some(caps) = self.shape.captures(path) else {
            return MatchOutcome::NoMatch;
        };
        if self.is_valid(&caps[1], &caps[2]) {
            MatchOutcome::Matched
        } else {
            MatchOutcome::MatchedWithError(Violation::InvalidSourceFile)
        }
    }
}

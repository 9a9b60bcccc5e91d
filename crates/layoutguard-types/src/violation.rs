use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MSG_PATH_NOT_ALLOWED: &str = "path not allowed";
pub const MSG_DIRECTORY_NOT_SNAKE_CASE: &str = "directory name must be snake_case";
pub const MSG_INVALID_SOURCE_FILE: &str =
    "source files must be either <type>_codec.(h|cpp) or <type>_conversion.(h|cpp)";

/// The closed set of ways a path can fail the layout conventions.
///
/// Each kind carries a fixed human-readable message; the messages are part of the
/// output contract and must not change.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    /// No rule claimed the path.
    PathNotAllowed,
    DirectoryNotSnakeCase,
    InvalidSourceFile,
}

impl Violation {
    pub const ALL: [Violation; 3] = [
        Violation::PathNotAllowed,
        Violation::DirectoryNotSnakeCase,
        Violation::InvalidSourceFile,
    ];

    pub fn message(self) -> &'static str {
        match self {
            Violation::PathNotAllowed => MSG_PATH_NOT_ALLOWED,
            Violation::DirectoryNotSnakeCase => MSG_DIRECTORY_NOT_SNAKE_CASE,
            Violation::InvalidSourceFile => MSG_INVALID_SOURCE_FILE,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Violation::PathNotAllowed => ids::CODE_PATH_NOT_ALLOWED,
            Violation::DirectoryNotSnakeCase => ids::CODE_DIRECTORY_NOT_SNAKE_CASE,
            Violation::InvalidSourceFile => ids::CODE_INVALID_SOURCE_FILE,
        }
    }

    pub fn from_code(code: &str) -> Option<Violation> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

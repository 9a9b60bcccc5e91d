//! Stable identifiers for rules and violation codes.
//!
//! `rule_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Rules
pub const RULE_LIFECYCLE_TREE: &str = "lifecycle.tree";
pub const RULE_COMMUNICATION_ROOT: &str = "communication.root";
pub const RULE_COMMUNICATION_SUBDIR: &str = "communication.subdir";
pub const RULE_COMMUNICATION_BUILD_FILE: &str = "communication.build_file";
pub const RULE_COMMUNICATION_SOURCE_FILE: &str = "communication.source_file";

// Pseudo-rule reported when no registered rule claims a path.
pub const RULE_CATCH_ALL: &str = "layout.catch_all";

// Codes
pub const CODE_PATH_NOT_ALLOWED: &str = "path_not_allowed";
pub const CODE_DIRECTORY_NOT_SNAKE_CASE: &str = "directory_not_snake_case";
pub const CODE_INVALID_SOURCE_FILE: &str = "invalid_source_file";

// Tool-level
pub const RULE_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";

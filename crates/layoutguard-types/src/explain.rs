//! Explain registry for rules and codes.
//!
//! Maps rule IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a rule or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule/code.
    pub title: &'static str,
    /// What the rule does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after tree examples.
    pub examples: ExamplePair,
}

/// Before and after tree examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// A layout that would trigger a finding.
    pub before: &'static str,
    /// A layout that passes.
    pub after: &'static str,
}

/// Look up an explanation by rule_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Rule IDs
        ids::RULE_LIFECYCLE_TREE => Some(explain_lifecycle_tree()),
        ids::RULE_COMMUNICATION_ROOT => Some(explain_communication_root()),
        ids::RULE_COMMUNICATION_SUBDIR => Some(explain_communication_subdir()),
        ids::RULE_COMMUNICATION_BUILD_FILE => Some(explain_communication_build_file()),
        ids::RULE_COMMUNICATION_SOURCE_FILE => Some(explain_communication_source_file()),
        ids::RULE_CATCH_ALL => Some(explain_path_not_allowed()),

        // Codes
        ids::CODE_PATH_NOT_ALLOWED => Some(explain_path_not_allowed()),
        ids::CODE_DIRECTORY_NOT_SNAKE_CASE => Some(explain_communication_subdir()),
        ids::CODE_INVALID_SOURCE_FILE => Some(explain_communication_source_file()),

        _ => None,
    }
}

/// List all known rule IDs, in evaluation order.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[
        ids::RULE_LIFECYCLE_TREE,
        ids::RULE_COMMUNICATION_ROOT,
        ids::RULE_COMMUNICATION_SUBDIR,
        ids::RULE_COMMUNICATION_BUILD_FILE,
        ids::RULE_COMMUNICATION_SOURCE_FILE,
        ids::RULE_CATCH_ALL,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_PATH_NOT_ALLOWED,
        ids::CODE_DIRECTORY_NOT_SNAKE_CASE,
        ids::CODE_INVALID_SOURCE_FILE,
    ]
}

fn explain_lifecycle_tree() -> Explanation {
    Explanation {
        title: "Lifecycle Tree",
        description: "\
Accepts `/lifecycle` and everything beneath it.

The lifecycle area has no naming convention of its own, so any file or directory
below `/lifecycle/` is valid. Near misses such as `/lifecycle2` or `/lifecylce`
are not part of this tree and fall through to the catch-all.",
        remediation: "\
Nothing to fix for paths under `/lifecycle/`. If a path was reported as not allowed,
check the spelling of the top-level directory.",
        examples: ExamplePair {
            before: "/lifecylce/state_machine.cpp",
            after: "/lifecycle/state_machine.cpp",
        },
    }
}

fn explain_communication_root() -> Explanation {
    Explanation {
        title: "Communication Root",
        description: "\
Accepts the `/communication` directory itself.

Entries below it are classified by the subdirectory, BUILD-file and source-file rules.",
        remediation: "Nothing to fix; this rule never reports a violation.",
        examples: ExamplePair {
            before: "/Communication",
            after: "/communication",
        },
    }
}

fn explain_communication_subdir() -> Explanation {
    Explanation {
        title: "Communication Subdirectories Are snake_case",
        description: "\
Every direct child of `/communication` names a type and must be snake_case:
lowercase ASCII letters and digits in groups joined by single underscores.

Leading, trailing or doubled underscores are rejected, as are uppercase letters.
A stray file directly under `/communication` (e.g. `/communication/BUILD`) has the
same shape and is reported the same way.",
        remediation: "\
Rename the directory to snake_case, e.g. `SomeType` -> `some_type`. Remember to
rename the source files inside it, since their prefix must match the directory.",
        examples: ExamplePair {
            before: "/communication/SomeType",
            after: "/communication/some_type",
        },
    }
}

fn explain_communication_build_file() -> Explanation {
    Explanation {
        title: "Communication BUILD Files",
        description: "\
Accepts a `BUILD` file inside a snake_case communication type directory.

This is an exemption from the source-file naming rule. When the parent directory is
not snake_case the exemption does not apply and the file is reported by the
source-file rule instead.",
        remediation: "Rename the parent directory to snake_case.",
        examples: ExamplePair {
            before: "/communication/Some_Type/BUILD",
            after: "/communication/some_type/BUILD",
        },
    }
}

fn explain_communication_source_file() -> Explanation {
    Explanation {
        title: "Communication Source File Names",
        description: "\
Files inside `/communication/<type>/` must be named after their directory:
`<type>_codec.h`, `<type>_codec.cpp`, `<type>_conversion.h` or `<type>_conversion.cpp`.

`<type>` must be exactly the parent directory name, and that name must itself be
snake_case. Nested directories below a type directory are not allowed.",
        remediation: "\
Rename the file so its prefix equals the directory name, and use one of the
`_codec` / `_conversion` suffixes with a `.h` or `.cpp` extension.",
        examples: ExamplePair {
            before: "/communication/foo/bar_codec.cpp",
            after: "/communication/foo/foo_codec.cpp",
        },
    }
}

fn explain_path_not_allowed() -> Explanation {
    Explanation {
        title: "Path Not Allowed",
        description: "\
Reported when no rule claims a path. Only the lifecycle tree and the communication
tree are part of the layout; anything else is outside the allowed structure.",
        remediation: "\
Move the entry under an allowed tree, or exclude it in `layoutguard.toml`:

    exclude = [\"/.git\", \"/.git/**\"]",
        examples: ExamplePair {
            before: "/some/nested/file.cpp",
            after: "/lifecycle/some/nested/file.cpp",
        },
    }
}

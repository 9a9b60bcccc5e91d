//! The convention library: one rule per structural convention.
//!
//! Registration order below is the evaluation order. The communication file rules
//! assume the BUILD exemption runs before the source-file validator.

use crate::error::RuleSetError;
use crate::rule::RuleSet;

mod communication;
mod lifecycle;
mod snake_case;

pub use communication::{
    CommunicationBuildFile, CommunicationRoot, CommunicationSourceFile, CommunicationSubdir,
};
pub use lifecycle::LifecycleTree;
pub use snake_case::SnakeCase;

/// Build the reference convention set in its fixed evaluation order.
pub fn conventions() -> Result<RuleSet, RuleSetError> {
    RuleSet::new()
        .with(LifecycleTree::new()?)?
        .with(CommunicationRoot::new()?)?
        .with(CommunicationSubdir::new()?)?
        .with(CommunicationBuildFile::new()?)?
        .with(CommunicationSourceFile::new()?)
}

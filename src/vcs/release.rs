//! Release publishing
//!
//! Stage, commit, tag and optionally push, in that order. A failing step
//! stops the sequence; earlier steps are not undone.

use crate::error::{VcsError, VcsResult};
use crate::vcs::Vcs;
use crate::version::Version;

/// What the user asked the `git` subcommand to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRequest {
    pub message: String,
    pub release_candidate: bool,
    pub push: bool,
}

impl ReleaseRequest {
    /// Build a request, requiring a non-empty commit message
    pub fn new(message: Option<&str>, release_candidate: bool, push: bool) -> VcsResult<Self> {
        match message {
            Some(message) if !message.is_empty() => Ok(ReleaseRequest {
                message: message.to_string(),
                release_candidate,
                push,
            }),
            _ => Err(VcsError::MissingCommitMessage),
        }
    }
}

/// What a publish actually did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub tag: String,
    pub pushed_to: Option<String>,
}

/// Commit and tag `version`, pushing the tag to `remote` when requested
pub fn publish(
    vcs: &mut dyn Vcs,
    request: &ReleaseRequest,
    version: &Version,
    remote: &str,
) -> VcsResult<Release> {
    let tag = version.tag(request.release_candidate);

    vcs.stage_all()?;
    vcs.commit(&request.message)?;
    vcs.tag(&tag, &request.message)?;

    let pushed_to = if request.push {
        vcs.push_tag(remote, &tag)?;
        Some(remote.to_string())
    } else {
        None
    };

    Ok(Release { tag, pushed_to })
}

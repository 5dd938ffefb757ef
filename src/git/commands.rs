// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git commit creation.

use crate::error::{CzError, GitError, Result};

use super::repo::Repository;

/// Create a commit on HEAD from the index of a given repository.
///
/// Returns the new commit id.
pub fn create_commit_in_repo(repo: &Repository, message: &str) -> Result<String> {
    // Check for staged changes
    if !repo.has_staged_changes()? {
        return Err(CzError::Git(GitError::NoStagedChanges));
    }

    // Get signature
    let sig = repo.inner().signature().map_err(|e| {
        CzError::Git(GitError::CommitFailed {
            message: format!("Failed to get signature: {}", e.message()),
        })
    })?;

    // Get the tree from the index
    let mut index = repo.inner().index().map_err(|e| {
        CzError::Git(GitError::CommitFailed {
            message: format!("Failed to get index: {}", e.message()),
        })
    })?;
    let tree_id = index.write_tree().map_err(|e| {
        CzError::Git(GitError::CommitFailed {
            message: format!("Failed to write tree: {}", e.message()),
        })
    })?;
    let tree = repo.inner().find_tree(tree_id).map_err(|e| {
        CzError::Git(GitError::CommitFailed {
            message: format!("Failed to find tree: {}", e.message()),
        })
    })?;

    // Initial commit has no parents
    let parents: Vec<git2::Commit<'_>> = repo.head_commit().into_iter().collect();
    let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();

    let commit_oid = repo
        .inner()
        .commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .map_err(|e| {
            CzError::Git(GitError::CommitFailed {
                message: e.message().to_string(),
            })
        })?;

    tracing::debug!("Created commit {}", commit_oid);
    Ok(commit_oid.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::repo::tests::{init_repo, stage_file};

    #[test]
    fn test_commit_without_staged_changes() {
        let (_dir, repo) = init_repo();
        let result = create_commit_in_repo(&repo, "feat: nothing\n\n\n\n");
        assert!(matches!(
            result,
            Err(CzError::Git(GitError::NoStagedChanges))
        ));
    }

    #[test]
    fn test_commit_keeps_message_verbatim() {
        let (_dir, repo) = init_repo();
        stage_file(&repo, "a.txt", "one");

        let message = "feat(cli): add dry-run flag\n\nPrints actions.\n\ncloses #42";
        let sha = create_commit_in_repo(&repo, message).unwrap();

        let head = repo.head_commit().unwrap();
        assert_eq!(head.id().to_string(), sha);
        assert_eq!(head.message(), Some(message));
        assert_eq!(head.parent_count(), 0);
    }

    #[test]
    fn test_second_commit_has_parent() {
        let (_dir, repo) = init_repo();
        stage_file(&repo, "a.txt", "one");
        let first = create_commit_in_repo(&repo, "chore: first").unwrap();

        stage_file(&repo, "b.txt", "two");
        create_commit_in_repo(&repo, "chore: second").unwrap();

        let head = repo.head_commit().unwrap();
        assert_eq!(head.parent_count(), 1);
        assert_eq!(head.parent_id(0).unwrap().to_string(), first);
    }
}

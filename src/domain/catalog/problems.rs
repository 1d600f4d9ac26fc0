//! Troubleshooting recipes. Within a problem, entries are listed in the order to try them.

use crate::domain::models::{CommandEntry, Topic};

const fn e(
    command: &'static str,
    description: &'static str,
    example: &'static str,
) -> CommandEntry {
    CommandEntry {
        command,
        description,
        example,
    }
}

pub(super) const PROBLEM_TOPICS: &[Topic] = &[
    Topic {
        name: "To take all code from one branch to another",
        entries: TO_TAKE_ALL_CODE_FROM_ONE_BRANCH_TO_ANOTHER,
    },
    Topic {
        name: "Undo last commit but keep changes",
        entries: UNDO_LAST_COMMIT_BUT_KEEP_CHANGES,
    },
    Topic {
        name: "Remove file from Git but keep locally",
        entries: REMOVE_FILE_FROM_GIT_BUT_KEEP_LOCALLY,
    },
    Topic {
        name: "Resolve merge conflicts",
        entries: RESOLVE_MERGE_CONFLICTS,
    },
    Topic {
        name: "Accidentally committed to wrong branch",
        entries: ACCIDENTALLY_COMMITTED_TO_WRONG_BRANCH,
    },
    Topic {
        name: "Sync fork with original repository",
        entries: SYNC_FORK_WITH_ORIGINAL_REPOSITORY,
    },
    Topic {
        name: "Recover deleted branch",
        entries: RECOVER_DELETED_BRANCH,
    },
    Topic {
        name: "Change commit message of last commit",
        entries: CHANGE_COMMIT_MESSAGE_OF_LAST_COMMIT,
    },
];

const TO_TAKE_ALL_CODE_FROM_ONE_BRANCH_TO_ANOTHER: &[CommandEntry] = &[
    e(
        "git reset --hard <branch_name>",
        "Replace your current branch with specified branch completely. Use this if you want to completely replace your current code with another branch's code.",
        "git reset --hard main",
    ),
    e(
        "git merge <branch_name> --allow-unrelated-histories -X theirs",
        "Merge and use their version for all conflicts. Use this if you want to merge and automatically prefer the other branch's changes when conflicts occur.",
        "git merge feature --allow-unrelated-histories -X theirs",
    ),
    e(
        "git checkout <branch_name> && git checkout -b <new_branch>",
        "Create a fresh branch from another branch. Use this if you want to start a new branch based on another branch.",
        "git checkout main && git checkout -b feature-new",
    ),
    e(
        "git fetch origin <branch_name> && git reset --hard origin/<branch_name>",
        "Force push another branch to your branch. Use this if you want to pull the remote branch and forcefully sync it with your current branch.",
        "git fetch origin main && git reset --hard origin/main",
    ),
];

const UNDO_LAST_COMMIT_BUT_KEEP_CHANGES: &[CommandEntry] = &[
    e(
        "git reset --soft HEAD~1",
        "Undo the last commit but keep all changes staged. Perfect when you want to modify the commit message or add more files.",
        "git reset --soft HEAD~1",
    ),
    e(
        "git commit --amend",
        "Modify the last commit by adding new changes or changing the commit message. Use after staging additional files.",
        r#"git commit --amend -m "Updated commit message""#,
    ),
    e(
        "git reset HEAD~1",
        "Undo the last commit and unstage changes, but keep files modified in working directory.",
        "git reset HEAD~1",
    ),
];

const REMOVE_FILE_FROM_GIT_BUT_KEEP_LOCALLY: &[CommandEntry] = &[
    e(
        "git rm --cached <file>",
        "Remove file from Git tracking but keep it in your local working directory. Useful for files that should not be tracked.",
        "git rm --cached config.txt",
    ),
    e(
        "echo '<file>' >> .gitignore && git add .gitignore",
        "Add file to .gitignore to prevent future tracking and commit the ignore file.",
        "echo 'config.txt' >> .gitignore && git add .gitignore",
    ),
    e(
        "git update-index --skip-worktree <file>",
        "Tell Git to ignore changes to a tracked file temporarily. Use when you need local modifications that shouldn't be committed.",
        "git update-index --skip-worktree config.txt",
    ),
];

const RESOLVE_MERGE_CONFLICTS: &[CommandEntry] = &[
    e(
        "git status",
        "Check which files have conflicts. Look for files marked as 'both modified' to identify conflict locations.",
        "git status",
    ),
    e(
        "git add <resolved-file> && git commit",
        "After manually editing and resolving conflicts in files, stage the resolved files and commit the merge.",
        "git add index.html && git commit",
    ),
    e(
        "git merge --abort",
        "Cancel the merge process and return to the state before the merge started. Use when conflicts are too complex.",
        "git merge --abort",
    ),
    e(
        "git checkout --theirs <file> && git add <file>",
        "Accept their version of the conflicted file completely. Use when you want to keep the incoming changes.",
        "git checkout --theirs index.html && git add index.html",
    ),
    e(
        "git checkout --ours <file> && git add <file>",
        "Accept your version of the conflicted file completely. Use when you want to keep your current changes.",
        "git checkout --ours index.html && git add index.html",
    ),
];

const ACCIDENTALLY_COMMITTED_TO_WRONG_BRANCH: &[CommandEntry] = &[
    e(
        "git log --oneline -n 5",
        "First, identify the commit hash that you want to move to another branch.",
        "git log --oneline -n 5",
    ),
    e(
        "git checkout <target-branch> && git cherry-pick <commit-hash>",
        "Switch to the correct branch and cherry-pick the commit from the wrong branch.",
        "git checkout feature && git cherry-pick abc123",
    ),
    e(
        "git checkout <wrong-branch> && git reset --hard HEAD~1",
        "Go back to the wrong branch and remove the commit using hard reset.",
        "git checkout main && git reset --hard HEAD~1",
    ),
    e(
        "git branch <new-branch> && git reset --hard HEAD~1",
        "Alternative: Create a new branch from current commit, then reset the current branch.",
        "git branch feature-fix && git reset --hard HEAD~1",
    ),
];

const SYNC_FORK_WITH_ORIGINAL_REPOSITORY: &[CommandEntry] = &[
    e(
        "git remote add upstream <original-repo-url>",
        "Add the original repository as upstream remote. Do this once when you first clone your fork.",
        "git remote add upstream https://github.com/original/repo.git",
    ),
    e(
        "git fetch upstream",
        "Fetch all changes from the original repository without merging them into your local branches.",
        "git fetch upstream",
    ),
    e(
        "git checkout main && git merge upstream/main",
        "Switch to your main branch and merge the latest changes from the original repository.",
        "git checkout main && git merge upstream/main",
    ),
    e(
        "git push origin main",
        "Push the updated main branch to your fork on GitHub to keep it synchronized.",
        "git push origin main",
    ),
];

const RECOVER_DELETED_BRANCH: &[CommandEntry] = &[
    e(
        "git reflog",
        "Show the reference log to find the commit hash where your deleted branch was pointing.",
        "git reflog",
    ),
    e(
        "git checkout -b <branch-name> <commit-hash>",
        "Create a new branch from the commit hash found in reflog to recover the deleted branch.",
        "git checkout -b feature-recovered abc123",
    ),
    e(
        "git branch <branch-name> <commit-hash>",
        "Alternative: Create the branch without switching to it immediately.",
        "git branch feature-recovered abc123",
    ),
];

const CHANGE_COMMIT_MESSAGE_OF_LAST_COMMIT: &[CommandEntry] = &[
    e(
        r#"git commit --amend -m "New commit message""#,
        "Change the message of the most recent commit. Only use this if you haven't pushed the commit yet.",
        r#"git commit --amend -m "Fix: Updated user authentication""#,
    ),
    e(
        "git commit --amend",
        "Open the default editor to modify the last commit message interactively.",
        "git commit --amend",
    ),
    e(
        "git push --force-with-lease",
        "If you already pushed the commit, use force push with lease to update the remote safely.",
        "git push --force-with-lease",
    ),
];

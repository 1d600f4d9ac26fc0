//! Command reference, grouped by category in display order.

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

pub(super) const COMMAND_TOPICS: &[Topic] = &[
    Topic {
        name: "Basic Git Commands",
        entries: BASIC_GIT_COMMANDS,
    },
    Topic {
        name: "Working Directory and Staging Area",
        entries: WORKING_DIRECTORY_AND_STAGING_AREA,
    },
    Topic {
        name: "Working with Branches",
        entries: WORKING_WITH_BRANCHES,
    },
    Topic {
        name: "Merging in Git",
        entries: MERGING_IN_GIT,
    },
    Topic {
        name: "Git Remotes",
        entries: GIT_REMOTES,
    },
    Topic {
        name: "Amending Commits",
        entries: AMENDING_COMMITS,
    },
    Topic {
        name: "Stashing in Git",
        entries: STASHING_IN_GIT,
    },
    Topic {
        name: "Git Tagging",
        entries: GIT_TAGGING,
    },
    Topic {
        name: "Reverting Changes in Git",
        entries: REVERTING_CHANGES_IN_GIT,
    },
    Topic {
        name: "Inspection & Comparison",
        entries: INSPECTION_COMPARISON,
    },
    Topic {
        name: "Undo Operations",
        entries: UNDO_OPERATIONS,
    },
    Topic {
        name: "Advanced Branch Operations",
        entries: ADVANCED_BRANCH_OPERATIONS,
    },
    Topic {
        name: "Viewing History Logs",
        entries: VIEWING_HISTORY_LOGS,
    },
    Topic {
        name: "Git Diffs",
        entries: GIT_DIFFS,
    },
    Topic {
        name: "Git Flow",
        entries: GIT_FLOW,
    },
    Topic {
        name: "Exploring Git References",
        entries: EXPLORING_GIT_REFERENCES,
    },
    Topic {
        name: "How to Configure Git",
        entries: HOW_TO_CONFIGURE_GIT,
    },
    Topic {
        name: "Git Security",
        entries: GIT_SECURITY,
    },
    Topic {
        name: "How to Set Aliases in Git",
        entries: HOW_TO_SET_ALIASES_IN_GIT,
    },
    Topic {
        name: "Rebasing in Git",
        entries: REBASING_IN_GIT,
    },
];

const BASIC_GIT_COMMANDS: &[CommandEntry] = &[
    e(
        "git help",
        "Prints Git help information and provides quick reference to basic usage and commonly used commands",
        "git help",
    ),
    e(
        "git help <command>",
        "Display help information for any specific Git command",
        "git help commit",
    ),
    e(
        "git version",
        "Displays the version of Git installed on your system",
        "git version",
    ),
    e(
        "git init",
        "Initialize a new Git repository in the current directory, creating .git subdirectory",
        "git init",
    ),
    e(
        "git clone <repository_url>",
        "Creates a copy of a remote Git repository on your local machine with all files, branches, and commit history",
        "git clone https://github.com/user/repo.git",
    ),
    e(
        "git clone --branch <branch-name> <repository-url>",
        "Clone a specific Git branch from remote repository",
        "git clone --branch develop https://github.com/user/repo.git",
    ),
    e(
        "git clone -b <branch-name> --single-branch <repository-url>",
        "Clone only a specific branch without full history of all branches",
        "git clone -b develop --single-branch https://github.com/user/repo.git",
    ),
    e(
        "git status",
        "Shows the current state of the Git repository's working directory and staging area",
        "git status",
    ),
];

const WORKING_DIRECTORY_AND_STAGING_AREA: &[CommandEntry] = &[
    e(
        "git checkout .",
        "Discards all changes in the working directory, reverting files to their last committed state",
        "git checkout .",
    ),
    e(
        "git checkout -- <file>",
        "Discard changes to a specific file",
        "git checkout -- index.html",
    ),
    e(
        "git reset -p",
        "Allows you to interactively reset changes in the working directory with fine-grained control",
        "git reset -p",
    ),
    e(
        "git add <file>",
        "Adds a specific file to the staging area, preparing it for inclusion in the next commit",
        "git add index.html",
    ),
    e(
        "git add -A",
        "Add all new and changed files to the staging area",
        "git add -A",
    ),
    e(
        "git add .",
        "Add all new and changed files to the staging area",
        "git add .",
    ),
    e(
        "git add -p",
        "Interactively stage changes by breaking them into chunks (hunks) for selective adding",
        "git add -p",
    ),
    e(
        "git add -i",
        "Enters interactive mode with text-based menu for staging individual changes, updating files, or viewing status",
        "git add -i",
    ),
    e(
        "git rm <file>",
        "Removes a file from the working directory and stages the removal",
        "git rm old-file.txt",
    ),
    e(
        "git rm -r <file>",
        "Remove a file or folder recursively",
        "git rm -r folder",
    ),
    e(
        "git rm --cached <file>",
        "Stop a file being tracked (removes from staging area but keeps in working directory)",
        "git rm --cached config.txt",
    ),
    e(
        "git mv <old_path> <new_path>",
        "Move or rename a file or directory within Git repository and automatically stages the change",
        "git mv old-name.txt new-name.txt",
    ),
    e(
        r#"git commit -m "message""#,
        "Creates a new commit with staged changes and a descriptive message",
        r#"git commit -m "Add new feature""#,
    ),
];

const WORKING_WITH_BRANCHES: &[CommandEntry] = &[
    e(
        "git branch <branch_name>",
        "Creates a new branch",
        "git branch feature-branch",
    ),
    e(
        "git checkout <branch_name>",
        "Switches to the specified branch and updates the working directory",
        "git checkout main",
    ),
    e(
        "git checkout -",
        "Switch to the branch last checked out",
        "git checkout -",
    ),
    e(
        "git checkout -b <branch_name> origin/<branch_name>",
        "Clone a remote branch and switch to it",
        "git checkout -b feature origin/feature",
    ),
    e(
        "git branch",
        "Lists all branches",
        "git branch",
    ),
    e(
        "git branch -d <branch_name>",
        "Deletes a branch",
        "git branch -d feature-branch",
    ),
    e(
        "git push --delete <remote> <branch>",
        "Deletes a remote branch",
        "git push --delete origin feature-branch",
    ),
    e(
        "git branch -m <old_name> <new_name>",
        "Renames a branch",
        "git branch -m old-feature new-feature",
    ),
    e(
        "git checkout -b <new_branch>",
        "Creates and switches to a new branch based on the current branch",
        "git checkout -b new-feature",
    ),
    e(
        "git switch <branch>",
        "Switches the working directory to the specified branch",
        "git switch main",
    ),
    e(
        "git show-branch <branch>",
        "Displays summary of commit history and branch relationships showing where each branch diverged",
        "git show-branch feature",
    ),
    e(
        "git show-branch --all",
        "Shows commit history and relationships for all branches and their commits",
        "git show-branch --all",
    ),
    e(
        "git branch -r",
        "Lists all remote branches that your local repository is aware of",
        "git branch -r",
    ),
    e(
        "git branch -a",
        "Lists all branches including both local and remote branches",
        "git branch -a",
    ),
    e(
        "git branch --merged",
        "Lists all branches that have been fully merged into current branch and can be safely deleted",
        "git branch --merged",
    ),
    e(
        "git branch --no-merged",
        "Lists branches that have not been fully merged into current branch",
        "git branch --no-merged",
    ),
];

const MERGING_IN_GIT: &[CommandEntry] = &[
    e(
        "git merge <branch>",
        "Integrates changes from specified branch into current branch, combining their histories",
        "git merge feature-branch",
    ),
    e(
        "git merge --no-ff <branch>",
        "Merges branch always creating a new merge commit even if fast-forward merge is possible",
        "git merge --no-ff feature-branch",
    ),
    e(
        "git merge --squash <branch>",
        "Combines all changes from specified branch into single commit without merging branch history",
        "git merge --squash feature-branch",
    ),
    e(
        "git merge --abort",
        "Cancels ongoing merge process and restores state before merge started",
        "git merge --abort",
    ),
    e(
        "git merge -s ours <branch>",
        "Performs merge using 'ours' strategy, keeping current branch changes and discarding other branch changes",
        "git merge -s ours feature-branch",
    ),
    e(
        "git merge --strategy=ours <branch>",
        "Same as above but expanded version - merges histories without integrating changes from other branch",
        "git merge --strategy=ours feature-branch",
    ),
    e(
        "git merge --strategy=theirs <branch>",
        "Merges using 'theirs' strategy, resolving conflicts by favoring changes from branch being merged",
        "git merge --strategy=theirs feature-branch",
    ),
];

const GIT_REMOTES: &[CommandEntry] = &[
    e(
        "git fetch",
        "Fetches changes from remote repository but does not merge them into current branch",
        "git fetch",
    ),
    e(
        "git pull",
        "Fetches changes from remote repository and immediately merges them into current branch",
        "git pull",
    ),
    e(
        "git push",
        "Uploads your local branch's changes to a remote repository",
        "git push",
    ),
    e(
        "git push --all",
        "Push changes to remote repository all branches",
        "git push --all",
    ),
    e(
        "git push -f",
        "Push changes to remote repository (Force)",
        "git push -f",
    ),
    e(
        "git remote",
        "Lists the names of remote repositories configured for your local repository",
        "git remote",
    ),
    e(
        "git remote -v",
        "Displays URLs of remote repositories showing both fetch and push URLs",
        "git remote -v",
    ),
    e(
        "git remote add <name> <url>",
        "Adds new remote repository with specified name and URL to local repository configuration",
        "git remote add origin https://github.com/user/repo.git",
    ),
    e(
        "git remote remove <name>",
        "Deletes specified remote repository connection from local git configuration",
        "git remote remove origin",
    ),
    e(
        "git remote rm <name>",
        "Shorthand version of git remote remove",
        "git remote rm origin",
    ),
    e(
        "git remote rename <old_name> <new_name>",
        "Changes name of existing remote repository connection",
        "git remote rename origin upstream",
    ),
    e(
        "git remote set-url <name> <newurl>",
        "Changes URL of existing remote repository connection",
        "git remote set-url origin https://github.com/newuser/repo.git",
    ),
    e(
        "git fetch <remote>",
        "Retrieves latest changes from specified remote repository without merging",
        "git fetch origin",
    ),
    e(
        "git pull <remote>",
        "Fetches changes from specified remote repository and merges them into current branch",
        "git pull origin",
    ),
    e(
        "git remote update",
        "Fetches updates for all remotes tracked by the repository",
        "git remote update",
    ),
    e(
        "git push <remote> <branch>",
        "Uploads specified branch from local repository to given remote repository",
        "git push origin main",
    ),
    e(
        "git push -u <remote> <branch>",
        "Push changes to remote repository and remember the branch",
        "git push -u origin main",
    ),
    e(
        "git push <remote> --delete <branch>",
        "Removes specified branch from remote repository",
        "git push origin --delete feature-branch",
    ),
    e(
        "git remote show <remote>",
        "Displays detailed information about specified remote repository including URL and branch tracking",
        "git remote show origin",
    ),
    e(
        "git ls-remote <repository>",
        "Lists references and commit IDs from specified remote repository without cloning",
        "git ls-remote origin",
    ),
    e(
        "git push origin <branch> --set-upstream",
        "Pushes local branch to remote and sets up tracking for future push/pull commands",
        "git push origin feature --set-upstream",
    ),
    e(
        "git remote add upstream <repository>",
        "Adds upstream remote to track original repository (commonly used with forks)",
        "git remote add upstream https://github.com/original/repo.git",
    ),
    e(
        "git fetch upstream",
        "Retrieves updates from upstream remote repository",
        "git fetch upstream",
    ),
    e(
        "git pull upstream <branch>",
        "Fetches and merges changes from upstream remote branch into current branch",
        "git pull upstream main",
    ),
];

const AMENDING_COMMITS: &[CommandEntry] = &[
    e(
        "git commit --amend",
        "Modifies the most recent commit, combining staged changes",
        "git commit --amend",
    ),
    e(
        r#"git commit --amend -m "new message""#,
        "Amends the commit message of the most recent commit",
        r#"git commit --amend -m "Updated commit message""#,
    ),
    e(
        "git commit --fixup=HEAD",
        "Creates fixup commit intended to correct most recent commit, marked with fixup! prefix",
        "git commit --fixup=HEAD",
    ),
];

const STASHING_IN_GIT: &[CommandEntry] = &[
    e(
        "git stash",
        "Stash changes in a dirty working directory - temporarily saves uncommitted changes",
        "git stash",
    ),
    e(
        r#"git stash -m "message""#,
        "Stashes changes with a custom message for easier identification",
        r#"git stash -m "Work in progress""#,
    ),
    e(
        "git stash show",
        "Displays summary of changes in most recent stash entry showing modified files",
        "git stash show",
    ),
    e(
        "git stash list",
        "Shows all stashed changes in repository in numbered list format",
        "git stash list",
    ),
    e(
        "git stash pop",
        "Applies most recent stash and immediately removes it from stash list",
        "git stash pop",
    ),
    e(
        "git stash drop",
        "Removes most recent stash entry without applying it to working directory",
        "git stash drop",
    ),
    e(
        "git stash apply",
        "Reapplies most recently stashed changes without removing them from stash list",
        "git stash apply",
    ),
    e(
        "git stash clear",
        "Remove all stashed entries - permanently deleting all saved changes",
        "git stash clear",
    ),
    e(
        "git stash branch <branch>",
        "Creates new branch from commit where you stashed changes and applies stashed changes to it",
        "git stash branch feature-stash",
    ),
];

const GIT_TAGGING: &[CommandEntry] = &[
    e(
        "git tag <tag_name>",
        "Creates new lightweight tag pointing to current commit for marking releases or milestones",
        "git tag v1.0",
    ),
    e(
        r#"git tag -a <tag_name> -m "message""#,
        "Creates annotated tag with metadata like tagger name, email, date, and message",
        r#"git tag -a v1.0 -m "Version 1.0 release""#,
    ),
    e(
        "git tag -d <tag_name>",
        "Deletes specified tag from local repository",
        "git tag -d v1.0",
    ),
    e(
        "git tag -f <tag> <commit>",
        "Forces a tag to point to different commit",
        "git tag -f v1.0 abc123",
    ),
    e(
        "git show <tag_name>",
        "Displays detailed information about specified tag including commit and annotations",
        "git show v1.0",
    ),
    e(
        "git push origin <tag_name>",
        "Uploads specified tag to remote repository making it available to others",
        "git push origin v1.0",
    ),
    e(
        "git push origin --tags",
        "Pushes all local tags to remote repository synchronizing all tags",
        "git push origin --tags",
    ),
    e(
        "git push --follow-tags",
        "Pushes both commits and tags together",
        "git push --follow-tags",
    ),
    e(
        "git fetch --tags",
        "Retrieves all tags from default remote repository without affecting current branches",
        "git fetch --tags",
    ),
];

const REVERTING_CHANGES_IN_GIT: &[CommandEntry] = &[
    e(
        "git checkout -- <file>",
        "Discards changes in specified file from working directory, reverting to last commit state",
        "git checkout -- index.html",
    ),
    e(
        "git revert <commit>",
        "Creates new commit that undoes changes in specified commit while preserving history",
        "git revert abc123",
    ),
    e(
        "git revert -n <commit>",
        "Reverts a commit but does not automatically commit the result",
        "git revert -n abc123",
    ),
    e(
        "git reset",
        "Resets current HEAD to specified state with options for staging area and working directory",
        "git reset",
    ),
    e(
        "git reset --soft <commit>",
        "Moves HEAD to specified commit keeping index and working directory unchanged, changes remain staged",
        "git reset --soft HEAD~1",
    ),
    e(
        "git reset --mixed <commit>",
        "Moves HEAD and updates index to match commit but leaves working directory unchanged",
        "git reset --mixed HEAD~1",
    ),
    e(
        "git reset --hard <commit>",
        "Moves HEAD and updates both index and working directory to match commit, discarding all changes",
        "git reset --hard HEAD~1",
    ),
];

const INSPECTION_COMPARISON: &[CommandEntry] = &[
    e(
        "git log --summary",
        "View changes with detailed information",
        "git log --summary",
    ),
    e(
        "git log --pretty=short",
        "View changes in brief format",
        "git log --pretty=short",
    ),
    e(
        "git diff <source_branch> <target_branch>",
        "Preview changes before merging between branches",
        "git diff feature main",
    ),
];

const UNDO_OPERATIONS: &[CommandEntry] = &[
    e(
        "git checkout <commit_id>",
        "Return to previous commit (detached HEAD state)",
        "git checkout abc123",
    ),
    e(
        "git reset --soft HEAD^",
        "Undo last commit, keep changes in staging area",
        "git reset --soft HEAD^",
    ),
    e(
        "git reset --hard HEAD^",
        "Undo the last commit and remove the file from the staging area as well",
        "git reset --hard HEAD^",
    ),
    e(
        "git reset --hard HEAD^^",
        "Undo the last 2 commits and all changes",
        "git reset --hard HEAD^^",
    ),
    e(
        "git checkout <file/to/restore>",
        "Restore a file to a previous commit",
        "git checkout README.md",
    ),
];

const ADVANCED_BRANCH_OPERATIONS: &[CommandEntry] = &[
    e(
        "git reset --hard <branch_name>",
        "Replace your current branch with specified branch completely",
        "git reset --hard main",
    ),
    e(
        "git merge <branch_name> --allow-unrelated-histories -X theirs",
        "Merge and use their version for all conflicts",
        "git merge feature --allow-unrelated-histories -X theirs",
    ),
    e(
        "git fetch origin <branch_name>",
        "Fetch specific branch from remote",
        "git fetch origin main",
    ),
    e(
        "git reset --hard origin/<branch_name>",
        "Force sync current branch with remote branch",
        "git reset --hard origin/main",
    ),
    e(
        "git pull <remote_name> <branch_name>",
        "Pull changes from a particular remote branch into your current local branch",
        "git pull origin feature",
    ),
];

const VIEWING_HISTORY_LOGS: &[CommandEntry] = &[
    e(
        "git log",
        "Displays the commit history showing chronological sequence of commits",
        "git log",
    ),
    e(
        "git log --oneline",
        "Displays summary of commits with one line each for condensed view",
        "git log --oneline",
    ),
    e(
        "git log --graph",
        "Shows graphical representation of commit history with branch visualization",
        "git log --graph",
    ),
    e(
        "git log --stat",
        "Displays file statistics along with commit history showing changed files",
        "git log --stat",
    ),
    e(
        r#"git log --pretty=format:"%h %s""#,
        "Formats log output according to specified format showing hash and subject",
        r#"git log --pretty=format:"%h %s""#,
    ),
    e(
        r#"git log --pretty=format:"%h - %an, %ar : %s""#,
        "Provides human-readable format showing hash, author, date, and subject",
        r#"git log --pretty=format:"%h - %an, %ar : %s""#,
    ),
    e(
        "git log --author=<author>",
        "Shows commits made by specified author",
        r#"git log --author="John Doe""#,
    ),
    e(
        "git log --before=<date>",
        "Shows commits made before specified date",
        r#"git log --before="2023-01-01""#,
    ),
    e(
        "git log --after=<date>",
        "Shows commits made after specified date (same as --since)",
        r#"git log --after="2023-01-01""#,
    ),
    e(
        "git log --cherry-pick",
        "Omits commits that are equivalent between two branches",
        "git log --cherry-pick",
    ),
    e(
        "git log --follow <file>",
        "Shows commits for a file including renames and moves",
        "git log --follow README.md",
    ),
    e(
        "git log --show-signature",
        "Displays GPG signature information for commits",
        "git log --show-signature",
    ),
    e(
        "git shortlog",
        "Summarizes git log output by author showing commit counts",
        "git shortlog",
    ),
    e(
        "git shortlog -sn",
        "Summarizes git log output by author with commit counts in numerical format",
        "git shortlog -sn",
    ),
    e(
        "git log --simplify-by-decoration",
        "Shows only commits that are referenced by tags or branches",
        "git log --simplify-by-decoration",
    ),
    e(
        "git log --no-merges",
        "Omits merge commits from the log showing only regular commits",
        "git log --no-merges",
    ),
    e(
        "git whatchanged",
        "Lists commit data in format similar to commit log with file changes",
        "git whatchanged",
    ),
    e(
        "git diff-tree --pretty --name-only --root <commit>",
        "Shows detailed information for a commit tree including file names",
        "git diff-tree --pretty --name-only --root abc123",
    ),
    e(
        "git log --first-parent",
        "Shows only commits of current branch excluding those merged from other branches",
        "git log --first-parent",
    ),
];

const GIT_DIFFS: &[CommandEntry] = &[
    e(
        "git diff",
        "Shows differences between working directory and index, or between commits/branches",
        "git diff",
    ),
    e(
        "git diff --stat",
        "Shows summary of changes between working directory and index with file modification counts",
        "git diff --stat",
    ),
    e(
        "git diff --stat <commit>",
        "Views changes between a commit and the working directory",
        "git diff --stat HEAD~1",
    ),
    e(
        "git diff --stat <commit1> <commit2>",
        "Provides summary of changes between two commits showing altered files",
        "git diff --stat abc123 def456",
    ),
    e(
        "git diff --stat <branch1> <branch2>",
        "Summarizes differences between two branches indicating changed files",
        "git diff --stat main feature",
    ),
    e(
        "git diff --name-only <commit>",
        "Shows only names of files that changed in specified commit",
        "git diff --name-only HEAD~1",
    ),
    e(
        "git diff --cached",
        "Shows differences between staged changes and last commit",
        "git diff --cached",
    ),
    e(
        "git diff HEAD",
        "Shows differences between working directory and latest commit",
        "git diff HEAD",
    ),
    e(
        "git diff <branch1> <branch2>",
        "Shows differences between tips of two branches",
        "git diff main feature",
    ),
    e(
        "git difftool",
        "Launches external diff tool to compare changes",
        "git difftool",
    ),
    e(
        "git difftool <commit1> <commit2>",
        "Uses diff tool to show differences between two specified commits",
        "git difftool abc123 def456",
    ),
    e(
        "git difftool <branch1> <branch2>",
        "Opens diff tool to compare changes between two branches",
        "git difftool main feature",
    ),
    e(
        "git cherry <branch>",
        "Compares commits in current branch against another branch showing unique commits",
        "git cherry main",
    ),
];

const GIT_FLOW: &[CommandEntry] = &[
    e(
        "git flow init",
        "Initializes repository for git-flow branching model with structured branch strategy",
        "git flow init",
    ),
    e(
        "git flow feature start <feature>",
        "Starts new feature branch in git-flow model",
        "git flow feature start user-auth",
    ),
    e(
        "git flow feature finish <feature>",
        "Finishes feature branch in git-flow merging back to develop",
        "git flow feature finish user-auth",
    ),
];

const EXPLORING_GIT_REFERENCES: &[CommandEntry] = &[
    e(
        "git show-ref --heads",
        "Lists references to all heads (branches) showing commit hashes",
        "git show-ref --heads",
    ),
    e(
        "git show-ref --tags",
        "Lists references to all tags showing commit hashes",
        "git show-ref --tags",
    ),
];

const HOW_TO_CONFIGURE_GIT: &[CommandEntry] = &[
    e(
        r#"git config --global user.name "Your Name""#,
        "Sets the user name on a global level for all repositories",
        r#"git config --global user.name "John Doe""#,
    ),
    e(
        r#"git config --global user.email "your_email@example.com""#,
        "Sets the user email on a global level for all repositories",
        r#"git config --global user.email "john@example.com""#,
    ),
    e(
        "git config --global core.editor <editor>",
        "Sets the default text editor for Git operations",
        "git config --global core.editor nano",
    ),
    e(
        "git config --global core.excludesfile <file>",
        "Sets the global ignore file for all repositories",
        "git config --global core.excludesfile ~/.gitignore_global",
    ),
    e(
        "git config --list",
        "Lists all the configuration settings currently active",
        "git config --list",
    ),
    e(
        "git config --list --show-origin",
        "Lists all config variables showing their origins (global, local, system)",
        "git config --list --show-origin",
    ),
    e(
        "git config <key>",
        "Retrieves the value for the specified configuration key",
        "git config user.name",
    ),
    e(
        "git config --get <key>",
        "Retrieves the value for the specified configuration key (explicit version)",
        "git config --get user.email",
    ),
    e(
        "git config --unset <key>",
        "Removes the specified configuration key from current scope",
        "git config --unset user.name",
    ),
    e(
        "git config --global --unset <key>",
        "Removes the specified configuration key globally",
        "git config --global --unset user.name",
    ),
];

const GIT_SECURITY: &[CommandEntry] = &[
    e(
        "git config --global user.signingKey <key>",
        "Configures the GPG key for signing commits and tags ensuring authenticity",
        "git config --global user.signingKey ABC123",
    ),
    e(
        "git config --global commit.gpgSign true",
        "Automatically signs all commits with GPG for enhanced security",
        "git config --global commit.gpgSign true",
    ),
];

const HOW_TO_SET_ALIASES_IN_GIT: &[CommandEntry] = &[
    e(
        "git config --global alias.ci commit",
        "Sets git ci as an alias for git commit command",
        "git config --global alias.ci commit",
    ),
    e(
        "git config --global alias.st status",
        "Sets git st as an alias for git status command",
        "git config --global alias.st status",
    ),
    e(
        "git config --global alias.co checkout",
        "Sets git co as an alias for git checkout command",
        "git config --global alias.co checkout",
    ),
    e(
        "git config --global alias.br branch",
        "Sets git br as an alias for git branch command",
        "git config --global alias.br branch",
    ),
    e(
        r#"git config --global alias.graph "log --graph --all --oneline --decorate""#,
        "Creates alias for detailed graph of repository history",
        r#"git config --global alias.graph "log --graph --all --oneline --decorate""#,
    ),
];

const REBASING_IN_GIT: &[CommandEntry] = &[
    e(
        "git rebase <branch>",
        "Re-applies commits on top of another base tip for linear project history and smooth integration",
        "git rebase main",
    ),
    e(
        "git rebase --interactive <branch>",
        "Starts interactive rebase allowing you to edit, reorder, squash, or drop commits",
        "git rebase --interactive HEAD~3",
    ),
];

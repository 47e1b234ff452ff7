//! Subcommands and their results.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use drivepath_kernel::{DrivePaths, Item, ItemId, PathOps};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the item at a path.
    Resolve {
        path: String,
        /// List every item at the path, not just the first.
        #[arg(long)]
        all: bool,
    },
    /// List every path an item is reachable under.
    Paths { id: String },
    /// Exit 0 if the path resolves, 1 otherwise.
    Exists { path: String },
    /// Create a folder and any missing ancestors.
    Mkdir { path: String },
}

/// What a command produced.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Items { items: Vec<Item> },
    Paths { id: ItemId, paths: BTreeSet<String> },
    Exists { path: String, exists: bool },
}

impl Report {
    /// Whether the process should exit successfully.
    pub fn success(&self) -> bool {
        match self {
            Report::Items { items } => !items.is_empty(),
            Report::Paths { .. } => true,
            Report::Exists { exists, .. } => *exists,
        }
    }

    /// Tab-separated text, one record per line.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        match self {
            Report::Items { items } => {
                for item in items {
                    let kind = if item.is_folder() { "folder" } else { item.mime_type.as_str() };
                    let _ = writeln!(out, "{}\t{}\t{}", item.id, kind, item.title);
                }
            }
            Report::Paths { paths, .. } => {
                for path in paths {
                    let _ = writeln!(out, "/{path}");
                }
            }
            Report::Exists { exists, .. } => {
                let _ = writeln!(out, "{exists}");
            }
        }
        out
    }
}

pub async fn execute(command: &Command, paths: &DrivePaths) -> Result<Report> {
    let report = match command {
        Command::Resolve { path, all: true } => Report::Items {
            items: paths.get_items_by_path(path).await?,
        },
        Command::Resolve { path, all: false } => Report::Items {
            items: vec![paths.get_item_by_path(path).await?],
        },
        Command::Paths { id } => {
            let item = paths.get_item_by_id(&ItemId::new(id.as_str())).await?;
            Report::Paths {
                paths: paths.get_paths(&item).await?,
                id: item.id,
            }
        }
        Command::Exists { path } => Report::Exists {
            exists: paths.path_exists(path).await?,
            path: path.clone(),
        },
        Command::Mkdir { path } => Report::Items {
            items: vec![paths.ensure_dir(path).await?],
        },
    };
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use drivepath_kernel::{DriveError, SnapshotStore};
    use std::sync::Arc;

    async fn setup(dir: &tempfile::TempDir) -> DrivePaths {
        let store = SnapshotStore::open(dir.path().join("drive.json")).await.unwrap();
        DrivePaths::from_arc(Arc::new(store))
    }

    #[tokio::test]
    async fn test_mkdir_then_resolve() {
        let dir = tempfile::tempdir().unwrap();
        let paths = setup(&dir).await;

        let made = execute(&Command::Mkdir { path: "a/b".into() }, &paths)
            .await
            .unwrap();
        let Report::Items { items } = &made else {
            panic!("expected items, got {made:?}");
        };
        let id = items[0].id.clone();

        let found = execute(
            &Command::Resolve {
                path: "/a/b".into(),
                all: false,
            },
            &paths,
        )
        .await
        .unwrap();
        assert!(found.success());
        assert!(found.render_text().starts_with(&format!("{id}\tfolder\tb")));
    }

    #[tokio::test]
    async fn test_mkdir_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let paths = setup(&dir).await;
            execute(&Command::Mkdir { path: "kept".into() }, &paths)
                .await
                .unwrap();
        }
        let paths = setup(&dir).await;
        let report = execute(&Command::Exists { path: "kept".into() }, &paths)
            .await
            .unwrap();
        assert!(report.success());
    }

    #[tokio::test]
    async fn test_exists_false_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let paths = setup(&dir).await;
        let report = execute(&Command::Exists { path: "nope".into() }, &paths)
            .await
            .unwrap();
        assert!(!report.success());
        assert_eq!(report.render_text(), "false\n");
    }

    #[tokio::test]
    async fn test_resolve_missing_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let paths = setup(&dir).await;
        let err = execute(
            &Command::Resolve {
                path: "nope".into(),
                all: false,
            },
            &paths,
        )
        .await
        .unwrap_err();
        assert!(err.downcast_ref::<DriveError>().is_some_and(DriveError::is_not_found));
    }

    #[tokio::test]
    async fn test_paths_text_is_slash_prefixed() {
        let dir = tempfile::tempdir().unwrap();
        let paths = setup(&dir).await;
        let folder = paths.ensure_dir("x/y").await.unwrap();

        let report = execute(
            &Command::Paths {
                id: folder.id.to_string(),
            },
            &paths,
        )
        .await
        .unwrap();
        assert_eq!(report.render_text(), "/x/y\n");
    }

    #[tokio::test]
    async fn test_json_report_is_tagged() {
        let dir = tempfile::tempdir().unwrap();
        let paths = setup(&dir).await;
        let report = execute(&Command::Exists { path: "".into() }, &paths)
            .await
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "exists");
        assert_eq!(json["exists"], true);
    }
}

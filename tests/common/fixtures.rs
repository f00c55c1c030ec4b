// Documentation tree fixtures for integration testing

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Root overview with a development section
#[allow(dead_code)]
pub const ROOT_DOC: &str = "\
# TrueNAS Middleware

The middleware daemon exposes the public API.

## Architecture

Plugins register services with the main process.

## Development Guidelines

Run the linters before sending a change.
";

/// Plugin architecture overview
#[allow(dead_code)]
pub const PLUGINS_DOC: &str = "\
# Plugin Architecture

## Service Types and Base Classes

ConfigService, CRUDService and Service.

## Common Plugin Patterns

Use private methods for internal helpers.

## Key Plugins by Category

Storage, sharing and system plugins.
";

#[allow(dead_code)]
pub const API_DOC: &str = "\
# API

## Overview

The API is versioned.

## Directory Structure

One module per version.

## Key Concepts

Models describe every argument.

## Best Practices

Pin versions in clients.
";

#[allow(dead_code)]
pub const TESTING_DOC: &str = "\
# Testing

## Overview

Integration tests run against a live system.

## Test Structure

Tests live under tests/api2.

## Common Patterns

Use fixtures for pools and shares.
";

/// Synthetic documentation tree on a temporary directory
#[allow(dead_code)]
pub struct DocTree {
    pub dir: TempDir,
}

#[allow(dead_code)]
impl DocTree {
    /// Empty root
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Create a tree with the given (relative path, content) files
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let tree = Self::empty();
        for (path, content) in files {
            tree.write(path, content);
        }
        tree
    }

    /// Middleware-shaped tree covering every category
    pub fn middleware() -> Self {
        Self::with_files(&[
            ("CLAUDE.md", ROOT_DOC),
            ("src/middlewared/plugins/CLAUDE.md", PLUGINS_DOC),
            (
                "src/middlewared/plugins/backup/CLAUDE.md",
                "# Backup\n\nBackupService syncs datasets to cloud storage.\n",
            ),
            (
                "src/middlewared/plugins/pool/CLAUDE.md",
                "# Pool\n\n## Scrub\n\nScrub tasks verify pool data.\n\n## Import\n\nImport an exported pool.\n",
            ),
            (
                "src/middlewared/plugins/smb/CLAUDE.md",
                "# SMB\n\n## Shares\n\nShare configuration.\n\n## Auth\n\nKerberos and local users.\n",
            ),
            ("src/middlewared/api/CLAUDE.md", API_DOC),
            ("tests/CLAUDE.md", TESTING_DOC),
            (
                "src/middlewared/subsystems/alert/CLAUDE.md",
                "# Alert\n\nAlert sources raise alerts on pool and disk events.\n",
            ),
            (
                "src/middlewared/subsystems/account/CLAUDE.md",
                "# Account\n\nLocal users and groups.\n",
            ),
        ])
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Write a file, creating parent directories
    pub fn write(&self, rel: &str, content: &str) {
        let full_path = self.join(rel);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn remove(&self, rel: &str) {
        fs::remove_file(self.join(rel)).expect("Failed to remove file");
    }
}

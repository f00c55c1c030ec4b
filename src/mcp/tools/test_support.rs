//! Shared fixtures for tool handler unit tests

use crate::core::config::Config;
use crate::core::services::Services;
use crate::mcp::protocol::{ContentBlock, ToolResult};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

pub fn write_doc(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Small documentation tree covering every category
pub fn setup_services() -> (Arc<Services>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write_doc(
        root,
        "CLAUDE.md",
        "# Middleware\nOverview text\n## Development Guidelines\nRun the linters\n",
    );
    write_doc(
        root,
        "src/plugins/CLAUDE.md",
        "# Plugin Architecture\n## Service Types and Base Classes\nConfigService, CRUDService\n",
    );
    write_doc(
        root,
        "src/plugins/backup/CLAUDE.md",
        "# Backup Plugin\nImplements BackupService for cloud sync\n",
    );
    write_doc(
        root,
        "src/plugins/smb/CLAUDE.md",
        "# SMB Plugin\n## Shares\nshare config\n## Auth\nkerberos\n",
    );
    write_doc(
        root,
        "src/api/CLAUDE.md",
        "# API\n## Overview\nversioned\n## Best Practices\npin versions\n",
    );
    write_doc(
        root,
        "tests/CLAUDE.md",
        "# Tests\n## Overview\npytest based\n## Common Patterns\nfixtures\n",
    );
    write_doc(
        root,
        "subsystems/alert/CLAUDE.md",
        "# Alert Subsystem\nalert sources and policies\n",
    );

    let services = Services::start(Config::with_root(root)).unwrap();
    (Arc::new(services), temp_dir)
}

pub fn result_text(result: &ToolResult) -> &str {
    match &result.content[0] {
        ContentBlock::Text { text } => text,
    }
}

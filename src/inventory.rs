//! Inventory file rendering and writing
//!
//! The inventory file is plain text in the grouped hosts format Ansible
//! consumes: a header comment, then one bracketed section per host group
//! with one host name per line. Rendering is a pure function of the
//! environment ID, the timestamp and the grouped hosts, so the same input
//! always produces byte-identical output.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ForemanError, Result};
use crate::grouping::GroupedResult;

/// Build the inventory file path: home directory + file prefix + environment ID
pub fn inventory_path(hfile: &str, environment_id: &str) -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(format!("{}{}", hfile, environment_id)))
        .ok_or_else(|| {
            ForemanError::Settings("Could not determine the home directory".to_string())
        })
}

/// Render the inventory file contents.
///
/// One header comment line, then per group (in first-seen order): a blank
/// line, the bracketed group header, and the group's hosts one per line.
/// An empty grouping renders the header line only.
pub fn render(environment_id: &str, timestamp: &str, hosts: &GroupedResult<String>) -> String {
    let mut out = format!(
        "# Ansible hosts file for Foreman inventory id {} generated on {}\n",
        environment_id, timestamp
    );

    for (group, names) in hosts.iter() {
        out.push_str(&format!("\n[{}]\n", group));
        for name in names {
            out.push_str(name);
            out.push('\n');
        }
    }

    out
}

/// Write the rendered inventory to `path`, truncating any existing file
pub fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| ForemanError::FileWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

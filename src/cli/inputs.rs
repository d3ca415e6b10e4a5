//! Input discovery.

use anyhow::{Result, bail};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Expand the command-line inputs into a list of files.
///
/// Files are taken as given, whatever their extension. Directories are
/// searched recursively for files with `extension`, in sorted order. Input
/// order is otherwise preserved and duplicates are dropped.
pub fn collect_inputs(inputs: &[PathBuf], extension: &str) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();

    for input in inputs {
        if input.is_dir() {
            for file in discover(input, extension) {
                if !files.contains(&file) {
                    files.push(file);
                }
            }
        } else if input.exists() {
            if !files.contains(input) {
                files.push(input.clone());
            }
        } else {
            bail!("input not found: {}", input.display());
        }
    }

    Ok(files)
}

fn discover(dir: &Path, extension: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == extension))
        .collect();
    files.sort();
    files
}

/// Where `--out-dir` puts the output for `input`: `<out_dir>/<stem>.<extension>`.
pub fn output_path(out_dir: &Path, input: &Path, extension: &str) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_else(|| "out".into());
    name.push(".");
    name.push(extension);
    out_dir.join(name)
}

/// Output paths for every input, in input order.
///
/// Fails when two inputs share a stem (`a/x.php`, `b/x.php`), since the
/// second output would overwrite the first.
pub fn output_paths(out_dir: &Path, inputs: &[PathBuf], extension: &str) -> Result<Vec<PathBuf>> {
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();
    let mut outputs = Vec::with_capacity(inputs.len());

    for input in inputs {
        let output = output_path(out_dir, input, extension);
        if let Some(previous) = claimed.insert(output.clone(), input) {
            bail!(
                "{} and {} would both be written to {}",
                previous.display(),
                input.display(),
                output.display()
            );
        }
        outputs.push(output);
    }

    Ok(outputs)
}

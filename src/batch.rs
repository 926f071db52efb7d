//! Directory-level conversion: scan, convert in parallel, write results.

use crate::error::{Error, Result};
use crate::language::registry;
use rayon::prelude::*;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_LANGUAGE: &str = "javadoc";
pub const DEFAULT_HEADINGS_LEVEL: usize = 2;

/// Any non-empty contents.
const DEFAULT_FILE_CONTENTS_PATTERN: &str = r"\S+";

/// Options for [`from_source_dir`] and [`output`].
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub language: String,
    pub headings_level: usize,
    /// Regex a file name must match; every file when unset.
    pub include_filenames: Option<String>,
    /// Regex the file contents must match; non-empty contents when unset.
    pub include_file_contents: Option<String>,
    /// Write one `<name>.md` per source into this directory.
    pub output_dir: Option<PathBuf>,
    /// Concatenate all documents into this file.
    pub output_file: Option<PathBuf>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            headings_level: DEFAULT_HEADINGS_LEVEL,
            include_filenames: None,
            include_file_contents: None,
            output_dir: None,
            output_file: None,
        }
    }
}

/// Convert named sources, keyed the same way as the input.
pub fn from_sources(
    language: &str,
    sources: &BTreeMap<String, String>,
    headings_level: usize,
) -> Result<BTreeMap<String, String>> {
    let converter = registry().get(language)?;
    Ok(sources
        .par_iter()
        .map(|(name, code)| (name.clone(), converter.convert(code, headings_level)))
        .collect())
}

/// Convert every matching file directly inside `dir`.
///
/// Keys are file names up to their first `.`; when two files share a key
/// the one sorting last wins.
pub fn from_source_dir(dir: &Path, options: &BatchOptions) -> Result<BTreeMap<String, String>> {
    let name_filter = options
        .include_filenames
        .as_deref()
        .map(compile_pattern)
        .transpose()?;
    let contents_filter = compile_pattern(
        options
            .include_file_contents
            .as_deref()
            .unwrap_or(DEFAULT_FILE_CONTENTS_PATTERN),
    )?;

    let mut paths = Vec::new();
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    for entry in entries {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name_filter.as_ref().map_or(true, |re| re.is_match(file_name)) {
            paths.push(path);
        }
    }
    // Sort for deterministic output
    paths.sort();

    if paths.is_empty() {
        eprintln!("warning: no files matched in {}", dir.display());
    }

    let loaded: Vec<Option<(String, String)>> = paths
        .par_iter()
        .map(|path| load_source(path, &contents_filter))
        .collect::<Result<_>>()?;

    let sources: BTreeMap<String, String> = loaded.into_iter().flatten().collect();
    from_sources(&options.language, &sources, options.headings_level)
}

/// Convert `dir` and deliver the documents to the configured destination.
///
/// Returns the written paths; when neither an output directory nor an
/// output file is configured the documents go to `stdout` instead.
pub fn output(dir: &Path, options: &BatchOptions, stdout: &mut impl Write) -> Result<Vec<PathBuf>> {
    if options.output_dir.is_some() && options.output_file.is_some() {
        return Err(Error::ConflictingOutputs);
    }

    let documents: Vec<(String, String)> = from_source_dir(dir, options)?
        .into_iter()
        .map(|(name, md)| {
            let doc = format!("# {}\n\n{}", name, md);
            (name, doc)
        })
        .collect();

    if let Some(ref file) = options.output_file {
        if documents.is_empty() {
            return Ok(Vec::new());
        }
        let joined = documents
            .iter()
            .map(|(_, doc)| doc.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        fs::write(file, joined).map_err(|e| Error::io(file, e))?;
        return Ok(vec![file.clone()]);
    }

    if let Some(ref out_dir) = options.output_dir {
        fs::create_dir_all(out_dir).map_err(|e| Error::io(out_dir, e))?;
        let mut written = Vec::new();
        for (name, doc) in &documents {
            let path = out_dir.join(format!("{}.md", name));
            fs::write(&path, doc).map_err(|e| Error::io(&path, e))?;
            written.push(path);
        }
        return Ok(written);
    }

    for (_, doc) in &documents {
        writeln!(stdout, "{}", doc).map_err(|e| Error::io("<stdout>", e))?;
    }
    Ok(Vec::new())
}

fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Read one source file; `None` when it is skipped.
fn load_source(path: &Path, contents_filter: &Regex) -> Result<Option<(String, String)>> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let Ok(contents) = String::from_utf8(bytes) else {
        eprintln!("warning: skipping {}: not valid UTF-8", path.display());
        return Ok(None);
    };
    if !contents_filter.is_match(&contents) {
        return Ok(None);
    }
    Ok(Some((source_name(path), contents)))
}

/// File name up to the first `.`: "Widget.java" → "Widget", "a.b.js" → "a"
fn source_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_name.split_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => file_name,
    }
}

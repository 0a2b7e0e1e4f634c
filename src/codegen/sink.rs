// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Output sinks for emitted artifacts.
//!
//! The emitter hands every artifact to a [`FileSink`] as a
//! path/contents pair; the harness decides where they land (a
//! directory tree, a zip archive, a test map).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::Result;

/// Receives emitted files as path/contents pairs.
pub trait FileSink {
    /// Write one file. Paths use `/` separators and are relative.
    fn write_file(&mut self, path: &str, contents: &[u8]) -> Result<()>;
}

/// In-memory sink, ordered by path.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All files written so far.
    pub fn files(&self) -> &BTreeMap<String, Vec<u8>> {
        &self.files
    }

    /// Contents of one file, if present.
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    /// Contents of one file as UTF-8, if present.
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(|b| std::str::from_utf8(b).ok())
    }
}

impl FileSink for MemorySink {
    fn write_file(&mut self, path: &str, contents: &[u8]) -> Result<()> {
        self.files.insert(path.to_string(), contents.to_vec());
        Ok(())
    }
}

/// Sink writing files under a root directory, creating parents.
#[derive(Debug)]
pub struct DirSink {
    root: PathBuf,
}

impl DirSink {
    /// Create a sink rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileSink for DirSink {
    fn write_file(&mut self, path: &str, contents: &[u8]) -> Result<()> {
        let full = self.root.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_stores_files() {
        let mut sink = MemorySink::new();
        sink.write_file("a/b.msg", b"int32 x\n").unwrap();
        sink.write_file("a/a.msg", b"bool y\n").unwrap();

        assert_eq!(sink.get("a/b.msg"), Some(b"int32 x\n".as_slice()));
        assert_eq!(sink.get_str("a/a.msg"), Some("bool y\n"));
        assert!(sink.get("missing").is_none());

        let paths: Vec<_> = sink.files().keys().cloned().collect();
        assert_eq!(paths, vec!["a/a.msg".to_string(), "a/b.msg".to_string()]);
    }

    #[test]
    fn test_memory_sink_overwrites() {
        let mut sink = MemorySink::new();
        sink.write_file("f", b"one").unwrap();
        sink.write_file("f", b"two").unwrap();
        assert_eq!(sink.get("f"), Some(b"two".as_slice()));
    }

    #[test]
    fn test_dir_sink_writes_nested_paths() {
        let root = std::env::temp_dir().join(format!(
            "protoros_sink_{}_{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .subsec_nanos()
        ));
        let mut sink = DirSink::new(&root);
        sink.write_file("pkg/msg/Test.msg", b"int32 x\n").unwrap();

        let written = fs::read(root.join("pkg/msg/Test.msg")).unwrap();
        assert_eq!(written, b"int32 x\n");
        fs::remove_dir_all(&root).unwrap();
    }
}

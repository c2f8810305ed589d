use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

use ahash::AHasher;

use crate::{BytePosition, Id, Store, span::Span};

pub type FileId = Id<SourceFile>;

impl FileId {
  /// Sentinel for nodes that were built in memory and never came from a file.
  pub const SYNTHETIC: FileId = FileId::new(u32::MAX);
}

#[derive(Default, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SourceFile {
  pub path: PathBuf,
  pub text: String,
  pub line_starts: Vec<BytePosition>,
  pub hash: u64,
}

impl SourceFile {
  pub fn new(
    path: PathBuf,
    text: String,
  ) -> Self {
    let line_starts = compute_line_starts(&text);
    let hash = hash_text(&text);
    Self {
      path,
      text,
      line_starts,
      hash,
    }
  }

  #[inline]
  pub fn len_bytes(&self) -> u32 {
    self.text.len() as u32
  }
}

impl std::fmt::Display for SourceFile {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    write!(f, "(file path: {})", self.path.display())
  }
}

pub struct SourceMap {
  files: Store<SourceFile>,
  by_path: HashMap<PathBuf, FileId>,
}

impl Default for SourceMap {
  fn default() -> Self {
    Self::new()
  }
}

impl SourceMap {
  pub fn new() -> Self {
    Self {
      files: Store::new(),
      by_path: HashMap::new(),
    }
  }

  pub fn add_file<P: Into<PathBuf>>(
    &mut self,
    path: P,
    text: String,
  ) -> FileId {
    let path = normalize_path(path.into());

    if let Some(id) = self.by_path.get(&path) {
      return *id;
    }

    let id = self.files.alloc(SourceFile::new(path.clone(), text));
    self.by_path.insert(path, id);
    id
  }

  pub fn add_virtual(
    &mut self,
    label: &str,
    text: String,
  ) -> FileId {
    let path = PathBuf::from(format!("<{}>", label));

    self.files.alloc(SourceFile::new(path, text))
  }

  #[inline]
  pub fn get(
    &self,
    id: &FileId,
  ) -> &SourceFile {
    self.files.get(id)
  }

  pub fn contains(
    &self,
    id: &FileId,
  ) -> bool {
    self.files.contains(id)
  }

  /// 1-based line and column of `pos`. Positions past the end of the file are clamped.
  pub fn line_col(
    &self,
    file: &FileId,
    pos: BytePosition,
  ) -> (u32, u32) {
    let f = self.get(file);
    let pos = BytePosition(pos.0.min(f.len_bytes()));
    let line = upper_bound_line(&f.line_starts, pos);
    let line_start = f.line_starts[line].0 as usize;
    let slice = &f.text.as_bytes()[line_start..pos.0 as usize];
    let col = unicode_column(slice);

    ((line as u32) + 1, (col as u32) + 1)
  }

  pub fn slice(
    &self,
    span: &Span,
  ) -> &str {
    let f = self.get(&span.file);
    let end = (span.end.0 as usize).min(f.text.len());
    let start = (span.start.0 as usize).min(end);
    f.text.get(start..end).unwrap_or("")
  }
}

/// Canonicalizes the path when it exists on disk, otherwise keeps it as given.
pub fn normalize_path(mut p: PathBuf) -> PathBuf {
  if let Ok(c) = p.canonicalize() {
    p = c;
  }
  p
}

fn compute_line_starts(text: &str) -> Vec<BytePosition> {
  let bytes = text.as_bytes();
  let mut v = Vec::with_capacity(128);
  v.push(BytePosition(0));

  for (i, b) in bytes.iter().enumerate() {
    if *b == b'\n' {
      v.push(BytePosition((i + 1) as u32));
    }
  }
  v
}

fn upper_bound_line(
  starts: &[BytePosition],
  pos: BytePosition,
) -> usize {
  let mut lo = 0usize;
  let mut hi = starts.len();
  while lo + 1 < hi {
    let mid = (lo + hi) / 2;
    if starts[mid].0 <= pos.0 { lo = mid } else { hi = mid }
  }
  lo
}

fn unicode_column(slice: &[u8]) -> usize {
  std::str::from_utf8(slice)
    .map(|s| s.chars().count())
    .unwrap_or(slice.len())
}

fn hash_text(text: &str) -> u64 {
  let mut h = AHasher::default();
  text.hash(&mut h);
  h.finish()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn line_col_is_one_based() {
    let mut sm = SourceMap::new();
    let file = sm.add_virtual("shader", "void Main()\n{\n  goto end;\n}\n".to_string());

    assert_eq!(sm.line_col(&file, BytePosition(0)), (1, 1));
    assert_eq!(sm.line_col(&file, BytePosition(16)), (3, 3));
  }

  #[test]
  fn line_col_clamps_positions_past_the_end() {
    let mut sm = SourceMap::new();
    let file = sm.add_virtual("shader", "x = 1;".to_string());

    assert_eq!(sm.line_col(&file, BytePosition(400)), (1, 7));
  }

  #[test]
  fn slice_returns_span_text() {
    let mut sm = SourceMap::new();
    let file = sm.add_virtual("shader", "lock (x) { }".to_string());
    let span = Span::new(file, BytePosition(0), BytePosition(4));

    assert_eq!(sm.slice(&span), "lock");
  }
}

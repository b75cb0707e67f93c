//! Append-only record of dispatched actions.
//!
//! The journal stores actions, never state. Folding its entries through the
//! reducer from [`AppState::default`] rebuilds the state the recording store
//! reached, which is what [`replay`] and [`replay_until`] do. [`resume`]
//! continues such a fold from a [`Checkpoint`] instead of the first line.
//!
//! Each line is one JSON-serialized [`Action`]:
//!
//! ```text
//! {"type":"setRegions","payload":[{"id":1,"name":"Seoul"}]}
//! {"type":"selectRegion","payload":{"regionId":1}}
//! {"type":"logout"}
//! ```

use crate::action::Action;
use crate::reducer::ReduceFn;
use crate::state::AppState;
use log::warn;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Compute the xxh64 hash of raw line bytes (without trailing newline), hex-encoded.
pub fn line_hash(line: &[u8]) -> String {
    let hash = xxhash_rust::xxh64::xxh64(line, 0);
    format!("{:016x}", hash)
}

/// One decoded journal line.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    pub action: Action,
    /// Byte offset just past this line's newline.
    pub next_offset: u64,
    /// [`line_hash`] of the raw line.
    pub hash: String,
}

/// An open journal file, positioned for appends.
#[derive(Debug)]
pub struct ActionJournal {
    path: PathBuf,
    file: File,
}

impl ActionJournal {
    /// Open or create the journal at `path`.
    ///
    /// Missing parent directories are created. An unterminated last line
    /// left by an interrupted append is cut off, so the next append starts on
    /// a fresh line.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&path)?;

        let len = file.metadata()?.len();
        let keep = line_start_before(&mut file, len)?;
        if keep < len {
            warn!(
                "eatfold: dropping {} bytes of torn write at the end of {}",
                len - keep,
                path.display()
            );
            file.set_len(keep)?;
        }

        Ok(ActionJournal { path, file })
    }

    /// Append an action as a single JSON line.
    ///
    /// Returns the byte offset where the line starts.
    pub fn append(&mut self, action: &Action) -> io::Result<u64> {
        let offset = self.file.seek(SeekFrom::End(0))?;
        let json = serde_json::to_string(action)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        writeln!(self.file, "{json}")?;
        self.file.flush()?;
        Ok(offset)
    }

    /// Read entries starting at the given byte offset.
    ///
    /// Empty lines are skipped. A final line without a trailing newline (an
    /// interrupted write) is skipped silently.
    pub fn read_from(
        &self,
        offset: u64,
    ) -> io::Result<impl Iterator<Item = io::Result<JournalEntry>> + use<>> {
        read_entries(&self.path, offset)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current size of the journal file in bytes.
    pub fn size(&self) -> io::Result<u64> {
        Ok(fs::metadata(&self.path)?.len())
    }
}

fn read_entries(
    path: &Path,
    offset: u64,
) -> io::Result<impl Iterator<Item = io::Result<JournalEntry>> + use<>> {
    let mut file = File::open(path)?;
    file.seek(SeekFrom::Start(offset))?;

    let file_len = file.metadata()?.len();
    let reader = BufReader::new(file);

    Ok(EntryIterator {
        lines: reader.lines(),
        pos: offset,
        file_len,
    })
}

/// Offset just past the last `\n` before `end`, or 0 if there is none.
fn line_start_before(file: &mut File, end: u64) -> io::Result<u64> {
    let mut buf = vec![0u8; 8192];
    let mut end = end;
    while end > 0 {
        let start = end.saturating_sub(buf.len() as u64);
        let chunk = &mut buf[..(end - start) as usize];
        file.seek(SeekFrom::Start(start))?;
        file.read_exact(chunk)?;
        if let Some(pos) = chunk.iter().rposition(|&b| b == b'\n') {
            return Ok(start + pos as u64 + 1);
        }
        end = start;
    }
    Ok(0)
}

/// Hash of the complete line that ends just before `offset`.
///
/// `None` if `offset` is 0, lies past the end of the file, or does not follow
/// a newline.
fn line_hash_before(path: &Path, offset: u64) -> io::Result<Option<String>> {
    if offset == 0 {
        return Ok(None);
    }
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    if offset > file.metadata()?.len() {
        return Ok(None);
    }

    let newline = offset - 1;
    let mut last = [0u8; 1];
    file.seek(SeekFrom::Start(newline))?;
    file.read_exact(&mut last)?;
    if last[0] != b'\n' {
        return Ok(None);
    }

    let start = line_start_before(&mut file, newline)?;
    let mut line = vec![0u8; (newline - start) as usize];
    file.seek(SeekFrom::Start(start))?;
    file.read_exact(&mut line)?;
    Ok(Some(line_hash(&line)))
}

/// State folded from a journal up to a byte offset.
///
/// `hash` is the [`line_hash`] of the last folded line. [`resume`] checks it
/// against the journal, so a checkpoint taken from a different or rewritten
/// file is noticed and the fold starts over.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Checkpoint {
    pub state: AppState,
    /// Byte offset just past the last folded line.
    pub offset: u64,
    pub hash: String,
}

impl Checkpoint {
    fn matches(&self, path: &Path) -> io::Result<bool> {
        if self.offset == 0 {
            return Ok(true);
        }
        Ok(line_hash_before(path, self.offset)?.as_deref() == Some(self.hash.as_str()))
    }
}

/// Rebuild state by folding every entry of the journal at `path` through
/// `reducer`, starting from the default state.
///
/// A journal that does not exist yet replays to the default state.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a complete line is not a
/// valid action.
pub fn replay(path: impl AsRef<Path>, reducer: ReduceFn<AppState>) -> io::Result<AppState> {
    replay_until(path, reducer, usize::MAX)
}

/// Like [`replay`], but stop after the first `count` entries.
///
/// Useful to inspect the state as it was at an earlier point.
pub fn replay_until(
    path: impl AsRef<Path>,
    reducer: ReduceFn<AppState>,
    count: usize,
) -> io::Result<AppState> {
    Ok(fold(path.as_ref(), reducer, Checkpoint::default(), count)?.state)
}

/// Fold the entries appended after `checkpoint` and return the new
/// checkpoint.
///
/// If the line before `checkpoint.offset` no longer hashes to
/// `checkpoint.hash`, the journal is replayed from the start instead.
///
/// # Errors
///
/// Same as [`replay`].
pub fn resume(
    path: impl AsRef<Path>,
    reducer: ReduceFn<AppState>,
    checkpoint: Checkpoint,
) -> io::Result<Checkpoint> {
    let path = path.as_ref();
    let start = if checkpoint.matches(path)? {
        checkpoint
    } else {
        warn!(
            "eatfold: checkpoint at offset {} does not match {}, replaying from start",
            checkpoint.offset,
            path.display()
        );
        Checkpoint::default()
    };
    fold(path, reducer, start, usize::MAX)
}

fn fold(
    path: &Path,
    reducer: ReduceFn<AppState>,
    mut checkpoint: Checkpoint,
    count: usize,
) -> io::Result<Checkpoint> {
    let entries = match read_entries(path, checkpoint.offset) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(checkpoint),
        Err(e) => return Err(e),
    };

    for entry in entries.take(count) {
        let entry = entry?;
        checkpoint.state = reducer(checkpoint.state, &entry.action);
        checkpoint.offset = entry.next_offset;
        checkpoint.hash = entry.hash;
    }
    Ok(checkpoint)
}

struct EntryIterator<I> {
    lines: I,
    pos: u64,
    file_len: u64,
}

impl<I: Iterator<Item = io::Result<String>>> Iterator for EntryIterator<I> {
    type Item = io::Result<JournalEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };

            let line_bytes = line.len() as u64;

            // Content running to EOF without a newline is a torn write.
            if self.pos + line_bytes >= self.file_len {
                return None;
            }

            let next_offset = self.pos + line_bytes + 1;

            if line.is_empty() {
                self.pos = next_offset;
                continue;
            }

            let hash = line_hash(line.as_bytes());
            let action: Action = match serde_json::from_str(&line) {
                Ok(action) => action,
                Err(e) => {
                    return Some(Err(io::Error::new(io::ErrorKind::InvalidData, e)));
                }
            };

            self.pos = next_offset;
            return Some(Ok(JournalEntry {
                action,
                next_offset,
                hash,
            }));
        }
    }
}

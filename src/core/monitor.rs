//! Clipboard monitor.
//!
//! Polls a [`ClipboardSource`] at a fixed interval and feeds new content into
//! the shared [`History`]. Content identical to the previous poll of the same
//! kind is skipped before it reaches the store, so a clipboard that sits
//! unchanged costs one hash per tick.

use std::path::PathBuf;
use std::process::Command;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, trace, warn};
use zeroize::Zeroizing;

use crate::core::constants;
use crate::core::domain::{content_hash, AddOutcome, ItemKind};
use crate::core::history::History;
use crate::core::types::ContentHash;
use crate::error::{Error, Result};

/// One clipboard read.
#[derive(Clone)]
pub struct Clip {
    pub kind: ItemKind,
    pub bytes: Zeroizing<Vec<u8>>,
}

impl Clip {
    pub fn new(kind: ItemKind, bytes: Vec<u8>) -> Self {
        Self {
            kind,
            bytes: Zeroizing::new(bytes),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(ItemKind::Text, text.into().into_bytes())
    }
}

impl std::fmt::Debug for Clip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clip")
            .field("kind", &self.kind)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Something that can report the current clipboard contents.
///
/// A source able to see both an image and text should return the image.
pub trait ClipboardSource: Send {
    /// Current contents, or `None` if the clipboard is empty.
    ///
    /// # Errors
    ///
    /// Any failure to reach the clipboard.
    fn read(&mut self) -> Result<Option<Clip>>;

    /// Short name for logs.
    fn name(&self) -> String;
}

/// Called after content is stored, with its kind and the add outcome.
pub type ChangeCallback = Box<dyn Fn(ItemKind, &AddOutcome) + Send>;

/// Poller feeding a history from a clipboard source.
pub struct Monitor<S> {
    history: Arc<History>,
    source: S,
    interval: Duration,
    last_text: Option<ContentHash>,
    last_image: Option<ContentHash>,
    on_change: Option<ChangeCallback>,
}

impl<S: ClipboardSource> Monitor<S> {
    pub fn new(history: Arc<History>, source: S) -> Self {
        Self {
            history,
            source,
            interval: Duration::from_millis(constants::DEFAULT_POLL_INTERVAL_MS),
            last_text: None,
            last_image: None,
            on_change: None,
        }
    }

    /// Set the poll interval. Zero falls back to the default.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = if interval.is_zero() {
            Duration::from_millis(constants::DEFAULT_POLL_INTERVAL_MS)
        } else {
            interval
        };
        self
    }

    /// Register the callback run whenever content is stored.
    pub fn on_change(mut self, callback: impl Fn(ItemKind, &AddOutcome) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Check the clipboard once.
    ///
    /// # Returns
    ///
    /// The add outcome when content changed since the last poll, `None` if
    /// the clipboard was empty, unchanged, or the store rejected it.
    ///
    /// # Errors
    ///
    /// Only source failures. Store failures are logged and skipped.
    pub fn poll_once(&mut self) -> Result<Option<AddOutcome>> {
        let Some(clip) = self.source.read()? else {
            trace!("clipboard empty");
            return Ok(None);
        };
        if clip.bytes.is_empty() {
            return Ok(None);
        }

        let hash = content_hash(&clip.bytes);
        let last = match clip.kind {
            ItemKind::Text => &mut self.last_text,
            ItemKind::Image => &mut self.last_image,
        };
        if last.as_deref() == Some(hash.as_str()) {
            trace!(kind = %clip.kind, "clipboard unchanged");
            return Ok(None);
        }
        *last = Some(hash);

        let outcome = match self.history.add_item(clip.kind, &clip.bytes) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(kind = %clip.kind, error = %e, "clipboard content not stored");
                return Ok(None);
            }
        };

        if outcome.stored() {
            debug!(kind = %clip.kind, id = ?outcome.id(), "clipboard change stored");
            if let Some(callback) = &self.on_change {
                callback(clip.kind, &outcome);
            }
        }
        Ok(Some(outcome))
    }

    /// Poll until `stop` is raised.
    ///
    /// Source errors are logged; the loop keeps going.
    pub fn run(&mut self, stop: &AtomicBool) {
        debug!(
            source = %self.source.name(),
            interval_ms = self.interval.as_millis() as u64,
            "monitor started"
        );

        while !stop.load(Ordering::SeqCst) {
            if let Err(e) = self.poll_once() {
                warn!(source = %self.source.name(), error = %e, "clipboard read failed");
            }
            std::thread::sleep(self.interval);
        }

        debug!("monitor stopped");
    }
}

/// Reads text through an external clipboard command.
#[derive(Debug, Clone)]
pub struct CommandSource {
    program: PathBuf,
    args: Vec<String>,
}

/// Known clipboard readers, tried in order.
const KNOWN_COMMANDS: &[(&str, &[&str])] = &[
    ("pbpaste", &[]),
    ("wl-paste", &["--no-newline"]),
    ("xclip", &["-selection", "clipboard", "-o"]),
];

impl CommandSource {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Parse a whitespace-separated command line such as `xclip -o`.
    pub fn parse(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace();
        let program = parts.next()?;
        Some(Self::new(program, parts.map(str::to_string).collect()))
    }

    /// The first known clipboard reader found on `PATH`.
    pub fn detect() -> Option<Self> {
        KNOWN_COMMANDS.iter().find_map(|(name, args)| {
            let program = which::which(name).ok()?;
            debug!(program = %program.display(), "clipboard command detected");
            Some(Self::new(
                program,
                args.iter().map(|a| a.to_string()).collect(),
            ))
        })
    }
}

impl ClipboardSource for CommandSource {
    fn read(&mut self) -> Result<Option<Clip>> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(Error::Io)?;

        // Most readers exit non-zero on an empty clipboard
        if !output.status.success() {
            trace!(status = ?output.status.code(), "clipboard command failed");
            return Ok(None);
        }
        if output.stdout.is_empty() {
            return Ok(None);
        }
        Ok(Some(Clip::new(ItemKind::Text, output.stdout)))
    }

    fn name(&self) -> String {
        self.program.display().to_string()
    }
}

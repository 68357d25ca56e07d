use std::fmt;

const INDENT: &str = "  ";
const SAME: &str = "  ";
const REMOVED: &str = "- ";
const ADDED: &str = "+ ";
const ELISION: &str = "...";

/// Line-oriented, indentation-aware sink for diff output.
///
/// Every line starts with a marker (`"  "` unchanged, `"- "` left only,
/// `"+ "` right only), then two spaces per indentation level, then the
/// content. The writer remembers whether any changed line was written.
///
/// Nested output is written through scopes: [`DiffWriter::indented`]
/// always keeps what is written inside it, while
/// [`DiffWriter::only_show_if_diff`] collapses its content into a single
/// `...` line unless something inside it differs.
///
/// ```rust
/// use xmldiff::DiffWriter;
///
/// let mut writer = DiffWriter::new();
/// writer.write_same("<a>");
/// writer.only_show_if_diff(true, |inner| inner.write_same("<unchanged/>"));
/// writer.only_show_if_diff(true, |inner| inner.write_diff(Some("1"), Some("2")));
/// writer.write_same("</a>");
///
/// assert_eq!(
///     writer.to_string(),
///     "  <a>\n  ...\n-   1\n+   2\n  </a>"
/// );
/// ```
#[derive(Debug, Default)]
pub struct DiffWriter {
    buffer: String,
    indent: usize,
    has_diff: bool,
}

impl DiffWriter {
    /// Create an empty writer at indentation level zero.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_buffer(buffer: String, indent: usize) -> Self {
        DiffWriter {
            buffer,
            indent,
            has_diff: false,
        }
    }

    /// Whether a changed line was written in this scope.
    pub fn has_diff(&self) -> bool {
        self.has_diff
    }

    /// Write `contents` with the marker and indentation. Contents spanning
    /// several lines are split so each line carries both.
    fn write_line(&mut self, marker: &str, contents: &str) {
        for line in contents.split('\n') {
            self.buffer.push_str(marker);
            for _ in 0..self.indent {
                self.buffer.push_str(INDENT);
            }
            self.buffer.push_str(line.strip_suffix('\r').unwrap_or(line));
            self.buffer.push('\n');
        }
    }

    /// Write an unchanged line.
    pub fn write_same(&mut self, line: &str) {
        self.write_line(SAME, line);
    }

    /// Write a change: the left line as removed, then the right line as
    /// added. Either may be absent.
    pub fn write_diff(&mut self, left: Option<&str>, right: Option<&str>) {
        self.has_diff = true;
        if let Some(left) = left {
            self.write_line(REMOVED, left);
        }
        if let Some(right) = right {
            self.write_line(ADDED, right);
        }
    }

    /// Run `f` with a scope one level deeper that writes straight into
    /// this writer. A change inside the scope marks this writer as changed.
    pub fn indented<R>(&mut self, f: impl FnOnce(&mut DiffWriter) -> R) -> R {
        let buffer = std::mem::take(&mut self.buffer);
        let mut inner = DiffWriter::with_buffer(buffer, self.indent + 1);
        let result = f(&mut inner);
        self.buffer = inner.buffer;
        self.has_diff |= inner.has_diff;
        result
    }

    /// Run `f` with a scope that buffers its own output, optionally one
    /// level deeper.
    ///
    /// When the scope contains a change, its output is kept and this
    /// writer is marked as changed. Otherwise non-empty output is replaced
    /// by a single unchanged `...` line, and empty output leaves no trace.
    pub fn only_show_if_diff<R>(
        &mut self,
        indented: bool,
        f: impl FnOnce(&mut DiffWriter) -> R,
    ) -> R {
        let indent = if indented {
            self.indent + 1
        } else {
            self.indent
        };
        let mut inner = DiffWriter::with_buffer(String::new(), indent);
        let result = f(&mut inner);
        let content = inner.buffer.trim_end();
        if inner.has_diff {
            self.has_diff = true;
            self.buffer.push_str(content);
            self.buffer.push('\n');
        } else if !content.is_empty() {
            self.write_same(ELISION);
        }
        result
    }

    /// The rendered diff, or `None` if nothing differs.
    pub fn into_diff(self) -> Option<String> {
        if self.has_diff {
            Some(self.to_string())
        } else {
            None
        }
    }
}

impl fmt::Display for DiffWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.buffer.trim_end())
    }
}

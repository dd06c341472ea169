//! Writer hook implementation
//!
//! Forwards rendered records to an output sink for every severity at or
//! above a configured threshold. Typical use: shipping error-and-above
//! records to a separate file in a different format than the main output.

use crate::core::{Formatter, FormatterError, Hook, LogLevel, LogRecord, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct WriterHook<W: Write + Send, F: Formatter> {
    writer: W,
    threshold: LogLevel,
    formatter: F,
}

impl<W: Write + Send, F: Formatter> WriterHook<W, F> {
    pub fn new(writer: W, threshold: LogLevel, formatter: F) -> Self {
        Self {
            writer,
            threshold,
            formatter,
        }
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Borrow the underlying sink.
    pub fn sink(&self) -> &W {
        &self.writer
    }
}

impl<F: Formatter> WriterHook<BufWriter<File>, F> {
    /// Convenience constructor for a buffered append-mode file sink.
    pub fn to_file(path: impl AsRef<Path>, threshold: LogLevel, formatter: F) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                FormatterError::io_operation(
                    "opening log sink",
                    path.display().to_string(),
                    e,
                )
            })?;
        Ok(Self::new(BufWriter::new(file), threshold, formatter))
    }
}

impl<W: Write + Send, F: Formatter> Hook for WriterHook<W, F> {
    fn levels(&self) -> Vec<LogLevel> {
        LogLevel::ALL
            .into_iter()
            .filter(|level| *level >= self.threshold)
            .collect()
    }

    /// Render the record and write it, followed by a newline.
    ///
    /// Both formatter errors and sink write errors are propagated to the
    /// host's error channel; a dropped line is reported, never silently
    /// discarded.
    fn fire(&mut self, record: &LogRecord) -> Result<()> {
        let rendered = self.formatter.format(record)?;
        self.writer.write_all(&rendered)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write + Send, F: Formatter> Drop for WriterHook<W, F> {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::TemplateFormatter;
    use std::io;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_levels_at_or_above_threshold() {
        let hook = WriterHook::new(Vec::new(), LogLevel::Error, TemplateFormatter::new());
        assert_eq!(
            hook.levels(),
            vec![LogLevel::Error, LogLevel::Fatal, LogLevel::Panic]
        );
    }

    #[test]
    fn test_trace_threshold_covers_all_levels() {
        let hook = WriterHook::new(Vec::new(), LogLevel::Trace, TemplateFormatter::new());
        assert_eq!(hook.levels(), LogLevel::ALL.to_vec());
    }

    #[test]
    fn test_fire_writes_rendered_record() {
        let formatter = TemplateFormatter::new().with_template("%lvl%: %msg%");
        let mut hook = WriterHook::new(Vec::new(), LogLevel::Warn, formatter);

        hook.fire(&LogRecord::new(LogLevel::Error, "disk failing"))
            .unwrap();
        hook.fire(&LogRecord::new(LogLevel::Fatal, "disk gone"))
            .unwrap();

        let written = String::from_utf8(hook.writer.clone()).unwrap();
        assert_eq!(written, "ERROR: disk failing\nFATAL: disk gone\n");
    }

    #[test]
    fn test_fire_propagates_write_error() {
        let mut hook = WriterHook::new(FailingWriter, LogLevel::Trace, TemplateFormatter::new());
        let result = hook.fire(&LogRecord::new(LogLevel::Info, "lost"));
        assert!(matches!(result, Err(FormatterError::Io(_))));
    }
}

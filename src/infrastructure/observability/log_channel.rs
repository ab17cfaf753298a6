use crossbeam_channel::{Receiver, Sender};
use std::collections::VecDeque;

/// Lines kept in the UI log panel
pub const LOG_PANEL_CAPACITY: usize = 200;

// A writer that sends logs to the UI via a crossbeam channel
pub struct ChannelWriter {
    sender: Sender<String>,
}

impl std::io::Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf).to_string();
        // A closed panel must never fail logging
        let _ = self.sender.try_send(msg);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// Cloneable wrapper for MakeWriter
#[derive(Clone)]
pub struct ChannelWriterFactory {
    sender: Sender<String>,
}

impl ChannelWriterFactory {
    pub fn new(sender: Sender<String>) -> Self {
        Self { sender }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for ChannelWriterFactory {
    type Writer = ChannelWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ChannelWriter {
            sender: self.sender.clone(),
        }
    }
}

/// Receiving end of the log channel with a bounded history
pub struct LogBuffer {
    receiver: Receiver<String>,
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(receiver: Receiver<String>, capacity: usize) -> Self {
        Self {
            receiver,
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pulls everything pending without blocking
    pub fn drain(&mut self) {
        for line in self.receiver.try_iter() {
            let line = line.trim_end().to_string();
            if line.is_empty() {
                continue;
            }
            if self.lines.len() == self.capacity {
                self.lines.pop_front();
            }
            self.lines.push_back(line);
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_writer_forwards_lines() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut writer = ChannelWriter { sender: tx };
        writer.write_all(b"Loaded model\n").unwrap();

        let mut buffer = LogBuffer::new(rx, 10);
        buffer.drain();
        assert_eq!(buffer.lines().collect::<Vec<_>>(), vec!["Loaded model"]);
    }

    #[test]
    fn test_buffer_keeps_most_recent_lines() {
        let (tx, rx) = crossbeam_channel::unbounded();
        for i in 0..5 {
            tx.send(format!("line {i}\n")).unwrap();
        }
        tx.send("   \n".to_string()).unwrap();

        let mut buffer = LogBuffer::new(rx, 3);
        buffer.drain();
        assert_eq!(buffer.len(), 3);
        assert_eq!(
            buffer.lines().collect::<Vec<_>>(),
            vec!["line 2", "line 3", "line 4"]
        );
    }

    #[test]
    fn test_closed_receiver_does_not_fail_writes() {
        let (tx, rx) = crossbeam_channel::unbounded::<String>();
        drop(rx);
        let mut writer = ChannelWriter { sender: tx };
        assert!(writer.write_all(b"ignored").is_ok());
    }
}

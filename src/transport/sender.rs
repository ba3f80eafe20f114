//! Defines traits and implementations for sending serialized simulation data.
//!
//! This module provides:
//! - The `Sender` trait defining the interface for sending byte data.
//! - Concrete implementations: `FileSender`, `StdoutSender`, `NullSender`.
//! - The `TransportError` type.

use std::fs::File;
use std::io::{self, BufWriter, Error as IoError, Write};
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing::info;

use super::serializer::{Framing, SerializationError};

/// Error types that can occur during data transport (sending).
#[derive(Error, Debug)]
pub enum TransportError {
    /// An I/O error occurred (e.g., writing to a file).
    #[error("I/O error: {0}")]
    IoError(#[from] IoError),
    /// An error occurred during serialization before sending.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] SerializationError),
    /// A record too large for the length prefix.
    #[error("Record of {0} bytes exceeds the framing limit")]
    RecordTooLarge(usize),
    #[error("Runtime error: {0}")]
    RuntimeError(String),
}

/// Base trait for sending serialized data.
///
/// Requires `Send + Sync` so a boxed sender can live inside an ECS resource.
pub trait Sender: Send + Sync {
    /// Sends one serialized record to the destination.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the send operation fails.
    fn send(&self, data: &[u8]) -> Result<(), TransportError>;

    /// Flushes any internal buffers to ensure data is sent/written.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if flushing fails.
    fn flush(&self) -> Result<(), TransportError>;
}

fn write_record<W: Write>(writer: &mut W, data: &[u8], framing: Framing) -> Result<(), TransportError> {
    match framing {
        Framing::Lines => {
            writer.write_all(data)?;
            writer.write_all(b"\n")?;
        }
        Framing::LengthPrefixed => {
            let len = u32::try_from(data.len()).map_err(|_| TransportError::RecordTooLarge(data.len()))?;
            writer.write_all(&len.to_le_bytes())?;
            writer.write_all(data)?;
        }
    }
    Ok(())
}

/// Sender implementation that writes records to a file.
///
/// The file is created (or truncated) on construction.
pub struct FileSender {
    file: Mutex<BufWriter<File>>,
    framing: Framing,
}

impl FileSender {
    /// # Errors
    ///
    /// Returns `TransportError::IoError` if the file cannot be created or opened.
    pub fn new(file_path: impl AsRef<Path>, framing: Framing) -> Result<Self, TransportError> {
        let file_path = file_path.as_ref();
        let file = File::create(file_path)?;
        info!("Initialized FileSender for path: {}", file_path.display());
        Ok(Self {
            file: Mutex::new(BufWriter::new(file)),
            framing,
        })
    }
}

impl Sender for FileSender {
    fn send(&self, data: &[u8]) -> Result<(), TransportError> {
        let mut file_guard = self
            .file
            .lock()
            .map_err(|_| TransportError::RuntimeError("File mutex poisoned".to_string()))?;
        write_record(&mut *file_guard, data, self.framing)
    }

    fn flush(&self) -> Result<(), TransportError> {
        let mut file_guard = self
            .file
            .lock()
            .map_err(|_| TransportError::RuntimeError("File mutex poisoned".to_string()))?;
        file_guard.flush()?;
        Ok(())
    }
}

/// Writes records to standard output, for piping into an external viewer.
pub struct StdoutSender {
    framing: Framing,
}

impl StdoutSender {
    pub fn new(framing: Framing) -> Self {
        Self { framing }
    }
}

impl Sender for StdoutSender {
    fn send(&self, data: &[u8]) -> Result<(), TransportError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_record(&mut handle, data, self.framing)
    }

    fn flush(&self) -> Result<(), TransportError> {
        io::stdout().flush()?;
        Ok(())
    }
}

/// A sender implementation that does nothing.
/// Useful for disabling data transport via configuration.
pub struct NullSender;

impl Sender for NullSender {
    fn send(&self, _data: &[u8]) -> Result<(), TransportError> {
        Ok(())
    }

    fn flush(&self) -> Result<(), TransportError> {
        Ok(())
    }
}

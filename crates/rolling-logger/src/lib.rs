//! Rolling Logger
//!
//! File logger for Tauri applications:
//! - log lines go to `<log_dir>/<app>.log`, rotated to `<app>.log.1..N` once
//!   the current file exceeds a size cap
//! - the most recent lines are also kept in an in-memory circular buffer so
//!   the app can show them without touching the disk
//! - records emitted through the `log` facade are bridged into `tracing`

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Rotation and buffering limits
#[derive(Debug, Clone)]
pub struct RollingConfig {
    /// Rotate once the active file grows past this many bytes
    pub max_bytes: u64,
    /// Number of rotated files kept next to the active one
    pub max_files: usize,
    /// Lines kept in the in-memory ring
    pub ring_capacity: usize,
    /// Minimum level written
    pub level: log::LevelFilter,
}

impl Default for RollingConfig {
    fn default() -> Self {
        Self {
            max_bytes: 1024 * 1024,
            max_files: 3,
            ring_capacity: 500,
            level: log::LevelFilter::Info,
        }
    }
}

type Ring = Arc<Mutex<VecDeque<String>>>;

static RING: OnceLock<Ring> = OnceLock::new();

struct RollingFile {
    path: PathBuf,
    file: File,
    written: u64,
    max_bytes: u64,
    max_files: usize,
}

impl RollingFile {
    fn open(dir: &Path, app_name: &str, config: &RollingConfig) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.log", app_name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);
        Ok(Self {
            path,
            file,
            written,
            max_bytes: config.max_bytes,
            max_files: config.max_files,
        })
    }

    fn rotated_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{}", index));
        PathBuf::from(name)
    }

    /// Shift `app.log.(n-1)` → `app.log.n`, …, `app.log` → `app.log.1`
    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.max_files == 0 {
            self.file = File::create(&self.path)?;
            self.written = 0;
            return Ok(());
        }
        let oldest = self.rotated_path(self.max_files);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.max_files).rev() {
            let from = self.rotated_path(index);
            if from.exists() {
                fs::rename(&from, self.rotated_path(index + 1))?;
            }
        }
        fs::rename(&self.path, self.rotated_path(1))?;
        self.file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        self.written = 0;
        Ok(())
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        self.file.write_all(buf)?;
        self.written += buf.len() as u64;
        Ok(())
    }
}

/// `MakeWriter` handing out clones that share one rotating file and one ring
#[derive(Clone)]
pub struct RollingWriter {
    file: Arc<Mutex<RollingFile>>,
    ring: Ring,
    ring_capacity: usize,
}

impl RollingWriter {
    pub fn new(dir: &Path, app_name: &str, config: &RollingConfig) -> io::Result<Self> {
        let file = RollingFile::open(dir, app_name, config)?;
        Ok(Self {
            file: Arc::new(Mutex::new(file)),
            ring: Arc::new(Mutex::new(VecDeque::with_capacity(config.ring_capacity))),
            ring_capacity: config.ring_capacity,
        })
    }

    /// Last `n` lines written through this writer, oldest first
    pub fn recent_lines(&self, n: usize) -> Vec<String> {
        tail(&self.ring, n)
    }

    fn remember(&self, buf: &[u8]) {
        if self.ring_capacity == 0 {
            return;
        }
        let Ok(mut ring) = self.ring.lock() else {
            return;
        };
        for line in String::from_utf8_lossy(buf).lines() {
            if line.is_empty() {
                continue;
            }
            if ring.len() == self.ring_capacity {
                ring.pop_front();
            }
            ring.push_back(line.to_string());
        }
    }
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        {
            let mut file = self
                .file
                .lock()
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
            file.write_all(buf)?;
        }
        self.remember(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
        file.file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingWriter {
    type Writer = RollingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Local wall-clock timestamps, e.g. `2024-05-01 12:00:00.123`
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

fn to_tracing_level(level: log::LevelFilter) -> tracing_subscriber::filter::LevelFilter {
    use tracing_subscriber::filter::LevelFilter;
    match level {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    }
}

fn tail(ring: &Ring, n: usize) -> Vec<String> {
    match ring.lock() {
        Ok(ring) => {
            let skip = ring.len().saturating_sub(n);
            ring.iter().skip(skip).cloned().collect()
        }
        Err(_) => Vec::new(),
    }
}

/// Initialize the global logger with default limits
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    init_logger_with(log_dir, app_name, RollingConfig::default())
}

/// Initialize the global logger: rotating file + stderr, `log` bridged in
pub fn init_logger_with(
    log_dir: PathBuf,
    app_name: &str,
    config: RollingConfig,
) -> Result<(), String> {
    let writer = RollingWriter::new(&log_dir, app_name, &config)
        .map_err(|e| format!("Failed to open log file in {}: {}", log_dir.display(), e))?;
    let ring = writer.ring.clone();

    tracing_subscriber::registry()
        .with(to_tracing_level(config.level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_timer(LocalTime),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_timer(LocalTime),
        )
        .try_init()
        .map_err(|e| format!("Failed to install logger: {}", e))?;

    let _ = RING.set(ring);
    tracing::info!("{} logging to {}", app_name, log_dir.display());
    Ok(())
}

/// Last `n` lines of the global logger, empty before `init_logger`
pub fn recent_lines(n: usize) -> Vec<String> {
    RING.get().map(|ring| tail(ring, n)).unwrap_or_default()
}

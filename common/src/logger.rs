use log::{Level, LevelFilter, Metadata, Record};
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;

/// A logger that logs to stdout and optionally to a file
pub struct MyLog {
    start: Instant,
    level: LevelFilter,
    log_file: Option<Mutex<BufWriter<File>>>,
}

impl MyLog {
    fn new(level: LevelFilter, log_file: Option<File>) -> Self {
        Self {
            start: Instant::now(),
            level,
            log_file: log_file.map(|f| Mutex::new(BufWriter::new(f))),
        }
    }

    pub fn init() {
        Self::install(Self::new(LevelFilter::Debug, None));
    }

    /// Also writes every record to the given file. Stdout only if the file cannot be created.
    pub fn init_with_file(level: LevelFilter, path: impl AsRef<Path>) {
        let file = File::create(path.as_ref())
            .map_err(|e| eprintln!("could not create log file: {}", e))
            .ok();
        Self::install(Self::new(level, file));
    }

    fn install(me: Self) {
        let level = me.level;
        let leaked = Box::leak(Box::new(me));
        crate::unwrap_orr!(log::set_logger(leaked), return);
        log::set_max_level(level);
        log_panics::init();
    }
}

macro_rules! write_log_stdout {
    ($file:expr, $($arg:tt)*) => {
        let _ = println!($($arg)*);

        if let Some(ref m) = $file {
            if let Ok(mut bw) = m.lock() {
                let _ = writeln!(bw, $($arg)*);
                let _ = bw.flush();
            }
        }
    }
}

impl log::Log for MyLog {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, r: &Record<'_>) {
        if r.target() == "panic" {
            write_log_stdout!(self.log_file, "{}", r.args());
            self.flush();
            return;
        }

        if std::thread::panicking() {
            self.flush();
            return;
        }

        if !self.enabled(r.metadata()) {
            return;
        }

        let time = self.start.elapsed().as_micros();
        if r.level() > Level::Warn {
            let module_path = r.module_path_static().unwrap_or_else(|| r.target());
            write_log_stdout!(
                self.log_file,
                "[{:9} {:5} {:12}] {}",
                time,
                r.level(),
                module_path,
                r.args()
            );
        } else {
            write_log_stdout!(
                self.log_file,
                "[{:9} {:5} {}:{}] {}",
                time,
                r.level(),
                r.file().unwrap_or_default(),
                r.line().unwrap_or_default(),
                r.args()
            );
        }
    }

    fn flush(&self) {
        let _ = stdout().flush();
        if let Some(ref x) = self.log_file {
            if let Ok(mut x) = x.lock() {
                let _ = x.flush();
            }
        }
    }
}

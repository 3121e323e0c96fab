use assert_cmd::prelude::*;
use libtest_mimic::{Failed, Trial};
use rand::Rng;
use rand::prelude::*;
use readbench::error::Result;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::LazyLock;
use uuid::Uuid;

pub static TEST_RUNTIME: LazyLock<tokio::runtime::Runtime> = LazyLock::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap()
});

// All fixture directories live under one scratch root so a failed run is easy to find
static TEST_ROOT: LazyLock<PathBuf> =
    LazyLock::new(|| std::env::temp_dir().join("readbench-behavior"));

/// Create a readbench Command with clean environment and logging configured
pub fn readbench_cmd() -> Command {
    let mut cmd = Command::cargo_bin("readbench").unwrap();
    cmd.env_clear().env("RUST_LOG", "info");
    cmd
}

pub struct Fixture {
    pub paths: std::sync::Mutex<Vec<PathBuf>>,
}

impl Fixture {
    pub const fn new() -> Self {
        Self {
            paths: std::sync::Mutex::new(vec![]),
        }
    }

    pub fn add_path(&self, path: PathBuf) {
        self.paths.lock().unwrap().push(path);
    }

    /// A fresh directory path that does not exist yet.
    pub fn new_dir_path(&self) -> PathBuf {
        let path = TEST_ROOT.join(Uuid::new_v4().to_string());
        self.add_path(path.clone());
        path
    }

    /// A fresh, empty directory.
    pub async fn new_dir(&self) -> Result<PathBuf> {
        let path = self.new_dir_path();
        tokio::fs::create_dir_all(&path).await?;
        Ok(path)
    }

    /// Write a file of random size in `range` filled with random bytes.
    pub async fn new_file_with_range(
        &self,
        dir: &Path,
        name: &str,
        range: std::ops::Range<usize>,
    ) -> Result<(PathBuf, usize)> {
        let (content, size) = {
            let mut rng = rand::rng();
            let size = rng.random_range(range);
            let mut content = vec![0; size];
            rng.fill_bytes(&mut content);
            (content, size)
        };

        let path = dir.join(name);
        tokio::fs::write(&path, content).await?;
        Ok((path, size))
    }

    pub async fn cleanup(&self) {
        let paths: Vec<_> = std::mem::take(self.paths.lock().unwrap().as_mut());
        for path in paths {
            let _ = tokio::fs::remove_dir_all(path).await;
        }
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_async_trial<F, Fut>(name: &str, f: F) -> Trial
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: std::future::Future<Output = Result<()>>,
{
    let handle = TEST_RUNTIME.handle().clone();

    Trial::test(format!("behavior::{name}"), move || {
        handle
            .block_on(f())
            .map_err(|err| Failed::from(err.to_string()))
    })
}

#[macro_export]
macro_rules! async_trials {
    ($($test:ident),* $(,)?) => {
        vec![$(build_async_trial(stringify!($test), $test),)*]
    };
}

pub static TEST_FIXTURE: Fixture = Fixture::new();

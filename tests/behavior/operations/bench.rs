use crate::*;
use readbench::error::{Error, Result};
use readbench::storage::StorageClient;
use readbench::storage::utils::progress::NullProgress;
use readbench::units::MetricFormatter;

pub fn tests(tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        test_bench_reads_generated_files,
        test_bench_limits_file_count,
        test_bench_reports_last_repetition,
        test_bench_skips_subdirectories,
        test_bench_random_sizes,
        test_bench_empty_directory,
        test_bench_missing_directory,
        test_read_missing_file_fails,
        test_bench_rejects_zero_repetitions
    ));
}

async fn generated_dir(file_count: u64, file_size: u64) -> Result<std::path::PathBuf> {
    let dir = TEST_FIXTURE.new_dir_path();
    StorageClient::create(&dir)
        .await?
        .generate(file_count, file_size, &NullProgress)
        .await?;
    Ok(dir)
}

pub async fn test_bench_reads_generated_files() -> Result<()> {
    let dir = generated_dir(5, 2048).await?;

    let client = StorageClient::open_existing(&dir)?;
    let report = client.benchmark(0, 1, MetricFormatter::default()).await?;

    assert_eq!(report.total_bytes, 10240);
    assert_eq!(report.file_count, 5);
    assert_eq!(report.repetitions, 1);
    assert!(report.throughput > 0.0);
    assert!(
        report
            .message
            .starts_with("Read 10240 bytes from 5 files in "),
        "{}",
        report.message
    );
    assert!(report.message.ends_with("B/s"), "{}", report.message);
    Ok(())
}

pub async fn test_bench_limits_file_count() -> Result<()> {
    let dir = generated_dir(12, 100).await?;
    let client = StorageClient::open_existing(&dir)?;

    // Paths sort as strings, so 10 and 11 come before 2
    let files = client.list_files(3).await?;
    assert_eq!(files, vec!["1.txt", "10.txt", "11.txt"]);
    assert_eq!(client.list_files(0).await?.len(), 12);

    let report = client.benchmark(3, 1, MetricFormatter::default()).await?;
    assert_eq!(report.file_count, 3);
    assert_eq!(report.total_bytes, 300);

    let report = client.benchmark(50, 1, MetricFormatter::default()).await?;
    assert_eq!(report.file_count, 12);
    assert_eq!(report.total_bytes, 1200);
    Ok(())
}

pub async fn test_bench_reports_last_repetition() -> Result<()> {
    let dir = generated_dir(4, 3000).await?;
    let client = StorageClient::open_existing(&dir)?;

    let report = client.benchmark(0, 3, MetricFormatter::default()).await?;
    assert_eq!(report.repetitions, 3);
    assert_eq!(report.total_bytes, 12000);
    assert_eq!(
        report.throughput,
        report.total_bytes as f64 / report.elapsed.as_secs_f64()
    );
    Ok(())
}

pub async fn test_bench_skips_subdirectories() -> Result<()> {
    let dir = generated_dir(2, 1500).await?;
    let nested = dir.join("nested");
    tokio::fs::create_dir_all(&nested).await?;
    tokio::fs::write(nested.join("hidden.txt"), vec![1u8; 4096]).await?;

    let client = StorageClient::open_existing(&dir)?;
    let report = client.benchmark(0, 1, MetricFormatter::default()).await?;
    assert_eq!(report.file_count, 2);
    assert_eq!(report.total_bytes, 3000);
    Ok(())
}

pub async fn test_bench_random_sizes() -> Result<()> {
    let dir = TEST_FIXTURE.new_dir().await?;
    let mut expected = 0;
    for idx in 0..6 {
        let (_path, size) = TEST_FIXTURE
            .new_file_with_range(&dir, &format!("f{idx}"), 1..64 * 1024)
            .await?;
        expected += size as u64;
    }

    let client = StorageClient::open_existing(&dir)?;
    assert_eq!(client.read_files(&client.list_files(0).await?).await?, expected);

    let report = client.benchmark(0, 2, MetricFormatter::new(1024.0, 2)).await?;
    assert_eq!(report.file_count, 6);
    assert_eq!(report.total_bytes, expected);
    Ok(())
}

pub async fn test_bench_empty_directory() -> Result<()> {
    let dir = TEST_FIXTURE.new_dir().await?;

    let client = StorageClient::open_existing(&dir)?;
    let report = client.benchmark(0, 1, MetricFormatter::default()).await?;
    assert_eq!(report.file_count, 0);
    assert_eq!(report.total_bytes, 0);
    assert!(report.message.ends_with("= 0B/s"), "{}", report.message);
    Ok(())
}

pub async fn test_bench_missing_directory() -> Result<()> {
    let dir = TEST_FIXTURE.new_dir_path();

    match StorageClient::open_existing(&dir) {
        Err(Error::DirectoryNotFound { path }) => assert_eq!(path, dir),
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("expected DirectoryNotFound for {}", dir.display()),
    }
    assert!(!dir.exists());
    Ok(())
}

pub async fn test_read_missing_file_fails() -> Result<()> {
    let dir = generated_dir(2, 512).await?;
    let client = StorageClient::open_existing(&dir)?;

    let files = vec![
        "1.txt".to_string(),
        "missing.txt".to_string(),
        "2.txt".to_string(),
    ];
    match client.read_files(&files).await {
        Err(Error::OpenDal { source }) => {
            assert_eq!(source.kind(), opendal::ErrorKind::NotFound, "{source}")
        }
        Err(e) => panic!("unexpected error: {e}"),
        Ok(size) => panic!("read {size} bytes from a set with a missing file"),
    }

    // The readable files alone still succeed
    assert_eq!(client.read_files(&files[..1]).await?, 512);
    Ok(())
}

pub async fn test_bench_rejects_zero_repetitions() -> Result<()> {
    let dir = generated_dir(1, 10).await?;

    let client = StorageClient::open_existing(&dir)?;
    let result = client.benchmark(0, 0, MetricFormatter::default()).await;
    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    Ok(())
}

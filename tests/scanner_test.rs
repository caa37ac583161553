use chrono::{Duration, NaiveDate};
use most_active_cookie::{
    file_handler::LogLines, report_top_keys, run, LogScanner, ScanConfig, ScanError, TiePolicy,
};
use std::fs;

/// Small deterministic generator so the logs are reproducible without extra crates.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

/// Build a newest-first log spanning `days` days with up to `per_day` records each.
fn generate_log(seed: u64, days: i64, per_day: u64, keys: u64) -> String {
    let mut rng = Lcg(seed);
    let start = NaiveDate::from_ymd_opt(2018, 12, 1).unwrap();
    let mut out = String::from("cookie,timestamp\n");
    for day in (0..days).rev() {
        let date = start + Duration::days(day);
        // Some days are skipped entirely.
        let count = rng.next() % (per_day + 1);
        let mut minutes: Vec<u64> = (0..count).map(|_| rng.next() % 1440).collect();
        minutes.sort_unstable_by(|a, b| b.cmp(a));
        for m in minutes {
            let key = format!("cookie{:02}", rng.next() % keys);
            out.push_str(&format!(
                "{},{}T{:02}:{:02}:00+0000\n",
                key,
                date.format("%Y-%m-%d"),
                m / 60,
                m % 60
            ));
        }
    }
    out
}

#[test]
fn test_binary_search_matches_linear_scan() -> Result<(), ScanError> {
    for seed in 1..=20 {
        let text = generate_log(seed, 12, 9, 6);
        let lines = LogLines::from_text(&text);
        let scanner = LogScanner::new(&lines);

        let first = NaiveDate::from_ymd_opt(2018, 11, 28).unwrap();
        for offset in 0..18 {
            let date = first + Duration::days(offset);
            let fast: Vec<(String, usize)> = scanner
                .scan(date)?
                .iter()
                .map(|(k, c)| (k.to_string(), c))
                .collect();
            let slow: Vec<(String, usize)> = scanner
                .count_linear(date)?
                .iter()
                .map(|(k, c)| (k.to_string(), c))
                .collect();
            assert_eq!(fast, slow, "seed {} date {}", seed, date);
        }
    }
    Ok(())
}

#[test]
fn test_all_policy_reports_exactly_the_max_keys() -> Result<(), ScanError> {
    for seed in 1..=20 {
        let text = generate_log(seed, 6, 12, 4);
        let lines = LogLines::from_text(&text);
        let scanner = LogScanner::new(&lines);
        let date = NaiveDate::from_ymd_opt(2018, 12, 3).unwrap();

        let table = scanner.scan(date)?;
        let Some(max) = table.max_count() else {
            assert!(matches!(
                report_top_keys(&table, TiePolicy::All),
                Err(ScanError::EmptyResult(_))
            ));
            continue;
        };

        let reported = report_top_keys(&table, TiePolicy::All)?;
        let expected: Vec<String> = table
            .iter()
            .filter(|&(_, c)| c == max)
            .map(|(k, _)| k.to_string())
            .collect();
        assert_eq!(reported, expected);

        let first_run = report_top_keys(&table, TiePolicy::FirstRun)?;
        assert!(reported.starts_with(&first_run));
    }
    Ok(())
}

#[test]
fn test_run_single_record_date() -> Result<(), ScanError> {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("log.csv");
    fs::write(
        &path,
        "cookie,timestamp
a,2018-12-10T10:00:00+0000
only,2018-12-09T10:00:00+0000
b,2018-12-08T10:00:00+0000
",
    )
    .unwrap();

    let config = ScanConfig::with_env(path, "2018-12-09", None, |_| None)?;
    assert_eq!(run(&config)?, vec!["only"]);
    Ok(())
}

#[test]
fn test_run_absent_date_is_empty_result() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("log.csv");
    fs::write(&path, "cookie,timestamp\na,2018-12-10T10:00:00+0000\n").unwrap();

    let config = ScanConfig::with_env(path, "2018-12-09", None, |_| None).unwrap();
    let err = run(&config).unwrap_err();
    assert!(matches!(err, ScanError::EmptyResult(_)));
}

#[test]
fn test_run_is_deterministic() -> Result<(), ScanError> {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("log.csv");
    fs::write(&path, generate_log(7, 10, 15, 3)).unwrap();

    for day in 1..=10 {
        let date = format!("2018-12-{:02}", day);
        let config = ScanConfig::with_env(path.clone(), &date, None, |_| None)?;
        let first = run(&config).map_err(|e| e.to_string());
        let second = run(&config).map_err(|e| e.to_string());
        assert_eq!(first, second);
    }
    Ok(())
}

#[test]
fn test_run_blank_line_inside_block_is_parse_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("log.csv");
    fs::write(
        &path,
        "cookie,timestamp
a,2018-12-09T14:00:00+0000

a,2018-12-09T10:00:00+0000
b,2018-12-09T09:00:00+0000
",
    )
    .unwrap();

    let config = ScanConfig::with_env(path, "2018-12-09", None, |_| None).unwrap();
    let err = run(&config).unwrap_err();
    assert!(matches!(err, ScanError::Parse { line: 3, .. }), "got {:?}", err);
}

#[test]
fn test_run_space_before_timestamp_is_parse_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("log.csv");
    fs::write(&path, "cookie,timestamp\na, 2018-12-09T14:00:00+0000\n").unwrap();

    let config = ScanConfig::with_env(path, "2018-12-09", None, |_| None).unwrap();
    let err = run(&config).unwrap_err();
    assert!(matches!(err, ScanError::Parse { line: 2, .. }), "got {:?}", err);
}

#[test]
fn test_run_ignores_blank_tail_at_eof() -> Result<(), ScanError> {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("log.csv");
    fs::write(&path, "cookie,timestamp\na,2018-12-09T14:00:00+0000\n\n\n").unwrap();

    let config = ScanConfig::with_env(path, "2018-12-09", None, |_| None)?;
    assert_eq!(run(&config)?, vec!["a"]);
    Ok(())
}

/// End-to-end tests for the CLI
///
/// Network-backed runs point the binary at a local mockito server through
/// a config file's `base_url`.
use assert_cmd::cargo::cargo_bin_cmd;
use mockito::{Matcher, Server, ServerGuard};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const FEED_BODY: &str = r#"{
    "element_count": 3,
    "near_earth_objects": {
        "2024-01-10": [
            {
                "id": "2465633", "neo_reference_id": "2465633", "name": "465633 (2009 JR5)",
                "nasa_jpl_url": "https://ssd.jpl.nasa.gov/tools/sbdb_lookup.html#/?sstr=2465633",
                "absolute_magnitude_h": 20.44, "is_potentially_hazardous_asteroid": true,
                "is_sentry_object": false,
                "estimated_diameter": {
                    "kilometers": {"estimated_diameter_min": 0.2170475943, "estimated_diameter_max": 0.4853331752},
                    "meters": {"estimated_diameter_min": 217.0475943, "estimated_diameter_max": 485.3331752}
                },
                "close_approach_data": [{
                    "close_approach_date": "2024-01-10", "close_approach_date_full": "2024-Jan-10 20:28",
                    "epoch_date_close_approach": 1704918480000,
                    "relative_velocity": {"kilometers_per_second": "18.1279360862", "kilometers_per_hour": "65260.5699103704", "miles_per_hour": "40550.3802312521"},
                    "miss_distance": {"astronomical": "0.3027469457", "lunar": "117.7685618773", "kilometers": "45290298.225725659", "miles": "28142086.3515817342"},
                    "orbiting_body": "Earth"
                }]
            },
            {
                "id": "3426410", "neo_reference_id": "3426410", "name": "(2008 QV11)",
                "nasa_jpl_url": "https://ssd.jpl.nasa.gov/tools/sbdb_lookup.html#/?sstr=3426410",
                "absolute_magnitude_h": 21.34, "is_potentially_hazardous_asteroid": false,
                "is_sentry_object": false,
                "estimated_diameter": {
                    "kilometers": {"estimated_diameter_min": 0.1434019235, "estimated_diameter_max": 0.320656449},
                    "meters": {"estimated_diameter_min": 143.4019235, "estimated_diameter_max": 320.656449}
                },
                "close_approach_data": [{
                    "close_approach_date": "2024-01-10", "close_approach_date_full": "2024-Jan-10 14:31",
                    "epoch_date_close_approach": 1704897060000,
                    "relative_velocity": {"kilometers_per_second": "19.7498128142", "kilometers_per_hour": "71099.3261312856", "miles_per_hour": "44178.3562841869"},
                    "miss_distance": {"astronomical": "0.2591250701", "lunar": "100.7996522689", "kilometers": "38764558.550560687", "miles": "24087179.7459520006"},
                    "orbiting_body": "Earth"
                }]
            }
        ],
        "2024-01-11": [
            {
                "id": "3727639", "neo_reference_id": "3727639", "name": "(2015 NK3)",
                "nasa_jpl_url": "https://ssd.jpl.nasa.gov/tools/sbdb_lookup.html#/?sstr=3727639",
                "absolute_magnitude_h": 22.6, "is_potentially_hazardous_asteroid": false,
                "is_sentry_object": false,
                "estimated_diameter": {
                    "kilometers": {"estimated_diameter_min": 0.0801, "estimated_diameter_max": 0.1791},
                    "meters": {"estimated_diameter_min": 80.1, "estimated_diameter_max": 179.1}
                },
                "close_approach_data": [{
                    "close_approach_date": "2024-01-11",
                    "relative_velocity": {"kilometers_per_second": "7.2", "kilometers_per_hour": "25920", "miles_per_hour": "16106"},
                    "miss_distance": {"astronomical": "0.05", "lunar": "19.45", "kilometers": "7479893", "miles": "4647802"},
                    "orbiting_body": "Earth"
                }]
            }
        ]
    }
}"#;

const NEO_BODY: &str = r#"{
    "id": "3542519", "neo_reference_id": "3542519", "name": "(2010 PK9)",
    "nasa_jpl_url": "https://ssd.jpl.nasa.gov/tools/sbdb_lookup.html#/?sstr=3542519",
    "absolute_magnitude_h": 21.1, "is_potentially_hazardous_asteroid": true,
    "is_sentry_object": false,
    "estimated_diameter": {
        "kilometers": {"estimated_diameter_min": 0.15, "estimated_diameter_max": 0.34},
        "meters": {"estimated_diameter_min": 150.0, "estimated_diameter_max": 340.0}
    },
    "close_approach_data": [{
        "close_approach_date": "2024-01-10", "close_approach_date_full": "2024-Jan-10 03:12",
        "relative_velocity": {"kilometers_per_second": "9.1", "kilometers_per_hour": "32760", "miles_per_hour": "20356"},
        "miss_distance": {"astronomical": "0.2", "lunar": "77.8", "kilometers": "29919574", "miles": "18591000"},
        "orbiting_body": "Earth"
    }]
}"#;

/// Temp working directory with a config file aimed at the mock server
fn workspace(server: &ServerGuard) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("neo-watch.config.yml"),
        format!("base_url: {}\ntimeout_secs: 5\n", server.url()),
    )
    .unwrap();
    dir
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("neo-watch").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("neo-watch")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: missing subcommand
    #[test]
    fn test_exit_code_missing_subcommand() {
        cargo_bin_cmd!("neo-watch").assert().code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("neo-watch")
            .args(["-f", "invalid_format", "feed"])
            .assert()
            .code(2);
    }

    /// Exit code 2: malformed date
    #[test]
    fn test_exit_code_invalid_date() {
        cargo_bin_cmd!("neo-watch")
            .args(["feed", "--start", "2024-02-30"])
            .assert()
            .code(2);
    }

    /// Exit code 3: more than 7 days is rejected before any request
    #[test]
    fn test_exit_code_window_too_wide() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("neo-watch")
            .current_dir(dir.path())
            .args(["feed", "--start", "2024-01-01", "--end", "2024-01-10"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("7-day ranges maximum"));
    }

    /// Exit code 3: inverted dates
    #[test]
    fn test_exit_code_inverted_window() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("neo-watch")
            .current_dir(dir.path())
            .args(["feed", "--start", "2024-01-10", "--end", "2024-01-05"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("end date is before the start date"));
    }

    /// Exit code 3: path-like ids never reach the network
    #[test]
    fn test_exit_code_invalid_neo_id() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("neo-watch")
            .current_dir(dir.path())
            .args(["show", "../etc"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid NEO id"));
    }
}

#[test]
fn test_e2e_feed_outside_horizon_makes_no_request() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/feed")
        .match_query(Matcher::Any)
        .expect(0)
        .create();
    let dir = workspace(&server);

    cargo_bin_cmd!("neo-watch")
        .current_dir(dir.path())
        .args(["feed", "--start", "2000-01-01", "--end", "2000-01-03"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("outside the feed horizon"));

    mock.assert();
}

#[test]
fn test_e2e_feed_markdown() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/feed")
        .match_query(Matcher::UrlEncoded("api_key".into(), "E2E_KEY".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(FEED_BODY)
        .expect(1)
        .create();
    let dir = workspace(&server);

    cargo_bin_cmd!("neo-watch")
        .current_dir(dir.path())
        .env_remove("NASA_API_KEY")
        .args(["--api-key", "E2E_KEY", "feed", "--sort-by", "size", "--order", "desc"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Near-Earth Object Close Approaches"))
        .stdout(predicate::str::contains("## 2024-01-10 (2 objects)"))
        .stdout(predicate::str::contains("465633 (2009 JR5)"))
        .stdout(predicate::str::contains("Showing 3 of 3 loaded object(s)."));

    mock.assert();
}

#[test]
fn test_e2e_feed_json_hazardous_only() {
    let mut server = Server::new();
    server
        .mock("GET", "/feed")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(FEED_BODY)
        .create();
    let dir = workspace(&server);

    let output = cargo_bin_cmd!("neo-watch")
        .current_dir(dir.path())
        .args(["-f", "json", "feed", "--hazardous"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_loaded"], 3);
    assert_eq!(json["visible_count"], 1);
    assert_eq!(json["groups"][0]["neos"][0]["id"], "2465633");
    assert_eq!(json["filters"]["hazardous_only"], true);
}

#[test]
fn test_e2e_feed_writes_output_file() {
    let mut server = Server::new();
    server
        .mock("GET", "/feed")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(FEED_BODY)
        .create();
    let dir = workspace(&server);
    let output_path = dir.path().join("report.md");

    cargo_bin_cmd!("neo-watch")
        .current_dir(dir.path())
        .args(["feed", "-o"])
        .arg(&output_path)
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Output complete"));

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.contains("(2015 NK3)"));
}

#[test]
fn test_e2e_feed_rate_limited_exits_3() {
    let mut server = Server::new();
    server
        .mock("GET", "/feed")
        .match_query(Matcher::Any)
        .with_status(429)
        .create();
    let dir = workspace(&server);

    cargo_bin_cmd!("neo-watch")
        .current_dir(dir.path())
        .arg("feed")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("rate limit"));
}

#[test]
fn test_e2e_show_without_orbital_data() {
    let mut server = Server::new();
    server
        .mock("GET", "/neo/3542519")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(NEO_BODY)
        .create();
    server
        .mock("GET", "/neo/3542519/orbital")
        .match_query(Matcher::Any)
        .with_status(404)
        .create();
    let dir = workspace(&server);

    cargo_bin_cmd!("neo-watch")
        .current_dir(dir.path())
        .args(["show", "3542519"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# (2010 PK9)"))
        .stdout(predicate::str::contains("- Velocity: 9.1 km/s (32760 km/h)"))
        .stdout(predicate::str::contains("_Orbital data unavailable._"));
}

#[test]
fn test_e2e_show_unknown_id_exits_3() {
    let mut server = Server::new();
    server
        .mock("GET", "/neo/42")
        .match_query(Matcher::Any)
        .with_status(404)
        .create();
    let dir = workspace(&server);

    cargo_bin_cmd!("neo-watch")
        .current_dir(dir.path())
        .args(["show", "42"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("NEO not found: 42"));
}

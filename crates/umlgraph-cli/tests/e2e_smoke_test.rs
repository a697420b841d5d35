use std::{fs, path::PathBuf};

use tempfile::tempdir;

use umlgraph_cli::Args;

fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos")
}

/// Collects all .json files from a directory
fn collect_json_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args_for(input: &PathBuf, output: &PathBuf, config: Option<&PathBuf>) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: config.map(|path| path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_json_files(demos_dir());

    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename = format!(
            "{}.out.json",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        // An empty config file keeps local and system configs out of the test.
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "").expect("Failed to write config");

        let args = args_for(demo_path, &output_path, Some(&config_path));
        match umlgraph_cli::run(&args) {
            Ok(()) => {
                let written = fs::read_to_string(&output_path).expect("Output should exist");
                let value: serde_json::Value =
                    serde_json::from_str(&written).expect("Output should be JSON");
                assert!(value["files"].is_array(), "{}", demo_path.display());
            }
            Err(e) => failed_demos.push((demo_path.clone(), e)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_json_files(demos_dir().join("errors"));

    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_path = temp_dir.path().join("error.out.json");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "").expect("Failed to write config");

        let args = args_for(demo_path, &output_path, Some(&config_path));
        if umlgraph_cli::run(&args).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_shapes_demo_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_dir().join("shapes.json");
    let output = temp_dir.path().join("shapes.out.json");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[output]\npretty = false\n").expect("Failed to write config");

    umlgraph_cli::run(&args_for(&input, &output, Some(&config_path))).expect("Demo should run");

    let written = fs::read_to_string(&output).expect("Output should exist");
    assert!(!written.contains('\n'));

    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    let files = value["files"].as_array().unwrap();

    let shape_edges = files[0]["member_associations"].as_array().unwrap();
    let names: Vec<(&str, &str)> = shape_edges
        .iter()
        .map(|edge| {
            (
                edge["a"]["name"].as_str().unwrap(),
                edge["b"]["name"].as_str().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        names,
        vec![("Shape", "Style"), ("Shape", "Point"), ("Style", "Color")]
    );

    // Circle's style and center are already on Shape; its radius source is not.
    let circle_edges = files[1]["member_associations"].as_array().unwrap();
    assert_eq!(circle_edges.len(), 1);
    assert_eq!(circle_edges[0]["b"]["name"], "Measure");

    // Canvas holds many shapes.
    let canvas_edges = files[2]["member_associations"].as_array().unwrap();
    assert_eq!(canvas_edges.len(), 1);
    assert_eq!(canvas_edges[0]["kind"], "Association");
    assert_eq!(canvas_edges[0]["a"]["name"], "Canvas");
    assert_eq!(canvas_edges[0]["b"]["multiplicity"], "0..*");
}

#[test]
fn e2e_missing_input_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("missing.json");
    let output = temp_dir.path().join("out.json");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "").expect("Failed to write config");

    let result = umlgraph_cli::run(&args_for(&input, &output, Some(&config_path)));

    assert!(result.is_err());
    assert!(!output.exists());
}

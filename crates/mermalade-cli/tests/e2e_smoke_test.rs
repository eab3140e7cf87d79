use std::{fs, path::PathBuf};

use tempfile::tempdir;

use mermalade_cli::{Args, run};

/// Collects all .puml files from a directory
fn collect_puml_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("puml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demos are at workspace root, relative to workspace not the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

#[test]
fn e2e_smoke_test_valid_demos() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_puml_files(demos_path());

    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename =
            format!("{}.mmd", demo_path.file_stem().unwrap().to_string_lossy());
        let output_path = temp_dir.path().join(output_filename);

        let args = Args {
            input: demo_path.to_string_lossy().to_string(),
            output: Some(output_path.to_string_lossy().to_string()),
            config: None,
            strict: true,
            log_level: "off".to_string(),
        };

        if let Err(e) = run(&args) {
            failed_demos.push((demo_path.clone(), e));
            continue;
        }

        let mermaid = fs::read_to_string(&output_path).expect("Failed to read output");
        assert!(
            mermaid.starts_with("classDiagram"),
            "{} output should start with the Mermaid header",
            demo_path.display()
        );
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_strict_error_demos() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_puml_files(demos_path().join("errors"));

    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.mmd",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        let args = Args {
            input: demo_path.to_string_lossy().to_string(),
            output: Some(output_path.to_string_lossy().to_string()),
            config: None,
            strict: true,
            log_level: "off".to_string(),
        };

        if run(&args).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded under strict mode:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error demos failed as expected",
        error_demos.len()
    );
}

#[test]
fn e2e_permissive_mode_skips_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let demo_path = demos_path().join("errors").join("three-way.puml");
    let output_path = temp_dir.path().join("three-way.mmd");

    let args = Args {
        input: demo_path.to_string_lossy().to_string(),
        output: Some(output_path.to_string_lossy().to_string()),
        config: None,
        strict: false,
        log_level: "off".to_string(),
    };

    run(&args).expect("Permissive mode should not fail on dropped lines");

    let mermaid = fs::read_to_string(&output_path).expect("Failed to read output");
    assert!(mermaid.contains("class Hub"));
    assert!(!mermaid.contains("--"), "Dropped relation must not appear");
}

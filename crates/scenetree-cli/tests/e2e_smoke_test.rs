use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use scenetree_cli::{Args, FormatArg, run};

/// Collects all .tscn files from a directory
fn collect_scene_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("tscn")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn scenes_dir() -> PathBuf {
    // Scenes are at workspace root, relative to workspace not the crate
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("scenes")
}

fn args_for(input: &Path, output: PathBuf, format: FormatArg) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: Some(output.to_string_lossy().to_string()),
        format: Some(format),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_scenes() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_scenes = collect_scene_files(scenes_dir());

    assert!(!valid_scenes.is_empty(), "No valid scenes found in scenes/");

    let mut failed_scenes = Vec::new();

    for scene_path in &valid_scenes {
        let stem = scene_path.file_stem().unwrap().to_string_lossy().to_string();

        for (format, extension) in [(FormatArg::Json, "json"), (FormatArg::Outline, "txt")] {
            let output_path = temp_dir.path().join(format!("{stem}.{extension}"));
            let args = args_for(scene_path, output_path.clone(), format);

            match run(&args) {
                Ok(()) => {
                    let written = fs::read_to_string(&output_path).expect("Output not written");
                    assert!(!written.is_empty(), "Empty output for {}", scene_path.display());
                }
                Err(e) => failed_scenes.push((scene_path.clone(), e)),
            }
        }
    }

    if !failed_scenes.is_empty() {
        eprintln!("\nValid scenes that failed:");
        for (path, err) in &failed_scenes {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid scene run(s) failed unexpectedly", failed_scenes.len());
    }

    println!("✅ All {} valid scenes passed", valid_scenes.len());
}

#[test]
fn e2e_smoke_test_error_scenes() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_scenes = collect_scene_files(scenes_dir().join("errors"));

    assert!(
        !error_scenes.is_empty(),
        "No error scenes found in scenes/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for scene_path in &error_scenes {
        let output_filename = format!(
            "error_{}.json",
            scene_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);
        let args = args_for(scene_path, output_path.clone(), FormatArg::Json);

        if run(&args).is_ok() {
            unexpectedly_succeeded.push(scene_path.clone());
        } else {
            assert!(
                !output_path.exists(),
                "Output written for failing scene {}",
                scene_path.display()
            );
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError scenes that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error scene(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error scenes failed as expected",
        error_scenes.len()
    );
}

#[test]
fn e2e_missing_input_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("missing.tscn");

    let args = args_for(&missing, temp_dir.path().join("out.json"), FormatArg::Json);

    assert!(run(&args).is_err());
}

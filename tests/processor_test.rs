use std::fs;
use std::path::{Path, PathBuf};

use genfile::error::Error;
use genfile::loader::{load_templates, TemplateFile};
use genfile::processor::{ensure_parent_dir, generate, resolve_output_path, Processor};
use genfile::renderer::TemplateSet;
use serde_json::json;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn template(name: &str, content: &str) -> TemplateFile {
    TemplateFile {
        name: name.to_string(),
        path: PathBuf::from(name),
        content: content.to_string(),
    }
}

#[test]
fn test_resolve_output_path() {
    assert_eq!(resolve_output_path("output", "file1"), PathBuf::from("output/file1"));
    assert_eq!(resolve_output_path("output", "etc/file3"), Path::new("output").join("etc").join("file3"));
}

#[test]
fn test_ensure_parent_dir() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("a/b/c/file");

    ensure_parent_dir(&target).unwrap();
    assert!(temp_dir.path().join("a/b/c").is_dir());

    // Existing directories are fine.
    ensure_parent_dir(&target).unwrap();
}

#[test]
fn test_ensure_parent_dir_blocked_by_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a"), "not a directory").unwrap();

    match ensure_parent_dir(&temp_dir.path().join("a/b/file")) {
        Err(Error::DirectoryCreateError { path, .. }) => {
            assert_eq!(path, temp_dir.path().join("a/b"))
        }
        other => panic!("Expected DirectoryCreateError, got {:?}", other),
    }
}

#[test_log::test]
fn test_generate_mirrors_template_tree() {
    for varfile in ["varfile.json", "varfile.toml"] {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("not/yet/created");

        let generated = generate(fixture(varfile), fixture("templates"), &output).unwrap();

        assert_eq!(generated.len(), 4);
        assert!(!dir_diff::is_different(&output, fixture("expected")).unwrap());
    }
}

#[test]
fn test_generate_single_file() {
    let temp_dir = TempDir::new().unwrap();

    let generated =
        generate(fixture("varfile.json"), fixture("templates/etc/file3"), temp_dir.path()).unwrap();

    assert_eq!(generated, vec![temp_dir.path().join("file3")]);
    assert_eq!(fs::read_to_string(&generated[0]).unwrap(), "a string 200\n");
}

#[test]
fn test_existing_output_is_truncated() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("short"), "a much longer previous content").unwrap();

    let templates = TemplateSet::from_files(vec![template("short", "new")]).unwrap();
    let variables = json!({});
    Processor::new(&templates, &variables, temp_dir.path()).process_all().unwrap();

    assert_eq!(fs::read_to_string(temp_dir.path().join("short")).unwrap(), "new");
}

#[test_log::test]
fn test_undefined_field_aborts_and_keeps_earlier_output() {
    let temp_dir = TempDir::new().unwrap();
    let templates = TemplateSet::from_files(vec![
        template("a_ok", "{{ int }}\n"),
        template("b_bad", "before {{ nope }}"),
        template("c_never", "unreachable"),
    ])
    .unwrap();
    let variables = json!({"int": 100});

    let err = Processor::new(&templates, &variables, temp_dir.path())
        .process_all()
        .unwrap_err();

    match &err {
        Error::RenderError { name, .. } => assert_eq!(name, "b_bad"),
        other => panic!("Expected RenderError, got {:?}", other),
    }
    assert_eq!(err.exit_code(), 3);
    assert_eq!(fs::read_to_string(temp_dir.path().join("a_ok")).unwrap(), "100\n");
    assert!(temp_dir.path().join("b_bad").exists());
    assert!(!temp_dir.path().join("c_never").exists());
}

#[test]
fn test_output_collides_with_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("file1")).unwrap();

    let templates = TemplateSet::from_files(vec![template("file1", "content")]).unwrap();
    let variables = json!({});

    match Processor::new(&templates, &variables, temp_dir.path()).process("file1") {
        Err(Error::FileCreateError { path, .. }) => assert_eq!(path, temp_dir.path().join("file1")),
        other => panic!("Expected FileCreateError, got {:?}", other),
    }
}

#[test]
fn test_processing_order_follows_load_order() {
    let temp_dir = TempDir::new().unwrap();
    let templates = load_templates(fixture("templates")).unwrap();
    let variables = json!({"int": 1, "str": "s", "array_int": [], "struct": {"int_field": 2, "str_field": "t"}});

    let generated = Processor::new(&templates, &variables, temp_dir.path()).process_all().unwrap();

    let relative: Vec<_> = generated
        .iter()
        .map(|path| path.strip_prefix(temp_dir.path()).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        relative,
        vec![
            Path::new("etc").join("file3"),
            Path::new("etc").join("verify"),
            PathBuf::from("file1"),
            PathBuf::from("file2"),
        ]
    );
}

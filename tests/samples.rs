use std::fs;
use std::path::PathBuf;
use wax::Glob;
use minjs::{minify_file, JsMinifier, OxcMinifier, MINIFY_OPTIONS};

const RESERVED_NAMES: [&str; 3] = ["characterId", "userId", "action"];

// Names that must come through minification untouched, per sample
const KEPT_NAMES: [(&str, &[&str]); 2] = [
    ("game_actions.js", &["sendAction", "pendingActions", "details", "sentAt"]),
    ("user_session.js", &["UserSession", "describeSession", "history", "displayName"]),
];

// Declarations whose reserved parameter names must not be renamed, per sample
const RESERVED_DECLARATIONS: [(&str, &[&str]); 2] = [
    ("game_actions.js", &["sendAction(characterId,userId,action,"]),
    ("user_session.js", &["constructor(userId,", "record(action)"]),
];

const REMOVED_TEXT: [&str; 6] = ["console", "debugger", "DEBUG", "Dispatches", "most recent",
    "Session bookkeeping"];

#[test]
fn minify_sample_files() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let mut test_files_dir = root.clone();
    test_files_dir.push("tests");
    test_files_dir.push("test_files");

    let test_output_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("samples");
    let _ = fs::remove_dir_all(&test_output_dir);

    let glob = Glob::new("**/*.js").expect("Globbing error");
    let mut count = 0;
    for entry in glob.walk(&test_files_dir) {
        let entry = entry.expect("Could not walk test files");
        let path = entry.path();
        println!("Testing file {}", path.display());

        let relative = path.strip_prefix(&test_files_dir).expect("Not under test_files");
        let output_file = test_output_dir.join(relative);
        let report = minify_file(&OxcMinifier, path, &output_file, &MINIFY_OPTIONS)
            .expect("Could not minify sample");

        let source = fs::read_to_string(path).expect("Could not read sample");
        let minified = fs::read_to_string(&output_file).expect("Could not read output");
        assert_eq!(report.output_bytes, minified.len() as u64);
        assert!(minified.len() < source.len(), "{} did not shrink", path.display());

        for name in RESERVED_NAMES {
            if source.contains(name) {
                assert!(minified.contains(name), "'{name}' renamed in {minified}");
            }
        }

        for text in REMOVED_TEXT {
            assert!(!minified.contains(text), "'{text}' left in {minified}");
        }

        let file_name = path.file_name().and_then(|name| name.to_str()).unwrap_or_default();
        for (sample, declarations) in RESERVED_DECLARATIONS {
            if sample == file_name {
                for declaration in declarations {
                    assert!(minified.contains(declaration), "'{declaration}' renamed in {minified}");
                }
            }
        }

        for (sample, names) in KEPT_NAMES {
            if sample == file_name {
                for name in names {
                    assert!(minified.contains(name), "'{name}' renamed in {minified}");
                }
            }
        }

        // minifying the output again must still succeed and keep the reserved names
        let again = OxcMinifier.minify(&minified, &MINIFY_OPTIONS)
            .expect("Could not minify minified output");
        for name in RESERVED_NAMES {
            if minified.contains(name) {
                assert!(again.contains(name), "'{name}' renamed on second run");
            }
        }

        count += 1;
    }

    assert_eq!(count, 2, "expected both sample files to be minified");
}

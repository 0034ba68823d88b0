use areacodes_core::{group_by_area_code, normalize, CoreError};
use areacodes_store::error::{StoreError, StoreErrorKind};
use areacodes_store::{read_area_codes, read_lines, write_lines, write_report};
use std::fs;
use tempfile::TempDir;

#[test]
fn read_lines_trims_file_and_splits() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("input.txt");
    fs::write(&path, "\n+351 960000000\r\n112\ngarbage\n\n").expect("write input");

    let lines = read_lines(&path).expect("read lines");
    assert_eq!(lines, vec!["+351 960000000", "112", "garbage"]);
}

#[test]
fn read_lines_keeps_valid_lines_around_invalid_utf8() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("input.txt");
    fs::write(&path, b"\xff\xfegarbage\n+351960000000\n112\n").expect("write input");

    let lines = read_lines(&path).expect("read lines");
    assert_eq!(lines.len(), 3);
    assert_eq!(&lines[1..], ["+351960000000", "112"]);

    let candidates = normalize(lines).expect("normalize");
    let values: Vec<&str> = candidates.iter().map(|c| c.as_str()).collect();
    assert_eq!(values, vec!["351960000000", "112"]);
}

#[test]
fn read_lines_reports_missing_file() {
    let temp = TempDir::new().expect("temp dir");
    let missing = temp.path().join("missing.txt");

    let err = read_lines(&missing).expect_err("missing file");
    assert!(matches!(err, StoreError::NotFound(ref path) if path == &missing));
    assert_eq!(err.kind(), StoreErrorKind::NotFound);
}

#[test]
fn read_lines_rejects_directories() {
    let temp = TempDir::new().expect("temp dir");

    let err = read_lines(temp.path()).expect_err("directory");
    assert!(matches!(err, StoreError::NotAFile(_)));
}

#[test]
fn read_area_codes_builds_sorted_set() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("area_codes.txt");
    fs::write(&path, "1\n351\n35\n").expect("write codes");

    let set = read_area_codes(&path).expect("read codes");
    assert_eq!(set.iter().collect::<Vec<_>>(), vec!["351", "35", "1"]);
}

#[test]
fn read_area_codes_rejects_malformed_entries() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("area_codes.txt");
    fs::write(&path, "351\nabc\n").expect("write codes");

    let err = read_area_codes(&path).expect_err("bad code");
    assert!(matches!(
        err,
        StoreError::Core(CoreError::InvalidAreaCode(ref code)) if code == "abc"
    ));
}

#[test]
fn write_lines_overwrites_existing_file() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("output.txt");
    fs::write(&path, "stale content that is longer\n").expect("write stale");

    write_lines(&path, ["a:1", "b:2"]).expect("write lines");
    assert_eq!(fs::read_to_string(&path).expect("read"), "a:1\nb:2\n");
}

#[test]
fn write_lines_requires_parent_directory() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("missing").join("output.txt");
    let err = write_lines(&path, ["a:1"]).expect_err("missing dir");
    assert!(matches!(err, StoreError::NotFound(_)));

    let file_parent = temp.path().join("plain.txt");
    fs::write(&file_parent, "").expect("write file");
    let err = write_lines(&file_parent.join("output.txt"), ["a:1"]).expect_err("file parent");
    assert!(matches!(err, StoreError::NotADirectory(_)));
}

#[test]
fn write_lines_refuses_to_replace_a_directory() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("output.txt");
    fs::create_dir(&path).expect("create dir");

    let err = write_lines(&path, ["a:1"]).expect_err("directory target");
    assert!(matches!(err, StoreError::NotAFile(_)));
}

#[test]
fn report_round_trip_through_files() {
    let temp = TempDir::new().expect("temp dir");
    let input = temp.path().join("input.txt");
    let codes = temp.path().join("area_codes.txt");
    let output = temp.path().join("output.txt");
    fs::write(
        &input,
        "+351960000000\n00351961111111\ngarbage\n112\n+44 20 7946 0000\n",
    )
    .expect("write input");
    fs::write(&codes, "351\n44\n1\n").expect("write codes");

    let candidates = normalize(read_lines(&input).expect("read input")).expect("normalize");
    let set = read_area_codes(&codes).expect("read codes");
    let report = group_by_area_code(&candidates, &set).expect("group");
    write_report(&output, &report).expect("write report");

    assert_eq!(
        fs::read_to_string(&output).expect("read output"),
        "112:1\n351:2\n44:1\n"
    );
}

#[cfg(unix)]
#[test]
fn write_lines_into_read_only_dir_fails_on_create() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().expect("temp dir");
    let dir = temp.path().join("locked");
    fs::create_dir(&dir).expect("create dir");
    fs::set_permissions(&dir, fs::Permissions::from_mode(0o555)).expect("chmod");
    let path = dir.join("output.txt");

    // Privileged users can still write here; everyone else gets NoAccess for the file itself.
    match write_lines(&path, ["a:1"]) {
        Ok(()) => assert_eq!(fs::read_to_string(&path).expect("read"), "a:1\n"),
        Err(err) => assert!(matches!(err, StoreError::NoAccess(ref p) if p == &path)),
    }

    fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).expect("restore");
}

use std::fs;

use rnta_windows::copier::{BinaryExtensions, FileClass, FileCopier};
use rnta_windows::substitution::SubstitutionMap;
use tempfile::TempDir;

fn placeholder_map() -> SubstitutionMap {
    SubstitutionMap::from_literals([("$(SourceFilesPath)", "../../src")]).unwrap()
}

#[test]
fn test_pfx_is_copied_byte_for_byte() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("Key.pfx");
    let bytes: Vec<u8> = (0..=255u8).chain(b"$(SourceFilesPath)".iter().copied()).collect();
    fs::write(&source, &bytes).unwrap();
    let out = temp_dir.path().join("out");
    fs::create_dir(&out).unwrap();

    FileCopier::default().copy(&source, &out, "Key.pfx", &placeholder_map()).unwrap();

    assert_eq!(fs::read(out.join("Key.pfx")).unwrap(), bytes);
}

#[test]
fn test_unclassified_non_utf8_file_is_copied_verbatim_without_substitutions() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("photo.jpg");
    let bytes = [0xff, 0xd8, 0xff, 0xe0, 0x00];
    fs::write(&source, bytes).unwrap();

    let copier = FileCopier::default();
    assert_eq!(copier.classify(&source).unwrap(), FileClass::Text);
    copier.copy(&source, temp_dir.path(), "copy.jpg", &SubstitutionMap::new()).unwrap();

    assert_eq!(fs::read(temp_dir.path().join("copy.jpg")).unwrap(), bytes);
}

#[test]
fn test_text_placeholders_are_all_replaced() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("notes.txt");
    fs::write(&source, "$(SourceFilesPath)/a.cpp\n$(SourceFilesPath)/b.cpp\n").unwrap();
    let out = temp_dir.path().join("out");
    fs::create_dir(&out).unwrap();

    FileCopier::default().copy(&source, &out, "notes.txt", &placeholder_map()).unwrap();

    assert_eq!(
        fs::read_to_string(out.join("notes.txt")).unwrap(),
        "../../src/a.cpp\n../../src/b.cpp\n"
    );
}

#[cfg(unix)]
#[test]
fn test_text_copy_preserves_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("build.sh");
    fs::write(&source, "#!/bin/sh\necho $(SourceFilesPath)\n").unwrap();
    fs::set_permissions(&source, fs::Permissions::from_mode(0o750)).unwrap();

    FileCopier::default().copy(&source, temp_dir.path(), "copy.sh", &placeholder_map()).unwrap();

    let mode = fs::metadata(temp_dir.path().join("copy.sh")).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o750);
}

#[cfg(unix)]
#[test]
fn test_read_only_output_is_regenerated() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("packages.config");
    fs::write(&source, "first").unwrap();
    fs::set_permissions(&source, fs::Permissions::from_mode(0o444)).unwrap();
    let copier = FileCopier::default();

    copier.copy(&source, temp_dir.path(), "out.config", &SubstitutionMap::new()).unwrap();

    fs::set_permissions(&source, fs::Permissions::from_mode(0o644)).unwrap();
    fs::write(&source, "second").unwrap();
    fs::set_permissions(&source, fs::Permissions::from_mode(0o444)).unwrap();

    copier.copy(&source, temp_dir.path(), "out.config", &SubstitutionMap::new()).unwrap();

    let destination = temp_dir.path().join("out.config");
    assert_eq!(fs::read_to_string(&destination).unwrap(), "second");
    assert_eq!(fs::metadata(&destination).unwrap().permissions().mode() & 0o777, 0o444);
}

#[test]
fn test_directory_source_creates_destination_once_or_twice() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("assets");
    fs::create_dir(&source).unwrap();
    let copier = FileCopier::default();

    copier.copy(&source, temp_dir.path(), "out/Bundle/assets", &SubstitutionMap::new()).unwrap();
    copier.copy(&source, temp_dir.path(), "out/Bundle/assets", &SubstitutionMap::new()).unwrap();

    assert!(temp_dir.path().join("out/Bundle/assets").is_dir());
}

#[test]
fn test_missing_source_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let result = FileCopier::default().copy(
        temp_dir.path().join("missing.vcxproj"),
        temp_dir.path(),
        "missing.vcxproj",
        &SubstitutionMap::new(),
    );
    assert!(result.is_err());
}

#[test]
fn test_classification() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("logo.png"), b"png").unwrap();
    fs::write(temp_dir.path().join("app.ico"), b"ico").unwrap();
    fs::write(temp_dir.path().join("App.cpp"), "int main;").unwrap();

    let copier = FileCopier::default();
    assert_eq!(copier.classify(temp_dir.path()).unwrap(), FileClass::Directory);
    assert_eq!(copier.classify(temp_dir.path().join("logo.png")).unwrap(), FileClass::Binary);
    assert_eq!(copier.classify(temp_dir.path().join("App.cpp")).unwrap(), FileClass::Text);
    assert_eq!(copier.classify(temp_dir.path().join("app.ico")).unwrap(), FileClass::Text);

    let copier = FileCopier::new(BinaryExtensions::new([".png", ".pfx", ".ico"]));
    assert_eq!(copier.classify(temp_dir.path().join("app.ico")).unwrap(), FileClass::Binary);
}

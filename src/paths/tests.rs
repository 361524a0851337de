//! Tests for the paths module.

use super::*;
use std::path::Path;

#[test]
fn test_relative_to() {
    // File beneath the root
    let path = Path::new("/home/user/project/src/main.rs");
    let result = relative_to(path, "/home/user/project");
    assert_eq!(result, PathBuf::from("src/main.rs"));

    // File outside the root stays as-is
    let result = relative_to("/var/log/syslog", "/home/user");
    assert_eq!(result, PathBuf::from("/var/log/syslog"));

    // Textual prefix that is not a component prefix
    let result = relative_to("/home/username/file.txt", "/home/user");
    assert_eq!(result, PathBuf::from("/home/username/file.txt"));

    // Root with a trailing separator
    let result = relative_to("src/lib.rs", "src/");
    assert_eq!(result, PathBuf::from("lib.rs"));
}

#[test]
fn test_display_path() {
    let path = Path::new("root/sub/y.txt");

    assert_eq!(display_path(path, None), "root/sub/y.txt");
    assert_eq!(display_path(path, Some(Path::new("root"))), "sub/y.txt");
    assert_eq!(display_path(path, Some(Path::new("elsewhere"))), "root/sub/y.txt");
}

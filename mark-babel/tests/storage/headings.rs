//! Leading heading tests

use mark_babel::{drop_leading_h1, extract_leading_h1};

#[test]
fn test_extract_and_drop() {
    assert_eq!(extract_leading_h1("# Title\nBody"), "Title");
    assert_eq!(drop_leading_h1("# Title\nBody"), "Body");
}

#[test]
fn test_heading_not_at_start() {
    assert_eq!(extract_leading_h1("Body\n# Title"), "");
    assert_eq!(drop_leading_h1("Body\n# Title"), "Body\n# Title");
}

#[test]
fn test_only_first_heading_dropped() {
    let md = "# One\n# Two\n# Three\n";
    assert_eq!(drop_leading_h1(md), "# Two\n# Three\n");
    assert_eq!(extract_leading_h1(md), "One");
}

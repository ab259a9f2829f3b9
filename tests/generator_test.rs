mod common;

#[test]
fn test_generate_script() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("script.csv");
    common::generate_script(&path, &[("digit", "5"), ("dot", ""), ("key", "Enter")])
        .expect("Failed to generate script");

    let content = std::fs::read_to_string(&path).expect("Failed to read file");
    // Header + 3 rows
    assert_eq!(content.lines().count(), 4);
    assert!(content.starts_with("command,arg"));
}

#[test]
fn test_generate_counting_script() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("count.csv");
    common::generate_counting_script(&path, 10).expect("Failed to generate script");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(&path)
        .expect("Failed to open CSV");

    let commands: Vec<String> = reader
        .records()
        .map(|r| r.expect("Failed to read record")[0].to_string())
        .collect();
    // 1, then (+, 1) ten times, then =
    assert_eq!(commands.len(), 22);
    assert_eq!(commands.last().map(String::as_str), Some("operator"));
}

use std::fs;
use std::path::Path;

use catalog_core::Platform;
use catalog_engine::{
    generate, parse_records, render_readme, scan_content, DataFormat, GenerateOptions,
    ReadmeError, ScanError,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const README: &str = "\
# Catalog

LinkedIn posts: <!-- AUTO:LINKEDIN_COUNT -->0<!-- /AUTO:LINKEDIN_COUNT -->
YouTube sessions: <!-- AUTO:YOUTUBE_COUNT -->0<!-- /AUTO:YOUTUBE_COUNT -->
Total: <!-- AUTO:TOTAL_COUNT -->0<!-- /AUTO:TOTAL_COUNT -->
<!-- AUTO:TOTAL_BADGE --><!-- /AUTO:TOTAL_BADGE -->

<!-- AUTO:TOPIC_BADGES_START -->
stale
<!-- AUTO:TOPIC_BADGES_END -->
";

fn write_folder(root: &Path, platform: &str, id: &str, files: &[(&str, &str)]) {
    let dir = root.join(platform).join(id);
    fs::create_dir_all(&dir).unwrap();
    for (name, contents) in files {
        fs::write(dir.join(name), contents).unwrap();
    }
}

fn content_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("content");
    write_folder(
        &root,
        "linkedin",
        "0002",
        &[
            ("name.txt", "Benford's Law\n"),
            ("url.txt", "TODO: publish"),
            ("tags.txt", "excel\n\n  data-analysis  \n"),
            ("Files.zip", "zip"),
        ],
    );
    write_folder(
        &root,
        "linkedin",
        "0001",
        &[("name.txt", "Nested IFS"), ("tags.txt", "power-query\nvba")],
    );
    write_folder(&root, "linkedin", "0003", &[("name.txt", "   ")]);
    write_folder(&root, "linkedin", "notes", &[("readme.md", "not content")]);
    write_folder(
        &root,
        "youtube",
        "20250307",
        &[
            ("name.txt", "Live session"),
            ("url.txt", "https://www.youtube.com/watch?v=abc"),
        ],
    );
    temp
}

#[test]
fn scan_reads_folders_in_order_and_skips_invalid_ones() {
    let temp = content_tree();
    let root = temp.path().join("content");
    let records = scan_content(&root).unwrap();

    let keys: Vec<String> = records.iter().map(|r| r.key().to_string()).collect();
    assert_eq!(keys, vec!["linkedin-0001", "linkedin-0002", "youtube-20250307"]);

    let benford = &records[1];
    assert_eq!(benford.title, "Benford's Law");
    assert_eq!(benford.url, "");
    assert_eq!(benford.tags, vec!["excel", "data-analysis"]);
    let expected_zip = format!("{}/linkedin/0002/Files.zip", root.to_string_lossy().replace('\\', "/"));
    assert_eq!(benford.download_url.as_deref(), Some(expected_zip.as_str()));

    assert_eq!(records[0].download_url, None);
    assert_eq!(records[2].platform, Platform::YouTube);
    assert_eq!(records[2].url, "https://www.youtube.com/watch?v=abc");
}

#[test]
fn missing_platform_directory_is_skipped() {
    let temp = TempDir::new().unwrap();
    write_folder(temp.path(), "youtube", "20240101", &[("name.txt", "Only video")]);
    let records = scan_content(temp.path()).unwrap();
    assert_eq!(records.len(), 1);
    assert!(scan_content(&temp.path().join("nowhere")).unwrap().is_empty());
}

#[test]
fn scan_error_names_duplicate() {
    let err = ScanError::DuplicateId {
        platform: Platform::LinkedIn,
        id: "0001".into(),
    };
    assert_eq!(err.to_string(), "duplicate id '0001' in platform 'linkedin'");
}

#[test]
fn readme_markers_are_rewritten() {
    let temp = content_tree();
    let records = scan_content(&temp.path().join("content")).unwrap();
    let readme = render_readme(README, &records).unwrap();

    assert!(readme.contains("<!-- AUTO:LINKEDIN_COUNT -->2<!-- /AUTO:LINKEDIN_COUNT -->"));
    assert!(readme.contains("<!-- AUTO:YOUTUBE_COUNT -->1<!-- /AUTO:YOUTUBE_COUNT -->"));
    assert!(readme.contains("<!-- AUTO:TOTAL_COUNT -->3<!-- /AUTO:TOTAL_COUNT -->"));
    assert!(readme.contains("badge/Total-3-FFD100?style=for-the-badge"));
    assert!(!readme.contains("stale"));

    let block_start = readme.find("<!-- AUTO:TOPIC_BADGES_START -->").unwrap();
    let block: Vec<&str> = readme[block_start..].lines().skip(1).take(4).collect();
    assert_eq!(
        block,
        vec![
            "<img src=\"https://img.shields.io/badge/Excel-217346?style=flat-square&logo=microsoftexcel&logoColor=white\" alt=\"Excel\">&nbsp;",
            "<img src=\"https://img.shields.io/badge/Power_Query-F2C811?style=flat-square&logoColor=black\" alt=\"Power Query\">&nbsp;",
            "<img src=\"https://img.shields.io/badge/Data_Analysis-2E86C1?style=flat-square&logoColor=white\" alt=\"Data Analysis\">&nbsp;",
            "<img src=\"https://img.shields.io/badge/Vba-6C757D?style=flat-square\" alt=\"Vba\">",
        ]
    );
    assert_eq!(render_readme(&readme, &records).unwrap(), readme);
}

#[test]
fn duplicated_marker_is_an_error() {
    let doubled = format!("{README}<!-- AUTO:TOTAL_COUNT -->9<!-- /AUTO:TOTAL_COUNT -->");
    let err = render_readme(&doubled, &[]).unwrap_err();
    assert!(matches!(
        err,
        ReadmeError::MarkerCount { ref marker, found: 2 } if marker == "TOTAL_COUNT"
    ));
}

#[test]
fn generate_writes_legacy_script_and_readme() {
    let temp = content_tree();
    let readme = temp.path().join("README.md");
    fs::write(&readme, README).unwrap();
    let output = temp.path().join("js").join("data.js");

    let summary = generate(&GenerateOptions {
        content_root: temp.path().join("content"),
        output: output.clone(),
        readme: Some(readme.clone()),
        format: DataFormat::LegacyScript,
    })
    .unwrap();

    assert_eq!((summary.linkedin, summary.youtube, summary.total()), (2, 1, 3));
    assert!(summary.readme_updated);
    let script = fs::read_to_string(&output).unwrap();
    assert!(script.starts_with("window.CONTENT_DATA = [\n  {\n    \"id\": \"0001\","));
    assert!(script.ends_with("];"));
    assert_eq!(parse_records(&script).unwrap().len(), 3);
    assert!(fs::read_to_string(&readme).unwrap().contains("TOTAL_COUNT -->3<"));
}

#[test]
fn generate_fails_on_missing_readme_after_writing_data() {
    let temp = content_tree();
    let output = temp.path().join("content.json");
    let err = generate(&GenerateOptions {
        content_root: temp.path().join("content"),
        output: output.clone(),
        readme: Some(temp.path().join("README.md")),
        format: DataFormat::Json,
    })
    .unwrap_err();

    assert!(err.to_string().contains("README file not found"));
    assert_eq!(parse_records(&fs::read_to_string(&output).unwrap()).unwrap().len(), 3);
}

#![allow(missing_docs, clippy::expect_used, clippy::unwrap_used)]

mod common;

use common::{SAMPLE_LIST, dir_entries, read_file, sitegen_cmd, write_file};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn generate_writes_default_sitemap() {
    let tmp = tempdir().unwrap();
    write_file(tmp.path(), "urls.txt", SAMPLE_LIST);

    sitegen_cmd(tmp.path())
        .args(["generate", "urls.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 3 URLs to sitemap.xml"));

    let xml = read_file(tmp.path(), "sitemap.xml");
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#));
    assert_eq!(xml.matches("<url>").count(), 3);
    assert_eq!(xml.matches("<changefreq>monthly</changefreq>").count(), 3);
    let blog = xml.find("https://example.com/blog").unwrap();
    let pricing = xml.find("https://example.com/pricing").unwrap();
    assert!(pricing < blog);
}

#[test]
fn generate_then_parse_restores_collapsed_list() {
    let tmp = tempdir().unwrap();
    write_file(tmp.path(), "urls.txt", SAMPLE_LIST);

    sitegen_cmd(tmp.path())
        .args(["generate", "urls.txt", "site.xml"])
        .assert()
        .success();
    sitegen_cmd(tmp.path())
        .args(["parse", "site.xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("parsedSitemap.txt"));

    assert_eq!(
        read_file(tmp.path(), "parsedSitemap.txt"),
        "0.9\nhttps://example.com/\nhttps://example.com/pricing\n0.5\nhttps://example.com/blog\n"
    );
}

#[test]
fn url_before_priority_is_a_format_error() {
    let tmp = tempdir().unwrap();
    write_file(tmp.path(), "urls.txt", "https://example.com/\n0.5\n");

    sitegen_cmd(tmp.path())
        .args(["generate", "urls.txt"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("line 1"));

    assert_eq!(dir_entries(tmp.path()), vec!["urls.txt".to_string()]);
}

#[test]
fn empty_list_is_a_format_error() {
    let tmp = tempdir().unwrap();
    write_file(tmp.path(), "urls.txt", "\n\n");

    sitegen_cmd(tmp.path())
        .args(["generate", "urls.txt"])
        .assert()
        .code(3);
}

#[test]
fn missing_input_is_an_io_error() {
    let tmp = tempdir().unwrap();

    sitegen_cmd(tmp.path())
        .args(["generate", "nope.txt"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("nope.txt"));
    assert!(dir_entries(tmp.path()).is_empty());
}

#[test]
fn malformed_sitemap_is_a_format_error() {
    let tmp = tempdir().unwrap();
    write_file(tmp.path(), "broken.xml", "<urlset><url><loc>x</loc>");

    sitegen_cmd(tmp.path())
        .args(["parse", "broken.xml"])
        .assert()
        .code(3);
    assert!(!tmp.path().join("parsedSitemap.txt").exists());
}

#[test]
fn wrong_argument_count_is_a_usage_error() {
    let tmp = tempdir().unwrap();

    sitegen_cmd(tmp.path()).arg("generate").assert().code(2);
    sitegen_cmd(tmp.path())
        .args(["parse", "a.xml", "b.txt", "extra"])
        .assert()
        .code(2);
    sitegen_cmd(tmp.path()).assert().code(2);
}

#[test]
fn quiet_suppresses_summary() {
    let tmp = tempdir().unwrap();
    write_file(tmp.path(), "urls.txt", SAMPLE_LIST);

    sitegen_cmd(tmp.path())
        .args(["-q", "generate", "urls.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert!(tmp.path().join("sitemap.xml").exists());
}

#[test]
fn config_changes_indent_and_defaults() {
    let tmp = tempdir().unwrap();
    write_file(tmp.path(), "urls.txt", "1.0\nhttps://example.com/\n");
    write_file(
        tmp.path(),
        "sitegen.toml",
        "[defaults]\nsitemap_output = \"custom.xml\"\n\n[format]\nindent_width = 4\n",
    );

    sitegen_cmd(tmp.path())
        .args(["--config", "sitegen.toml", "generate", "urls.txt"])
        .assert()
        .success();

    let xml = read_file(tmp.path(), "custom.xml");
    assert!(xml.contains("\n    <url>\n        <loc>https://example.com/</loc>"));
}

#[test]
fn invalid_config_is_a_config_error() {
    let tmp = tempdir().unwrap();
    write_file(tmp.path(), "urls.txt", SAMPLE_LIST);
    write_file(tmp.path(), "sitegen.toml", "[format]\nindent_char = \"x\"\n");

    sitegen_cmd(tmp.path())
        .args(["--config", "sitegen.toml", "generate", "urls.txt"])
        .assert()
        .code(5);
    assert!(!tmp.path().join("sitemap.xml").exists());
}

#[test]
fn out_of_range_priority_can_be_allowed_by_config() {
    let tmp = tempdir().unwrap();
    write_file(tmp.path(), "urls.txt", "1.5\nhttps://example.com/\n");

    sitegen_cmd(tmp.path())
        .args(["generate", "urls.txt"])
        .assert()
        .code(3);

    write_file(tmp.path(), "sitegen.toml", "[format]\nstrict_priority = false\n");
    sitegen_cmd(tmp.path())
        .args(["--config", "sitegen.toml", "generate", "urls.txt"])
        .assert()
        .success();
    assert!(read_file(tmp.path(), "sitemap.xml").contains("<priority>1.5</priority>"));
}

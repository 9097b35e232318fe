//! Layout and record properties of the configuration builder.

use packcfg_config::{resolve_path, ConfigBuilder, Mode, PluginDescriptor};
use std::path::{Path, PathBuf};

const PROJECT: &str = "/project/frontend";

#[test]
fn output_path_is_dist_under_config_dir() {
    let record = ConfigBuilder::new(PROJECT).unwrap().build();
    assert_eq!(
        record.output.path,
        resolve_path(Path::new(PROJECT), &["dist"]).unwrap()
    );
}

#[test]
fn entry_is_src_index_js() {
    let record = ConfigBuilder::new(PROJECT).unwrap().build();
    assert_eq!(
        record.entry,
        resolve_path(Path::new(PROJECT), &["src", "index.js"]).unwrap()
    );
}

#[test]
fn first_plugin_is_html_template_in_src() {
    let record = ConfigBuilder::new(PROJECT).unwrap().build();
    let PluginDescriptor::Html(html) = &record.plugins[0];
    assert_eq!(
        html.template,
        resolve_path(Path::new(PROJECT), &["src", "index.html"]).unwrap()
    );
    assert_eq!(html.filename, "index.html");
}

#[test]
fn dev_server_serves_output_directory() {
    let record = ConfigBuilder::new(PROJECT).unwrap().build();
    assert_eq!(record.dev_server.static_directory(), record.output.path);
}

#[test]
fn build_is_idempotent() {
    let builder = ConfigBuilder::new(PROJECT).unwrap();
    assert_eq!(builder.build(), builder.build());
}

#[test]
fn frontend_scenario() {
    let record = ConfigBuilder::new(PROJECT).unwrap().build();
    assert_eq!(record.mode, Mode::Development);
    assert_eq!(record.output.path, PathBuf::from("/project/frontend/dist"));
    assert_eq!(record.output.filename, "main.js");
    assert_eq!(record.entry, PathBuf::from("/project/frontend/src/index.js"));
    assert_eq!(record.plugins.len(), 1);
}

#[test]
fn unnormalized_config_dir_is_cleaned() {
    let record = ConfigBuilder::new("/project/./tools/../frontend/")
        .unwrap()
        .build();
    assert_eq!(record.output.path, PathBuf::from("/project/frontend/dist"));
}

#[test]
fn relative_config_dir_is_anchored_at_cwd() {
    let cwd = std::env::current_dir().unwrap();
    let record = ConfigBuilder::new("frontend").unwrap().build();
    assert!(record.entry.is_absolute());
    assert_eq!(record.output.path, cwd.join("frontend").join("dist"));
}

#[test]
fn for_config_file_uses_parent_directory() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("packcfg.toml");
    std::fs::write(&file, "").unwrap();

    let builder = ConfigBuilder::for_config_file(&file, None).unwrap();
    assert_eq!(builder.config_dir(), dir.path());
    assert_eq!(builder.build().output.path, dir.path().join("dist"));
}

#![allow(dead_code)]

use stats_embed::prelude::*;
use std::path::PathBuf;

pub const ROOT_APP: &str = "https://synthetix.streamlit.app";
pub const ALL_APP: &str = "https://synthetix-all.streamlit.app";

pub fn resolve(target: &str) -> String {
    RouteResolver::default().resolve(&Location::parse(target))
}

pub fn render(target: &str) -> String {
    EmbedService::default()
        .render(&Location::parse(target))
        .unwrap()
}

/// Writes `content` to a per-test file under the system temp dir.
pub fn write_routes_file(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("stats-embed-tests");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("{}-{}.json", name, std::process::id()));
    std::fs::write(&path, content).unwrap();
    path
}

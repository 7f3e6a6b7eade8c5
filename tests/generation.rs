//! End-to-end generation tests.

use proxy_cache_gen::config::{GeneratorConfig, GroupDirectory, GroupEntry};
use proxy_cache_gen::pipeline::{generate, GenerateError};
use proxy_cache_gen::render::RenderError;
use proxy_cache_gen::routing::{MatchSpec, RouteCompiler, RouteError};
use proxy_cache_gen::RouteDescriptor;
use regex::Regex;

mod common;

fn config_for(group: &str) -> GeneratorConfig {
    let mut config = GeneratorConfig::default();
    config.target_group = group.to_string();
    config.includes.proxy = "/etc/nginx/proxy.conf".into();
    config.includes.cache = "/etc/nginx/cache.conf".into();
    config
}

/// Splits location text into blocks.
fn blocks(text: &str) -> Vec<&str> {
    text.split("\n\n# GROUP:").collect()
}

#[test]
fn test_only_target_group_is_rendered() {
    let routes = common::route_table();
    let directory = common::reference_directory();

    for group in ["moderator-web", "teacher", "moderator-mobile", "parent"] {
        let artifacts = generate(&config_for(group), &directory, &routes).unwrap();
        let expected = routes
            .iter()
            .filter(|r| r.url.starts_with(&format!("/{}-api/", group)))
            .count();

        let headers: Vec<_> = artifacts
            .locations
            .lines()
            .filter(|l| l.starts_with("# GROUP: "))
            .collect();
        assert_eq!(headers.len(), expected, "group {}", group);
        assert!(headers.iter().all(|h| *h == format!("# GROUP: {}", group)));
    }
}

#[test]
fn test_other_group_absent_from_compiled_and_rendered() {
    let routes = common::route_table();
    let compiled = RouteCompiler::new("moderator-web").compile(&routes).unwrap();
    assert!(compiled.iter().all(|r| r.group == "moderator-web"));
    assert!(!compiled.iter().any(|r| r.route.starts_with("classes")));

    let artifacts = generate(
        &config_for("moderator-web"),
        &common::reference_directory(),
        &routes,
    )
    .unwrap();
    assert!(!artifacts.locations.contains("teacher"));
    assert!(!artifacts.locations.contains("moderator_mobile"));
}

#[test]
fn test_dynamic_route_example() {
    let routes = vec![RouteDescriptor::new("/moderator-web-api/users/:id", 5)];
    let compiled = RouteCompiler::new("moderator-web").compile(&routes).unwrap();
    assert_eq!(compiled.len(), 1);
    assert!(compiled[0].is_dynamic());
    assert_eq!(compiled[0].route, "users");

    let artifacts = generate(
        &config_for("moderator-web"),
        &common::reference_directory(),
        &routes,
    )
    .unwrap();
    let text = artifacts.locations;

    assert!(text.contains("# ROUTE: /users/:id\n"));
    assert!(text.contains("location ~ \"users\\/(?<id>[0-9a-fA-F]{24})\" {"));
    assert!(text.contains("\tproxy_pass http://moderator_web_app/users/$id;"));
    assert!(text.contains("\tproxy_cache moderator_web_cache;"));
    assert!(text.contains("\tproxy_cache_valid 200 201 5m;"));
}

#[test]
fn test_static_route_example() {
    let routes = vec![RouteDescriptor::new("/moderator-web-api/settings", 0)];
    let compiled = RouteCompiler::new("moderator-web").compile(&routes).unwrap();
    assert!(!compiled[0].is_dynamic());
    assert_eq!(compiled[0].route, "settings");
    assert_eq!(compiled[0].url, MatchSpec::Exact("/settings".into()));

    let text = generate(
        &config_for("moderator-web"),
        &common::reference_directory(),
        &routes,
    )
    .unwrap()
    .locations;

    assert!(text.contains("location = /settings {"));
    assert!(text.contains("\tproxy_pass http://moderator_web_app/settings;"));
    assert!(!text.contains("$id"));
    assert!(text.contains("\tproxy_cache_valid 200 201 0m;"));
}

#[test]
fn test_capture_pattern_matches_object_ids_only() {
    let routes = common::route_table();
    let compiled = RouteCompiler::new("moderator-web").compile(&routes).unwrap();

    for route in compiled.iter().filter(|r| r.is_dynamic()) {
        let expr = route.url.argument().trim_matches('"').replace("\\/", "/");
        let re = Regex::new(&format!("^/{}$", expr)).unwrap();
        let prefix = if route.route.is_empty() {
            String::new()
        } else {
            format!("/{}", route.route)
        };

        let hit = format!("{}/65a1F0c2b3d4e5f60718293a", prefix);
        let caps = re.captures(&hit).unwrap_or_else(|| panic!("{} vs {}", expr, hit));
        assert_eq!(&caps["id"], "65a1F0c2b3d4e5f60718293a");
        assert!(!re.is_match(&format!("{}/65a1f0c2", prefix)));
        assert!(!re.is_match(&format!("{}/not-an-object-id-at-all!!", prefix)));
    }
}

#[test]
fn test_literal_segments_do_not_act_as_regex() {
    let routes = vec![RouteDescriptor::new("/moderator-web-api/files/report.json/:id", 1)];
    let compiled = RouteCompiler::new("moderator-web").compile(&routes).unwrap();

    let expr = compiled[0].url.argument().trim_matches('"').replace("\\/", "/");
    let re = Regex::new(&format!("^/{}$", expr)).unwrap();
    assert!(re.is_match("/files/report.json/65a1F0c2b3d4e5f60718293a"));
    assert!(!re.is_match("/files/reportXjson/65a1F0c2b3d4e5f60718293a"));
}

#[test]
fn test_route_order_and_block_separation() {
    let artifacts = generate(
        &config_for("moderator-web"),
        &common::reference_directory(),
        &common::route_table(),
    )
    .unwrap();

    let routes: Vec<_> = artifacts
        .locations
        .lines()
        .filter_map(|l| l.strip_prefix("# ROUTE: "))
        .collect();
    assert_eq!(routes, ["/users/:id", "/settings", "/schools/classes/:id", "/:id"]);
    assert_eq!(blocks(&artifacts.locations).len(), 4);
    assert!(!artifacts.locations.contains("\n\n\n"));
    assert!(artifacts.locations.contains("\tproxy_pass http://moderator_web_app/$id;"));
}

#[test]
fn test_output_is_deterministic() {
    let config = config_for("moderator-web");
    let directory = common::reference_directory();
    let routes = common::route_table();

    let first = generate(&config, &directory, &routes).unwrap();
    let second = generate(&config, &directory, &routes).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_zone_per_group_regardless_of_routes() {
    let directory = common::reference_directory();

    for routes in [Vec::new(), common::route_table()] {
        let zones = generate(&config_for("parent"), &directory, &routes)
            .unwrap()
            .zones;
        let lines: Vec<_> = zones.lines().collect();
        assert_eq!(lines.len(), directory.len());
        for (line, entry) in lines.iter().zip(directory.iter()) {
            assert_eq!(
                *line,
                format!(
                    "proxy_cache_path {} levels=1:2 keys_zone={}:10m max_size=10g inactive=10m use_temp_path=off;",
                    entry.folder, entry.zone
                )
            );
        }
    }
}

#[test]
fn test_empty_folder_fails_zone_rendering() {
    let mut entries: Vec<GroupEntry> = common::reference_directory().iter().cloned().collect();
    entries[3].folder.clear();

    let err = generate(
        &config_for("moderator-web"),
        &GroupDirectory::new(entries),
        &common::route_table(),
    )
    .unwrap_err();

    match err {
        GenerateError::Render(RenderError::MissingField { group, field }) => {
            assert_eq!(group, "parent");
            assert_eq!(field, "folder");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_missing_group_entry_fails() {
    let directory = GroupDirectory::new(
        common::reference_directory()
            .iter()
            .filter(|e| e.key != "teacher")
            .cloned()
            .collect(),
    );

    let err = generate(&config_for("teacher"), &directory, &common::route_table()).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Render(RenderError::UnknownGroup(ref g)) if g == "teacher"
    ));
}

#[test]
fn test_malformed_route_aborts_whole_run() {
    let mut routes = common::route_table();
    routes.push(RouteDescriptor::new("/reports", 1));

    let err = generate(
        &config_for("moderator-web"),
        &common::reference_directory(),
        &routes,
    )
    .unwrap_err();

    match err {
        GenerateError::Compile(e) => {
            assert_eq!(e.index, 7);
            assert_eq!(e.source, RouteError::MissingApiSuffix("reports".into()));
        }
        other => panic!("unexpected error: {}", other),
    }
}

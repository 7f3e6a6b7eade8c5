//! Shared fixtures for integration tests.

use proxy_cache_gen::config::{GroupDirectory, GroupEntry};
use proxy_cache_gen::RouteDescriptor;

/// The five reference groups with folders under `/var/cache/nginx`.
#[allow(dead_code)]
pub fn reference_directory() -> GroupDirectory {
    GroupDirectory::new(
        ["moderator-web", "moderator-mobile", "teacher", "parent", "student"]
            .into_iter()
            .map(|key| {
                let snake = key.replace('-', "_");
                GroupEntry {
                    key: key.to_string(),
                    folder: format!("/var/cache/nginx/{}", snake),
                    upstream: format!("{}_app", snake),
                    zone: format!("{}_cache", snake),
                }
            })
            .collect(),
    )
}

/// A mixed route table spanning several groups.
#[allow(dead_code)]
pub fn route_table() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::new("/moderator-web-api/users/:id", 5),
        RouteDescriptor::new("/teacher-api/classes", 10),
        RouteDescriptor::new("/moderator-web-api/settings", 0),
        RouteDescriptor::new("/moderator-mobile-api/feed", 1),
        RouteDescriptor::new("/moderator-web-api/schools/classes/:classId", 30),
        RouteDescriptor::new("/teacher-api/classes/:id", 10),
        RouteDescriptor::new("/moderator-web-api/:id", 2),
    ]
}

/// Same table as JSON text.
#[allow(dead_code)]
pub fn route_table_json() -> String {
    serde_json::to_string_pretty(&route_table()).unwrap()
}

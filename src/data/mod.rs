//! Static JSON storage: resource catalog, per-request loading, and the
//! stored-URL domain rewriter.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Domains from previous deployments that may linger inside stored URLs.
pub const STALE_DOMAINS: &[&str] = &[
    "https://api.attackontitanapi.com",
    "http://localhost:3001",
];

/// The five fixed resource collections served by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Characters,
    Episodes,
    Locations,
    Organizations,
    Titans,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::Characters,
        Resource::Episodes,
        Resource::Locations,
        Resource::Organizations,
        Resource::Titans,
    ];

    /// Resource name, used both as the route segment and the file stem.
    pub fn name(self) -> &'static str {
        match self {
            Resource::Characters => "characters",
            Resource::Episodes => "episodes",
            Resource::Locations => "locations",
            Resource::Organizations => "organizations",
            Resource::Titans => "titans",
        }
    }

    fn file_path(self, data_dir: &str) -> PathBuf {
        Path::new(data_dir).join(format!("{}.json", self.name()))
    }
}

/// Load the full collection for a resource from its JSON file.
///
/// Collections are re-read on every request; they are small, static, and
/// treated as immutable for the lifetime of the request.
pub fn load<T: DeserializeOwned>(data_dir: &str, resource: Resource) -> Result<Vec<T>, AppError> {
    let path = resource.file_path(data_dir);
    let raw = fs::read_to_string(&path).map_err(|source| AppError::DataLoad {
        resource: resource.name(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| AppError::DataParse {
        resource: resource.name(),
        source,
    })
}

/// Replace every occurrence of each old domain with `new_origin` across all
/// five data files. Entity cross-references are stored as absolute API URLs,
/// so redeploying under a new domain leaves stale links behind; this rewrites
/// them in place.
///
/// Returns the names of the files that were actually modified.
pub fn rewrite_stored_urls(
    data_dir: &str,
    old_domains: &[&str],
    new_origin: &str,
) -> std::io::Result<Vec<&'static str>> {
    let mut changed = Vec::new();

    for resource in Resource::ALL {
        let path = resource.file_path(data_dir);
        let content = fs::read_to_string(&path)?;

        let mut updated = content.clone();
        for domain in old_domains {
            updated = updated.replace(domain, new_origin);
        }

        if updated != content {
            fs::write(&path, updated)?;
            changed.push(resource.name());
        }
    }

    Ok(changed)
}

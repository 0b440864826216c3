//! URLs for static content documents, honouring the deployment base path.
//!
//! When `PUBLIC_URL` is set at compile time (e.g. `/site` when hosted under a
//! subdirectory), generated URLs are prefixed accordingly. Builds without
//! `PUBLIC_URL` use root-anchored paths.

use mbm_content::ContentDomain;

#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// URL of the document backing `domain`.
#[must_use]
pub fn content_url(domain: ContentDomain) -> String {
    asset_path(&domain.document_path())
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

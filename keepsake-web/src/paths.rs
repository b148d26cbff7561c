//! URLs for static assets that respect the deployment base path.
///
/// `PUBLIC_URL` set at compile time (e.g. `/keepsake` on GitHub Pages)
/// prefixes generated URLs; local builds without it use root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base path for the router, `None` when the app is hosted at the root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_to_root_without_a_base() {
        assert_eq!(asset_path("audio/anthem.mp3"), "/audio/anthem.mp3");
        assert_eq!(asset_path("/audio/anthem.mp3"), "/audio/anthem.mp3");
        assert_eq!(router_base(), None);
    }

    #[test]
    fn prefixes_the_configured_base() {
        assert_eq!(
            asset_path_with_base("photos/us.jpg", "/keepsake"),
            "/keepsake/photos/us.jpg"
        );
        assert_eq!(
            asset_path_with_base("/photos/us.jpg", "/keepsake/"),
            "/keepsake/photos/us.jpg"
        );
        assert_eq!(
            router_base_with_base("/keepsake/"),
            Some(String::from("/keepsake"))
        );
    }
}

//! Build metadata stamped in by `build.rs`.

/// Short commit the bundle was built from, `unknown` outside a git checkout.
pub fn git_commit_hash() -> &'static str {
    option_env!("SECUREGATE_WEB_GIT_SHA")
        .filter(|sha| !sha.is_empty())
        .unwrap_or("unknown")
}

/// `<crate version> (<commit>)`, logged once at startup.
pub fn version_label() -> String {
    format!("{} ({})", env!("CARGO_PKG_VERSION"), git_commit_hash())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_label_names_crate_version_and_commit() {
        let label = version_label();
        assert!(label.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(label.ends_with(&format!("({})", git_commit_hash())));
    }
}

use semver::Version;

pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

pub fn get_version() -> String {
    let semver = env!("CARGO_PKG_VERSION").parse::<Version>();

    match (semver, GIT_SHA) {
        // vergen writes this placeholder when the build has no git metadata.
        (Ok(semver), Some(sha)) if sha != "VERGEN_IDEMPOTENT_OUTPUT" => {
            format!("{semver} ({sha})")
        }
        (Ok(semver), _) => semver.to_string(),
        (Err(e), _) => {
            tracing::warn!(err = ?e, "couldn't parse a semver out of Cargo.toml? defaulting to 0.0.0-unknown.");
            String::from("0.0.0-unknown")
        }
    }
}

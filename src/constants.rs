use std::sync::LazyLock;

use time::OffsetDateTime;

pub mod samples;
pub mod version;

pub static STARTUP_TIME: LazyLock<OffsetDateTime> = LazyLock::new(OffsetDateTime::now_utc);

pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";
pub const TEST_DATABASE_URL: &str = "sqlite::memory:";
pub const INSECURE_SECRET_KEY: &str = "dev-insecure";
pub const INSTANCE_SETTINGS_PATH: &str = "instance/config.env";

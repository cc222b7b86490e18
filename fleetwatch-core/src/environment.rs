use serde::Deserialize;
use strum::{AsRefStr, EnumString};

/// Which deployment environment the process runs in, selected through the
/// `APP_ENVIRONMENT` variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, AsRefStr, EnumString)]
pub enum Environment {
    Production,
    Staging,
    Development,
    Local,
    Test,
}

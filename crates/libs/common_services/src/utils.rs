use rand::Rng;
use rand::distr::Alphanumeric;

/// Random alphanumeric token, used to give each search query its own identity.
#[must_use]
pub fn opaque_token(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Warns about server data that looks wrong but that we can work around.
#[macro_export]
macro_rules! alert {
    ($($arg:tt)*) => {
        ::tracing::warn!(target: "immich::alert", "ALERT: {}", format_args!($($arg)*))
    };
}

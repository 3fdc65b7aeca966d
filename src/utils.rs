pub fn optional_env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

pub fn env_var_or(key: &str, default: &str) -> String {
    optional_env_var(key).unwrap_or_else(|| default.to_string())
}

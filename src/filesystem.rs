use std::path::PathBuf;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "OOTD_DATA_DIR";

/// Environment variable pointing at the configuration file
pub const CONFIG_PATH_ENV: &str = "OOTD_CONFIG";

/// Get the app data directory for the current platform
pub fn get_app_data_dir() -> PathBuf {
    match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from("./data"),
    }
}

/// Location of the configuration file
pub fn get_config_path() -> PathBuf {
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => get_app_data_dir().join("ootd.toml"),
    }
}

/// Default location of the SQLite database
pub fn get_database_path() -> PathBuf {
    get_app_data_dir().join("ootd.db")
}

use crate::Result;
use std::{env, fs::create_dir_all, path::PathBuf};

/// `$WIFI_SPOT_MAP_DATA_DIR` if set, `~/.local/share/wifi-spot-map` otherwise.
pub fn data_dir() -> Result<PathBuf> {
    let data_dir = match env::var_os("WIFI_SPOT_MAP_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        #[allow(deprecated)]
        None => env::home_dir()
            .ok_or("Home directory does not exist")?
            .join(".local/share/wifi-spot-map"),
    };
    if !data_dir.exists() {
        create_dir_all(&data_dir)?;
    }
    Ok(data_dir)
}

pub fn data_dir_file_path(file_name: &str) -> Result<PathBuf> {
    Ok(data_dir()?.join(file_name))
}

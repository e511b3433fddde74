use std::{
    fs::{self, File},
    io::BufReader,
    path::Path,
};

use serde::de::DeserializeOwned;

/// Writes `content` to `path`, replacing any previous file and creating missing parent directories
pub fn write_to_file(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)
}

pub fn load_from_json_file<T>(path: &Path) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned,
{
    let file = File::open(path).map_err(serde_json::Error::io)?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
}

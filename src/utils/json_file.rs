use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, warn};
use crate::core::library::LibraryResult;

const INDENT: &[u8] = b" ";

// Reads a json document, falling back to the default value when the file is
// missing, unreadable or malformed.
pub(crate) fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    match read_json(path) {
        Ok(Some(value)) => value,
        Ok(None) => {
            debug!(path = %path.display(), "no json file, starting empty");
            T::default()
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring unreadable json file");
            T::default()
        }
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> LibraryResult<Option<T>> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    Ok(Some(serde_json::from_slice(&data)?))
}

// Overwrites the whole file with the indented json of the value.
pub(crate) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> LibraryResult<()> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    fs::write(path, buf)?;
    Ok(())
}

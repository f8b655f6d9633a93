//! Loading of request batches.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::gateway::Request;

/// Parses a JSON array of requests.
pub fn read(reader: impl Read) -> serde_json::Result<Vec<Request>> {
    serde_json::from_reader(reader)
}

/// Reads the batch from `path`, or from stdin when no path is given.
pub fn load(path: Option<&Path>) -> Result<Vec<Request>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening request file {}", path.display()))?;
            read(BufReader::new(file))
                .with_context(|| format!("parsing request file {}", path.display()))
        }
        None => read(io::stdin().lock()).context("parsing requests from stdin"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"type": "cancel", "order_id": 3}}, {{"type": "new_order", "symbol": "IBM"}}]"#
        )
        .unwrap();

        let requests = load(Some(file.path())).unwrap();
        assert_eq!(requests.len(), 2);
        assert!(matches!(requests[0], Request::Cancel { order_id: 3 }));
    }

    #[test]
    fn test_unknown_request_type_is_rejected() {
        let err = read(r#"[{"type": "replace"}]"#.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("replace"));
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let err = load(Some(Path::new("does/not/exist.json"))).unwrap_err();
        assert!(format!("{err:#}").contains("does/not/exist.json"));
    }
}

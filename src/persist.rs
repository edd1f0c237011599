use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::RuntimeError;

/// Writes `value` to `path` as pretty-printed JSON.
pub fn save_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<(), RuntimeError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    info!("Saved {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Node;
    use crate::parsing::parse;
    use crate::structure::Structure;
    use std::fs;

    #[test]
    fn saved_tree_reads_back_identically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ast.json");
        let nodes = parse("p ^ ~q").unwrap();

        save_json(&nodes, &path).unwrap();

        let restored: Vec<Node> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(restored, nodes);
    }

    #[test]
    fn saves_structure_and_errors() {
        let dir = tempfile::tempdir().unwrap();

        let structure = Structure::generate(&parse("p ^ ~(q ˅ r)").unwrap()).unwrap();
        let path = dir.path().join("structure.json");
        save_json(&structure, &path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["structure"].as_array().map(Vec::len), Some(40));

        let error = parse("p ^").unwrap_err();
        let path = dir.path().join("error.json");
        save_json(&error, &path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["code"], "Unexpected");
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("ast.json");
        let error = save_json(&Vec::<Node>::new(), &path).unwrap_err();
        assert!(matches!(error, RuntimeError::Io(_)));
    }
}

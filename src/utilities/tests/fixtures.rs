use crate::api::input_file::InputFile;
use serde_json::json;
use std::fs;
use std::path::Path;

/// Builds a single-line record with the given fields.
/// `body_type` of [`None`] produces a record with an empty `bodies` array.
pub fn record_line(content_type: &str, chat_type: &str, body_type: Option<&str>) -> String {
    let bodies = match body_type {
        Some(body_type) => json!([{ "type": body_type, "msg": "hello" }]),
        None => json!([]),
    };

    json!({
        "content_type": content_type,
        "chat_type": chat_type,
        "payload": { "bodies": bodies },
    })
    .to_string()
}

/// Writes `lines` joined by newlines (with a trailing newline) into `dir/name`.
pub fn write_lines(dir: &Path, name: &str, lines: &[String]) -> InputFile {
    let mut contents = lines.join("\n");
    contents.push('\n');

    let path = dir.join(name);
    fs::write(&path, &contents).unwrap();
    InputFile::new(path, name.to_string(), contents.len() as u64)
}

/// Writes `count` numbered records into `dir/name`, starting at `first_id`.
pub fn write_numbered(dir: &Path, name: &str, first_id: u64, count: u64) -> InputFile {
    let lines: Vec<String> = (first_id..first_id + count)
        .map(|id| json!({ "id": id }).to_string())
        .collect();
    write_lines(dir, name, &lines)
}

/// Creates files holding their own name, returning them in the given order.
pub fn touch_files(dir: &Path, names: &[&str]) -> Vec<InputFile> {
    names
        .iter()
        .map(|name| {
            let path = dir.join(name);
            fs::write(&path, name.as_bytes()).unwrap();
            InputFile::new(path, name.to_string(), name.len() as u64)
        })
        .collect()
}

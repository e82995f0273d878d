use jsonl_sampler::api::input_file::InputFile;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde_json::json;
use std::fs;
use std::path::Path;

const CONTENT_TYPES: [&str; 3] = ["chat", "notice", "event"];
const CHAT_TYPES: [&str; 3] = ["single", "groupchat", "chatroom"];
const BODY_TYPES: [&str; 4] = ["txt", "img", "audio", "custom"];

/// Generates `count` chat-like records with message lengths spread over a few orders of magnitude.
pub fn make_records(count: usize, seed: u64) -> Vec<String> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..count)
        .map(|id| {
            let msg_len = 1usize << rng.random_range(0..12u32);
            json!({
                "id": id,
                "content_type": CONTENT_TYPES[rng.random_range(0..CONTENT_TYPES.len())],
                "chat_type": CHAT_TYPES[rng.random_range(0..CHAT_TYPES.len())],
                "payload": {
                    "bodies": [{
                        "type": BODY_TYPES[rng.random_range(0..BODY_TYPES.len())],
                        "msg": "x".repeat(msg_len),
                    }]
                }
            })
            .to_string()
        })
        .collect()
}

/// Writes `records` split evenly over `files` data files inside `dir`.
pub fn write_data_files(dir: &Path, records: &[String], files: usize) -> Vec<InputFile> {
    let per_file = records.len().div_ceil(files);
    records
        .chunks(per_file)
        .enumerate()
        .map(|(x, chunk)| {
            let name = format!("data_{:02}.jsonl", x);
            let path = dir.join(&name);
            let contents = chunk.join("\n") + "\n";
            fs::write(&path, &contents).expect("Failed to write benchmark data");
            InputFile::new(path, name, contents.len() as u64)
        })
        .collect()
}

//! Build script to generate the embedded word bank
//!
//! Reads the tab-separated word bank and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const COLUMNS: usize = 7;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_bank(
        "data/words.tsv",
        &Path::new(&out_dir).join("words.rs"),
        "BUILTIN_ENTRIES",
        "Built-in Word Detective entries",
    );

    // Rebuild if the word bank changes
    println!("cargo:rerun-if-changed=data/words.tsv");
}

fn generate_word_bank(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let rows: Vec<Vec<&str>> = content
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(|line| line.split('\t').collect())
        .collect();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word bank").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[RawEntry] = &[").unwrap();

    for (line_no, row) in rows.iter().enumerate() {
        assert!(
            row.len() == COLUMNS,
            "{input_path}: row {} has {} columns, expected {COLUMNS}",
            line_no + 1,
            row.len()
        );

        let fun_fact = if row[5].trim().is_empty() {
            "None".to_string()
        } else {
            format!("Some({:?})", row[5].trim())
        };
        let clues: Vec<String> = row[6].split('|').map(|c| format!("{:?}", c.trim())).collect();

        writeln!(output, "    RawEntry {{").unwrap();
        writeln!(output, "        word: {:?},", row[0].trim()).unwrap();
        writeln!(output, "        category: {:?},", row[1].trim()).unwrap();
        writeln!(output, "        difficulty: {:?},", row[2].trim()).unwrap();
        writeln!(output, "        audience: {:?},", row[3].trim()).unwrap();
        writeln!(output, "        pronunciation: {:?},", row[4].trim()).unwrap();
        writeln!(output, "        fun_fact: {fun_fact},").unwrap();
        writeln!(output, "        clues: &[{}],", clues.join(", ")).unwrap();
        writeln!(output, "    }},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", rows.len()).unwrap();
}

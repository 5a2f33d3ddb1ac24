//! # LDAP Schema Validator
//!
//! A command-line utility for checking LDAP schema files: every definition
//! is parsed, validated and registered into one primed registry, so a file
//! passes only if its definitions are well formed and every reference
//! resolves.
//!
//! ## Usage
//!
//! ### Validate a Single Schema File
//!
//! ```bash
//! cargo run --bin schema-validator schema/inetorgperson.schema
//! ```
//!
//! ### Validate All Schema Files in a Directory
//!
//! Files ending in `.schema`, `.ldif` or `.txt` are loaded in path order,
//! so a file may depend on definitions from the files sorted before it.
//!
//! ```bash
//! cargo run --bin schema-validator ./schema/ --core
//! ```
//!
//! ### Options
//!
//! - `--core`: load the embedded RFC 4519 core schema before the files
//! - `--json`: print the resulting subschema as JSON
//!
//! ## Output Examples
//!
//! ```text
//! Validating schemas in directory: ./schema/
//!
//! Validating: core.schema
//!   ✓ Valid - 41 definitions
//!
//! Validating: local.schema
//!   ❌ Invalid - Definition #3 (AttributeType) failed: Validation error: Unknown SUP 'nmae'
//!
//! Validation Summary:
//!   Valid files: 1
//!   Invalid files: 1
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: All files are valid
//! - `1`: One or more files are invalid or could not be read

use ldap_schema::{LoadReport, SchemaRegistry};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

const EXTENSIONS: [&str; 3] = ["schema", "ldif", "txt"];

fn main() {
    let args: Vec<String> = env::args().collect();
    let flags: Vec<&str> = args[1..]
        .iter()
        .map(String::as_str)
        .filter(|arg| arg.starts_with("--"))
        .collect();
    let paths: Vec<&str> = args[1..]
        .iter()
        .map(String::as_str)
        .filter(|arg| !arg.starts_with("--"))
        .collect();

    if paths.len() != 1 || flags.iter().any(|flag| !matches!(*flag, "--json" | "--core")) {
        eprintln!("Usage: {} <schema-file-or-directory> [--core] [--json]", args[0]);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} schema/local.schema", args[0]);
        eprintln!("  {} ./schema/ --core --json", args[0]);
        process::exit(1);
    }

    let registry = match SchemaRegistry::new() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("❌ Failed to prime schema registry: {}", e);
            process::exit(1);
        }
    };

    if flags.contains(&"--core") {
        if let Err(e) = registry.load_str(ldap_schema::schema::embedded::core_schema()) {
            eprintln!("❌ Failed to load core schema: {}", e);
            process::exit(1);
        }
    }

    let path = Path::new(paths[0]);
    let valid = if path.is_file() {
        validate_single_file(&registry, path)
    } else if path.is_dir() {
        validate_directory(&registry, path)
    } else {
        eprintln!("Error: '{}' is not a valid file or directory", path.display());
        process::exit(1);
    };

    println!("\nRegistry Summary:");
    println!("{}", registry.counters());

    if flags.contains(&"--json") {
        match registry.export_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("❌ Failed to export schema: {}", e);
                process::exit(1);
            }
        }
    }

    if !valid {
        process::exit(1);
    }
}

fn validate_single_file(registry: &SchemaRegistry, file_path: &Path) -> bool {
    println!("Validating schema file: {}", file_path.display());

    match load_file(registry, file_path) {
        Ok(report) => {
            println!("✓ Schema is valid!");
            print_report(&report);
            true
        }
        Err(e) => {
            eprintln!("❌ Schema validation failed: {}", e);
            false
        }
    }
}

fn validate_directory(registry: &SchemaRegistry, dir_path: &Path) -> bool {
    println!("Validating schemas in directory: {}", dir_path.display());

    let files = match schema_files(dir_path) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error reading directory: {}", e);
            process::exit(1);
        }
    };

    let mut valid_count = 0;
    let mut error_count = 0;

    for path in &files {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("\nValidating: {}", name);

        match load_file(registry, path) {
            Ok(report) => {
                println!("  ✓ Valid - {} definitions", report.registered.total);
                valid_count += 1;
            }
            Err(e) => {
                eprintln!("  ❌ Invalid - {}", e);
                error_count += 1;
            }
        }
    }

    println!("\nValidation Summary:");
    println!("  Valid files: {}", valid_count);
    println!("  Invalid files: {}", error_count);

    error_count == 0
}

fn schema_files(dir_path: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir_path)? {
        let path = entry?.path();
        let matches = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
        if path.is_file() && matches {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn load_file(registry: &SchemaRegistry, file_path: &Path) -> Result<LoadReport, Box<dyn std::error::Error>> {
    let content = fs::read(file_path)?;
    Ok(registry.load_bytes(&content)?)
}

fn print_report(report: &LoadReport) {
    println!();
    println!("Loaded definitions:");
    println!("{}", report.registered);
    if report.skipped > 0 {
        println!("  Skipped matching rule uses: {}", report.skipped);
    }
}

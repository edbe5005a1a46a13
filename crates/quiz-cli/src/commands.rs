//! Subcommand implementations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use quiz_cli::json_store::JsonStore;
use quiz_core::{BulkUploader, MemoryStore, TEMPLATE_FILENAME, upload_template};
use quiz_model::{AuthorId, AuthorRef, BulkReport};

use crate::cli::{AddAuthorArgs, TemplateArgs, UploadArgs};

pub fn run_upload(args: &UploadArgs) -> Result<BulkReport> {
    let payload = fs::read_to_string(&args.csv_file)
        .with_context(|| format!("read csv file: {}", args.csv_file.display()))?;
    let author_id = AuthorId(args.author);

    let report = match &args.store_dir {
        Some(dir) => {
            let store = JsonStore::open(dir)?;
            BulkUploader::new(&store, &store).upload(&payload, author_id)
        }
        None => {
            // Dry run: seed a throwaway author so validation can proceed.
            let store = MemoryStore::with_author(AuthorRef {
                id: author_id,
                display_name: "dry-run".to_string(),
                total_questions_created: 0,
            });
            info!("no --store-dir given; validating against an in-memory store");
            BulkUploader::new(&store, &store).upload(&payload, author_id)
        }
    };
    Ok(report)
}

pub fn run_template(args: &TemplateArgs) -> Result<()> {
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| Path::new(TEMPLATE_FILENAME).to_path_buf());
    fs::write(&path, upload_template())
        .with_context(|| format!("write template: {}", path.display()))?;
    println!("Template written to {}", path.display());
    Ok(())
}

pub fn run_add_author(args: &AddAuthorArgs) -> Result<()> {
    let store = JsonStore::open(&args.store_dir)?;
    store.add_author(AuthorRef {
        id: AuthorId(args.id),
        display_name: args.name.clone(),
        total_questions_created: 0,
    })?;
    println!(
        "Author {} ({}) registered in {}",
        args.id,
        args.name,
        args.store_dir.display()
    );
    Ok(())
}

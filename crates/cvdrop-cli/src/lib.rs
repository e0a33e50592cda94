use cvdrop_core::ResumeRecord;

/// One display line per record: `{filename} · {size} KB · {status}`.
pub fn format_record(record: &ResumeRecord) -> String {
    format!(
        "{} · {} KB · {}",
        record.filename,
        record.size_kb(),
        record.status
    )
}

pub fn print_records(records: &[ResumeRecord]) {
    if records.is_empty() {
        println!("No resumes yet.");
        return;
    }
    for record in records {
        println!("{}", format_record(record));
    }
}

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

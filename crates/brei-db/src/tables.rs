use redb::TableDefinition;

/// Table for storing named blobs.
/// Key: blob name, e.g. "rezepte"
/// Value: raw bytes as written by the caller
pub const BLOBS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("blobs");

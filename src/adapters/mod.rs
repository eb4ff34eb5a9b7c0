// Adapters layer: concrete store implementations. Only the in-memory arena
// stores live here; a SQL-backed adapter would slot in alongside.

pub mod memory;

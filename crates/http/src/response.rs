//! Success envelopes shared by module handlers.

use serde::Serialize;

/// Body returned when a record was created: `{"ok": true, "id": <id>}`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Created {
    pub ok: bool,
    pub id: i64,
}

impl Created {
    pub fn new(id: i64) -> Self {
        Self { ok: true, id }
    }
}

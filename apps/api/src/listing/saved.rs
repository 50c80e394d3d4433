use crate::models::job::JobRecord;

/// Flips `saved` on the record with `id` in the full list and returns the new
/// value. Other records are untouched. `None` if no record has that id.
pub fn toggle_saved(records: &mut [JobRecord], id: &str) -> Option<bool> {
    let record = records.iter_mut().find(|r| r.id == id)?;
    record.saved = !record.saved;
    Some(record.saved)
}

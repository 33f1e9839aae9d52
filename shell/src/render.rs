use std::io::{self, Write};

use todo_core::Snapshot;

/// Write `snapshot` as a checklist, one item per line, in server order.
pub fn render(snapshot: &Snapshot, out: &mut impl Write) -> io::Result<()> {
    if snapshot.is_empty() {
        return writeln!(out, "(nothing to do)");
    }
    for todo in snapshot {
        let mark = if todo.is_done { 'x' } else { ' ' };
        writeln!(out, "[{mark}] #{} {}", todo.id, todo.name)?;
    }
    Ok(())
}

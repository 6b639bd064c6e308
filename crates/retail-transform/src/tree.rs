//! Directory tree printer used to document the repository layout
//!
//! The last entry of each directory gets `└── ` and a blank continuation, so
//! the tree closes cleanly instead of drawing `├── ` for every entry. An
//! unreadable directory is reported on its own line, indented like its
//! children would have been.

use std::io::Write;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Hidden entries are skipped, except `.gitignore`.
fn is_visible(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    !name.starts_with('.') || name == ".gitignore"
}

/// Write `root` followed by its contents, one entry per line.
///
/// Unreadable directories produce an inline message instead of an error so the
/// rest of the tree still prints. Symlinks are listed but not followed.
pub fn write_tree<W: Write>(out: &mut W, root: &Path) -> std::io::Result<()> {
    writeln!(out, "{}", root.display())?;
    write_children(out, "", root)
}

fn write_children<W: Write>(out: &mut W, prefix: &str, dir: &Path) -> std::io::Result<()> {
    let entries = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .collect::<Result<Vec<_>, _>>();

    let entries: Vec<DirEntry> = match entries {
        Ok(entries) => entries.into_iter().filter(is_visible).collect(),
        Err(err) => {
            tracing::debug!(dir = %dir.display(), error = %err, "Unreadable directory");
            writeln!(out, "{}failed to read dir {}: {}", prefix, dir.display(), err)?;
            return Ok(());
        },
    };

    let count = entries.len();
    for (index, entry) in entries.iter().enumerate() {
        let last = index + 1 == count;
        let connector = if last { LAST_BRANCH } else { BRANCH };
        writeln!(out, "{}{}{}", prefix, connector, entry.file_name().to_string_lossy())?;

        if entry.file_type().is_dir() {
            let child_prefix = format!("{}{}", prefix, if last { SPACE } else { PIPE });
            write_children(out, &child_prefix, entry.path())?;
        }
    }

    Ok(())
}

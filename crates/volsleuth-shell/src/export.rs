/// CSV export of the current listing.
use crate::state::Listing;
use serde::Serialize;
use std::io::Write;
use volsleuth_core::model::size::format_size;

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    name: &'a str,
    kind: &'a str,
    size_bytes: u64,
    size: String,
}

/// Write `listing` as CSV with a header row. An empty listing writes only
/// the header.
pub fn write_csv<W: Write>(listing: &Listing, writer: W) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    // Serialising structs writes the header lazily; an empty listing needs
    // it spelled out.
    if listing.is_empty() {
        csv_writer.write_record(["name", "kind", "size_bytes", "size"])?;
    }

    match listing {
        Listing::Empty => {}
        Listing::Entries(entries) => {
            for entry in entries {
                csv_writer.serialize(ExportRow {
                    name: &entry.name,
                    kind: if entry.is_dir() { "directory" } else { "file" },
                    size_bytes: entry.size,
                    size: format_size(entry.size),
                })?;
            }
        }
        Listing::Summary {
            category,
            total_bytes,
        } => {
            csv_writer.serialize(ExportRow {
                name: &category.total_label(),
                kind: "summary",
                size_bytes: *total_bytes,
                size: format_size(*total_bytes),
            })?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

// Human-readable dumps of a decoded DEO file.
//
// Text layout follows the long-standing inspector output: one padded
// `name value` line per header field, and a fixed-width table for the
// directory. All writers take any `io::Write` so output can be captured.

use std::io::{self, Write};

use crate::deo::{Directory, Header, ObjectEntry};

/// Render bytes as an escaped byte-string literal, e.g. `b"ab\x00"`.
pub fn escape_bytes(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() + 3);
    out.push_str("b\"");
    for &b in data {
        out.extend(std::ascii::escape_default(b).map(char::from));
    }
    out.push('"');
    out
}

fn field<W: Write>(w: &mut W, name: &str, value: impl std::fmt::Display) -> io::Result<()> {
    writeln!(w, "    {name:<20}{value}")
}

/// Write the header block.
pub fn write_header<W: Write>(w: &mut W, hdr: &Header) -> io::Result<()> {
    writeln!(w, "Header:")?;
    field(w, "header_str", &hdr.header_str)?;
    field(w, "unknown_a", hdr.unknown_a)?;
    field(w, "object_dir_len", hdr.object_dir_len)?;
    field(w, "unknown_len", hdr.unknown_len)?;
    field(w, "unknown_f", hdr.unknown_f)?;
    field(w, "file_name", &hdr.file_name)?;
    field(w, "transfer_agent", &hdr.transfer_agent)?;
    field(w, "some_guid", hdr.some_guid.hyphenated())?;
    field(w, "unknown_g", escape_bytes(&hdr.unknown_g))?;
    field(w, "unknown_i", hdr.unknown_i)?;
    field(w, "unknown_blob", escape_bytes(&hdr.unknown_blob.data))?;
    field(w, "unknown_k", hdr.unknown_k)
}

fn row<W: Write>(
    w: &mut W,
    len: &str,
    unk: &str,
    off: &str,
    guid: &str,
    name: &str,
    ty: &str,
) -> io::Result<()> {
    writeln!(w, "    {len:<4}{unk:<4}{off:<9}{guid:<38}{name:<24}{ty:<32}")
}

fn write_entry<W: Write>(w: &mut W, e: &ObjectEntry) -> io::Result<()> {
    row(
        w,
        &e.entry_len.to_string(),
        &e.unknown_a.to_string(),
        &e.data_position.to_string(),
        &e.guid.hyphenated().to_string(),
        &e.name.to_str_lossy(),
        &e.type_name.to_str_lossy(),
    )
}

/// Write the directory table.
pub fn write_directory<W: Write>(w: &mut W, dir: &Directory) -> io::Result<()> {
    writeln!(w, "Directory:")?;
    row(w, "Len", "Unk", "Off", "GUID", "Name", "Type")?;
    for e in dir {
        write_entry(w, e)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

#[cfg(feature = "cli")]
pub fn header_json(hdr: &Header) -> serde_json::Value {
    serde_json::json!({
        "header_str": hdr.header_str.to_str_lossy(),
        "header_version": hdr.header_str.version,
        "unknown_a": hdr.unknown_a,
        "object_dir_len": hdr.object_dir_len,
        "unknown_len": hdr.unknown_len,
        "unknown_f": hdr.unknown_f,
        "file_name": hdr.file_name.to_str_lossy(),
        "transfer_agent": hdr.transfer_agent.to_str_lossy(),
        "some_guid": hdr.some_guid.hyphenated().to_string(),
        "unknown_g": hdr.unknown_g.to_vec(),
        "unknown_i": hdr.unknown_i,
        "unknown_blob": hdr.unknown_blob.data,
        "unknown_k": hdr.unknown_k,
    })
}

#[cfg(feature = "cli")]
pub fn directory_json(dir: &Directory) -> serde_json::Value {
    dir.iter()
        .map(|e| {
            serde_json::json!({
                "offset": e.offset,
                "entry_len": e.entry_len,
                "name": e.name.to_str_lossy(),
                "type": e.type_name.to_str_lossy(),
                "guid": e.guid.hyphenated().to_string(),
                "unknown_a": e.unknown_a,
                "data_position": e.data_position,
            })
        })
        .collect()
}

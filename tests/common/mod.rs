// Synthetic DEO file builder shared by the integration tests.
#![allow(dead_code)]

use deoparse::deo::varint::{write_var_len, write_var_str};

#[derive(Debug, Clone)]
pub struct HeaderSpec {
    pub header_str: Vec<u8>,
    pub version: u8,
    pub unknown_a: u32,
    pub unknown_len: u32,
    pub unknown_f: u8,
    pub file_name: Vec<u8>,
    pub transfer_agent: Vec<u8>,
    pub guid: [u8; 16],
    pub unknown_g: [u8; 9],
    pub unknown_i: u32,
    pub blob: Vec<u8>,
    pub unknown_k: u32,
}

impl Default for HeaderSpec {
    /// The all-zero "OMF" v1 header.
    fn default() -> Self {
        Self {
            header_str: b"OMF".to_vec(),
            version: 1,
            unknown_a: 0,
            unknown_len: 0,
            unknown_f: 0,
            file_name: Vec::new(),
            transfer_agent: Vec::new(),
            guid: [0; 16],
            unknown_g: [0; 9],
            unknown_i: 0,
            blob: Vec::new(),
            unknown_k: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EntrySpec {
    pub entry_len: u32,
    pub name: Vec<u8>,
    pub type_name: Vec<u8>,
    pub guid: [u8; 16],
    pub unknown_a: u32,
    pub data_position: u32,
}

impl EntrySpec {
    pub fn named(name: &str, type_name: &str, data_position: u32) -> Self {
        Self {
            entry_len: 0,
            name: name.as_bytes().to_vec(),
            type_name: type_name.as_bytes().to_vec(),
            guid: [0x5A; 16],
            unknown_a: 0,
            data_position,
        }
    }
}

/// Offsets of the four header tags (9, 4, 4, 1) within `header_bytes(h, _)`.
pub fn header_tag_offsets(h: &HeaderSpec) -> [usize; 4] {
    let dir_len_tag = 4 + h.header_str.len() + 1 + 4 + 4;
    let var_len = if h.unknown_len >= 0xFF { 5 } else { 1 };
    let unknown_len_tag = dir_len_tag + 1 + var_len;
    let guid_tag = unknown_len_tag
        + 1
        + 1
        + (4 + h.file_name.len())
        + (4 + h.transfer_agent.len())
        + 16
        + 9;
    let blob_tag = guid_tag + 1 + 4;
    [dir_len_tag, unknown_len_tag, guid_tag, blob_tag]
}

pub fn header_bytes(h: &HeaderSpec, object_dir_len: u32) -> Vec<u8> {
    let mut b = Vec::new();
    write_var_str(&mut b, &h.header_str).unwrap();
    b.push(h.version);
    b.extend_from_slice(&h.unknown_a.to_le_bytes());
    b.extend_from_slice(&object_dir_len.to_le_bytes());
    b.push(9);
    write_var_len(&mut b, h.unknown_len).unwrap();
    b.push(4);
    b.push(h.unknown_f);
    write_var_str(&mut b, &h.file_name).unwrap();
    write_var_str(&mut b, &h.transfer_agent).unwrap();
    b.extend_from_slice(&h.guid);
    b.extend_from_slice(&h.unknown_g);
    b.push(4);
    b.extend_from_slice(&h.unknown_i.to_le_bytes());
    b.push(1);
    write_var_len(&mut b, h.blob.len() as u32).unwrap();
    b.extend_from_slice(&h.blob);
    b.extend_from_slice(&h.unknown_k.to_le_bytes());
    b
}

pub fn entry_bytes(e: &EntrySpec) -> Vec<u8> {
    let mut b = vec![4];
    write_var_len(&mut b, e.entry_len).unwrap();
    write_var_str(&mut b, &e.name).unwrap();
    write_var_str(&mut b, &e.type_name).unwrap();
    b.extend_from_slice(&e.guid);
    b.push(0);
    b.extend_from_slice(&e.unknown_a.to_le_bytes());
    b.extend_from_slice(&0u32.to_le_bytes());
    b.push(4);
    b.extend_from_slice(&e.data_position.to_le_bytes());
    b
}

/// Header + entries, with `object_dir_len` set to the end of the last entry.
pub fn build_file(h: &HeaderSpec, entries: &[EntrySpec]) -> Vec<u8> {
    let mut dir = Vec::new();
    for e in entries {
        dir.extend(entry_bytes(e));
    }
    let header_len = header_bytes(h, 0).len();
    let mut out = header_bytes(h, (header_len + dir.len()) as u32);
    out.extend(dir);
    out
}

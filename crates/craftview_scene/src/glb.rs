//! Reader for the chunked GLB binary container
//!
//! A GLB file is a fixed 12-byte header (magic, version, total length, all
//! little-endian u32) followed by length-prefixed chunks, each tagged with a
//! 4-byte type code. Chunk parsing is bounded by the header's total length;
//! anything after it is ignored. This module parses the framing only; the
//! JSON payload is re-indented for display without being parsed.

use std::fmt::Write as _;
use std::io;
use std::path::Path;

use nom::bytes::complete::take;
use nom::multi::many0;
use nom::number::complete::le_u32;
use nom::sequence::tuple;
use nom::IResult;

/// "glTF" in little-endian ASCII
pub const GLB_MAGIC: u32 = 0x4654_6C67;

const JSON_TAG: u32 = 0x4E4F_534A;
const BIN_TAG: u32 = 0x004E_4942;

/// Chunk type code
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChunkKind {
    Json,
    Bin,
    Unknown(u32),
}

impl ChunkKind {
    fn from_tag(tag: u32) -> Self {
        match tag {
            JSON_TAG => ChunkKind::Json,
            BIN_TAG => ChunkKind::Bin,
            other => ChunkKind::Unknown(other),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChunkKind::Json => "JSON",
            ChunkKind::Bin => "BIN",
            ChunkKind::Unknown(_) => "UNKNOWN",
        }
    }
}

/// One length-prefixed chunk
#[derive(Clone, Debug, PartialEq)]
pub struct Chunk {
    pub kind: ChunkKind,
    pub data: Vec<u8>,
}

/// A parsed GLB container: header fields plus all chunks in file order
#[derive(Clone, Debug, PartialEq)]
pub struct GlbModel {
    pub version: u32,
    pub length: u32,
    pub chunks: Vec<Chunk>,
}

/// Error reading or parsing a GLB container
#[derive(Debug)]
pub enum GlbError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// The magic field does not match [`GLB_MAGIC`]
    BadMagic { found: u32 },
    /// The file ends inside the header or inside a chunk
    Truncated,
}

impl From<io::Error> for GlbError {
    fn from(e: io::Error) -> Self {
        GlbError::Io(e)
    }
}

impl std::fmt::Display for GlbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GlbError::Io(e) => write!(f, "IO error: {}", e),
            GlbError::BadMagic { found } => write!(
                f,
                "not a GLB file (magic 0x{:08X}, expected 0x{:08X})",
                found, GLB_MAGIC
            ),
            GlbError::Truncated => write!(f, "file truncated mid-header or mid-chunk"),
        }
    }
}

impl std::error::Error for GlbError {}

impl GlbModel {
    /// Load and parse a GLB file from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GlbError> {
        let bytes = std::fs::read(path)?;
        Self::parse(&bytes)
    }

    /// Parse a GLB container from raw bytes.
    ///
    /// Chunks are read from the region the header's `length` field declares;
    /// bytes past it are ignored. A buffer shorter than `length` is
    /// [`GlbError::Truncated`].
    pub fn parse(data: &[u8]) -> Result<Self, GlbError> {
        let (rest, (magic, version, length)) =
            parse_header(data).map_err(|_: nom::Err<nom::error::Error<&[u8]>>| GlbError::Truncated)?;

        if magic != GLB_MAGIC {
            return Err(GlbError::BadMagic { found: magic });
        }

        let body_len = (length as usize).checked_sub(12).ok_or(GlbError::Truncated)?;
        let body = rest.get(..body_len).ok_or(GlbError::Truncated)?;

        // many0 stops at the first chunk it cannot finish; leftover bytes
        // inside the declared length mean a truncated trailing chunk.
        let (leftover, chunks) =
            many0(parse_chunk)(body).map_err(|_: nom::Err<nom::error::Error<&[u8]>>| GlbError::Truncated)?;
        if !leftover.is_empty() {
            return Err(GlbError::Truncated);
        }

        log::debug!("parsed GLB v{} with {} chunks", version, chunks.len());

        Ok(Self {
            version,
            length,
            chunks,
        })
    }

    /// Human-readable report: header fields plus a section per chunk, with
    /// JSON chunks re-indented
    pub fn report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "====model====");
        let _ = writeln!(out, "magic: 0x{:08X}", GLB_MAGIC);
        let _ = writeln!(out, "version: {}", self.version);
        let _ = writeln!(out, "length: {}", self.length);

        for (i, chunk) in self.chunks.iter().enumerate() {
            let _ = writeln!(out, "----chunk {}----", i);
            let _ = writeln!(out, "\ttype: {}", chunk.kind.label());
            let _ = writeln!(out, "\tsize: {}", chunk.data.len());
            if chunk.kind == ChunkKind::Json {
                let _ = writeln!(out, "{}", format_json(&chunk.data));
            }
        }

        out
    }
}

fn parse_header(input: &[u8]) -> IResult<&[u8], (u32, u32, u32)> {
    tuple((le_u32, le_u32, le_u32))(input)
}

fn parse_chunk(input: &[u8]) -> IResult<&[u8], Chunk> {
    let (input, length) = le_u32(input)?;
    let (input, tag) = le_u32(input)?;
    let (input, data) = take(length as usize)(input)?;

    Ok((
        input,
        Chunk {
            kind: ChunkKind::from_tag(tag),
            data: data.to_vec(),
        },
    ))
}

/// Re-indent a JSON byte stream structurally, without parsing it.
///
/// Breaks lines on braces, brackets, and commas with four-space indentation.
/// Good enough for eyeballing a GLB's JSON chunk; not a JSON formatter.
pub fn format_json(bytes: &[u8]) -> String {
    let mut result = String::with_capacity(bytes.len() * 4);
    let mut indentation: usize = 0;

    for &byte in bytes {
        match byte {
            b'{' => {
                indentation += 1;
                result.push_str("{\n");
                result.push_str(&" ".repeat(indentation * 4));
            }
            b'}' => {
                indentation = indentation.saturating_sub(1);
                result.push('\n');
                result.push_str(&" ".repeat(indentation * 4));
                result.push_str("}\n");
                result.push_str(&" ".repeat(indentation * 4));
            }
            b'[' => {
                indentation += 1;
                result.push_str("[\n");
                result.push_str(&" ".repeat(indentation * 4));
            }
            b']' => {
                indentation = indentation.saturating_sub(1);
                result.push('\n');
                result.push_str(&" ".repeat(indentation * 4));
                result.push_str("]\n");
                result.push_str(&" ".repeat(indentation * 4));
            }
            b',' => {
                result.push_str(",\n");
                result.push_str(&" ".repeat(indentation * 4));
            }
            other => result.push(other as char),
        }
    }

    result
}

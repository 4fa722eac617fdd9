#![forbid(unsafe_code)]

//! Parsing and applying clang-format replacement reports
//!
//! `clang-format -output-replacements-xml` prints one `<replacement>`
//! element per suggested edit:
//!
//! ```xml
//! <?xml version='1.0'?>
//! <replacements xml:space='preserve' incomplete_format='false'>
//! <replacement offset='12' length='3'>&#10;    </replacement>
//! </replacements>
//! ```
//!
//! Offsets and lengths are byte positions into the unformatted file.
//! Replacement text is XML-escaped; a self-closing element is a deletion.

use crate::error::{Error, Result};
use quick_xml::events::attributes::Attribute;
use quick_xml::events::BytesStart;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::path::Path;

/// One suggested edit: replace `length` bytes at `offset` with `text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub offset: usize,
    pub length: usize,
    pub text: String,
}

/// All edits clang-format suggested for one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementSet {
    /// Edits in ascending offset order
    pub replacements: Vec<Replacement>,
    /// Set when clang-format could not fully format the file
    pub incomplete_format: bool,
}

impl ReplacementSet {
    /// Parse a replacements report produced for `path`
    pub fn parse(path: &Path, xml: &str) -> Result<ReplacementSet> {
        let mut reader = Reader::from_str(xml);
        let mut set = ReplacementSet::default();
        let mut pending: Option<(usize, usize)> = None;
        let mut text = String::new();

        loop {
            match reader.read_event().map_err(|e| xml_error(path, &e))? {
                Event::Eof => break,
                Event::Start(start) => match start.name().as_ref() {
                    b"replacements" => {
                        set.incomplete_format = read_incomplete_format(path, &start)?;
                    }
                    b"replacement" => {
                        pending = Some(read_span(path, &start)?);
                        text.clear();
                    }
                    other => {
                        return Err(Error::Xml {
                            path: path.to_path_buf(),
                            message: format!(
                                "unexpected element <{}>",
                                String::from_utf8_lossy(other)
                            ),
                        });
                    }
                },
                Event::Empty(start) => match start.name().as_ref() {
                    // A self-closing replacement deletes bytes without inserting any
                    b"replacement" => {
                        let (offset, length) = read_span(path, &start)?;
                        set.replacements.push(Replacement {
                            offset,
                            length,
                            text: String::new(),
                        });
                    }
                    b"replacements" => {
                        set.incomplete_format = read_incomplete_format(path, &start)?;
                    }
                    _ => {}
                },
                Event::Text(t) if pending.is_some() => {
                    text.push_str(&t.unescape().map_err(|e| xml_error(path, &e))?);
                }
                Event::End(end) if end.name().as_ref() == b"replacement" => {
                    if let Some((offset, length)) = pending.take() {
                        set.replacements.push(Replacement {
                            offset,
                            length,
                            text: std::mem::take(&mut text),
                        });
                    }
                }
                _ => {}
            }
        }

        if pending.is_some() {
            return Err(Error::Xml {
                path: path.to_path_buf(),
                message: "unterminated replacement element".to_string(),
            });
        }

        set.replacements.sort_by_key(|r| (r.offset, r.length));
        Ok(set)
    }

    /// True when the file needs no edits
    pub fn is_clean(&self) -> bool {
        self.replacements.is_empty()
    }

    /// Splice the replacements into `source`, yielding the formatted bytes
    ///
    /// Validates bounds and overlaps before touching the buffer, so a
    /// malformed report can never panic or corrupt the output.
    pub fn apply(&self, path: &Path, source: &[u8]) -> Result<Vec<u8>> {
        let mut prev_end = 0usize;
        for r in &self.replacements {
            let end = r.offset.checked_add(r.length).ok_or_else(|| Error::Replacement {
                path: path.to_path_buf(),
                message: format!("offset {} + length {} overflows", r.offset, r.length),
            })?;
            if r.offset < prev_end {
                return Err(Error::Replacement {
                    path: path.to_path_buf(),
                    message: format!("overlapping replacement at offset {}", r.offset),
                });
            }
            if end > source.len() {
                return Err(Error::Replacement {
                    path: path.to_path_buf(),
                    message: format!(
                        "replacement {}..{} out of bounds for {} bytes",
                        r.offset,
                        end,
                        source.len()
                    ),
                });
            }
            prev_end = end;
        }

        // Descending order keeps earlier offsets stable while splicing
        let mut out = source.to_vec();
        for r in self.replacements.iter().rev() {
            out.splice(r.offset..r.offset + r.length, r.text.bytes());
        }
        Ok(out)
    }
}

fn read_span(path: &Path, start: &BytesStart<'_>) -> Result<(usize, usize)> {
    let mut offset = None;
    let mut length = None;
    for attr in start.attributes() {
        let attr = attr.map_err(|e| xml_error(path, &e))?;
        match attr.key.as_ref() {
            b"offset" => offset = Some(parse_attr_usize(path, &attr)?),
            b"length" => length = Some(parse_attr_usize(path, &attr)?),
            _ => {}
        }
    }
    match (offset, length) {
        (Some(offset), Some(length)) => Ok((offset, length)),
        _ => Err(Error::Xml {
            path: path.to_path_buf(),
            message: "replacement element missing offset or length attribute".to_string(),
        }),
    }
}

fn read_incomplete_format(path: &Path, start: &BytesStart<'_>) -> Result<bool> {
    for attr in start.attributes() {
        let attr = attr.map_err(|e| xml_error(path, &e))?;
        if attr.key.as_ref() == b"incomplete_format" {
            let value = attr.unescape_value().map_err(|e| xml_error(path, &e))?;
            return Ok(value == "true");
        }
    }
    Ok(false)
}

fn parse_attr_usize(path: &Path, attr: &Attribute<'_>) -> Result<usize> {
    let value = attr.unescape_value().map_err(|e| xml_error(path, &e))?;
    value.parse::<usize>().map_err(|_| Error::Xml {
        path: path.to_path_buf(),
        message: format!(
            "attribute {} is not a valid byte count: {value:?}",
            String::from_utf8_lossy(attr.key.as_ref())
        ),
    })
}

fn xml_error(path: &Path, err: &dyn std::fmt::Display) -> Error {
    Error::Xml {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

// Copyright (c) 2025 The griddle developers.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

/// How values from several PDBs over the same goal are combined.
///
/// The mode is part of a PDB's identity: it is stored in the file header and
/// PDBs of different modes cannot be queried together. `Add` is reserved
/// vocabulary for disjoint pattern databases; its combination semantics are
/// not implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PdbMode {
    /// Take the maximum of the values.
    Max,
    /// Sum the values (reserved, not implemented).
    Add,
}

impl PdbMode {
    /// The length in bytes of the mode tag in the file header.
    pub const TAG_LEN: usize = 3;

    /// Returns the 3-byte tag written at the start of a PDB file.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use griddle_model::mode::PdbMode;
    ///
    /// assert_eq!(PdbMode::Max.tag(), b"MAX");
    /// assert_eq!(PdbMode::Add.tag(), b"ADD");
    /// ```
    #[inline]
    pub const fn tag(&self) -> &'static [u8; Self::TAG_LEN] {
        match self {
            PdbMode::Max => b"MAX",
            PdbMode::Add => b"ADD",
        }
    }

    /// Parses a mode from a file header tag, if it is one of the known tags.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use griddle_model::mode::PdbMode;
    ///
    /// assert_eq!(PdbMode::from_tag(b"MAX"), Some(PdbMode::Max));
    /// assert_eq!(PdbMode::from_tag(b"XYZ"), None);
    /// ```
    #[inline]
    pub fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"MAX" => Some(PdbMode::Max),
            b"ADD" => Some(PdbMode::Add),
            _ => None,
        }
    }
}

impl std::fmt::Display for PdbMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PdbMode::Max => write!(f, "MAX"),
            PdbMode::Add => write!(f, "ADD"),
        }
    }
}

/// The error returned when parsing a mode from text fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError {
    text: String,
}

impl std::fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown PDB mode '{}'", self.text)
    }
}

impl std::error::Error for ParseModeError {}

impl std::str::FromStr for PdbMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            Ok(PdbMode::Max)
        } else if s.eq_ignore_ascii_case("add") {
            Ok(PdbMode::Add)
        } else {
            Err(ParseModeError { text: s.to_owned() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        assert_eq!(PdbMode::from_tag(PdbMode::Max.tag()), Some(PdbMode::Max));
        assert_eq!(PdbMode::from_tag(PdbMode::Add.tag()), Some(PdbMode::Add));
        assert_eq!(PdbMode::from_tag(b"max"), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("max".parse::<PdbMode>(), Ok(PdbMode::Max));
        assert_eq!("ADD".parse::<PdbMode>(), Ok(PdbMode::Add));
        assert!("sum".parse::<PdbMode>().is_err());
    }
}

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

/// The cost model of the N-Pancake domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PancakeVariant {
    /// Every flip costs one.
    #[default]
    Unit,
    /// A flip costs the radius of the pancake below the spatula. Both
    /// directions of a flip then cost the same, which keeps backward
    /// search costs equal to true inverse path costs and the resulting
    /// heuristic consistent.
    HeavyCost,
}

/// The error returned when parsing a variant name fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVariantError {
    text: String,
}

impl std::fmt::Display for ParseVariantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown pancake variant '{}', choices are {{unit, heavy-cost}}",
            self.text
        )
    }
}

impl std::error::Error for ParseVariantError {}

impl std::str::FromStr for PancakeVariant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("unit") {
            Ok(PancakeVariant::Unit)
        } else if s.eq_ignore_ascii_case("heavy-cost") {
            Ok(PancakeVariant::HeavyCost)
        } else {
            Err(ParseVariantError { text: s.to_owned() })
        }
    }
}

impl std::fmt::Display for PancakeVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PancakeVariant::Unit => write!(f, "unit"),
            PancakeVariant::HeavyCost => write!(f, "heavy-cost"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("unit".parse::<PancakeVariant>(), Ok(PancakeVariant::Unit));
        assert_eq!("UNIT".parse::<PancakeVariant>(), Ok(PancakeVariant::Unit));
        assert_eq!(
            "Heavy-Cost".parse::<PancakeVariant>(),
            Ok(PancakeVariant::HeavyCost)
        );
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert!("heavy".parse::<PancakeVariant>().is_err());
        assert!("".parse::<PancakeVariant>().is_err());
    }
}

//! Indentation configuration for generated text.

/// Column width a tab character is assumed to occupy when estimating
/// line lengths.
pub const TAB_WIDTH: usize = 8;

const SPACES: &str = "                ";

/// Indentation style for generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (clamped to 16).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// Tab indentation, the default for generated Java sources.
    pub const JAVA: Self = Self::Tab;

    /// 2-space indentation, the default for XML documents.
    pub const XML: Self = Self::Spaces(2);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(n) => &SPACES[..(*n as usize).min(SPACES.len())],
            Self::Tab => "\t",
        }
    }

    /// Estimated display width of one indent level.
    pub fn width(&self) -> usize {
        display_width(self.as_str())
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}

/// Estimated display width of an arbitrary indent string.
///
/// Tabs advance to the next multiple of [`TAB_WIDTH`]; every other
/// character counts as one column.
pub fn display_width(indent: &str) -> usize {
    indent.chars().fold(0, |col, c| {
        if c == '\t' {
            (col / TAB_WIDTH + 1) * TAB_WIDTH
        } else {
            col + 1
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Tab.as_str(), "\t");
        assert_eq!(Indent::Spaces(40).as_str().len(), 16);
    }

    #[test]
    fn test_indent_constants() {
        assert_eq!(Indent::JAVA, Indent::Tab);
        assert_eq!(Indent::XML, Indent::Spaces(2));
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::JAVA);
    }

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("\t"), 8);
        assert_eq!(display_width("    "), 4);
        assert_eq!(display_width("  \t"), 8);
        assert_eq!(display_width("\t  "), 10);
        assert_eq!(Indent::Spaces(3).width(), 3);
    }
}

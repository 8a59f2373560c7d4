//! Rule - horizontal line with an optional centered title.
//!
//! Used for the `" Row N "` banners of the ROW layout.

use crate::cells;

/// A horizontal rule with optional title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    title: Option<String>,
    character: char,
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            title: None,
            character: '-',
        }
    }
}

impl Rule {
    /// Create a new rule without a title.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a rule with a title; the title is surrounded by one space on each side.
    #[must_use]
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Set the fill character.
    #[must_use]
    pub fn character(mut self, ch: char) -> Self {
        self.character = ch;
        self
    }

    /// Render the rule as a single line (without line terminator).
    ///
    /// Fill is split evenly around the title, the extra cell going right.
    /// When fewer than two fill cells remain, only the title is emitted.
    #[must_use]
    pub fn render_plain(&self, width: usize) -> String {
        let char_width = cells::get_character_cell_size(self.character);
        if char_width == 0 {
            return self
                .title
                .as_ref()
                .map(|t| format!(" {t} "))
                .unwrap_or_default();
        }

        let fill = |count: usize| self.character.to_string().repeat(count);

        match &self.title {
            Some(title) => {
                let title_text = format!(" {title} ");
                let available = width.saturating_sub(cells::cell_len(&title_text));
                let rule_chars = available / char_width;

                if rule_chars < 2 {
                    return title_text;
                }
                let left = rule_chars / 2;
                let right = rule_chars - left;
                format!("{}{title_text}{}", fill(left), fill(right))
            }
            None => fill(width / char_width),
        }
    }
}

//! Typed-text reveal for the hero title.

pub const DEFAULT_HERO_TEXT: &str = "Hai Ovi 🩷";
pub const DEFAULT_TYPING_STEP_MS: u32 = 90;

/// Yields every prefix of the text, from empty to complete, cutting only at
/// `char` boundaries.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    // Byte offsets of every prefix end, including 0 and text.len().
    boundaries: Vec<usize>,
    next: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let boundaries = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        Self {
            text,
            boundaries,
            next: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.boundaries.len()
    }
}

impl Iterator for Typewriter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let end = *self.boundaries.get(self.next)?;
        self.next += 1;
        Some(self.text[..end].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_every_prefix_including_empty() {
        let frames: Vec<String> = Typewriter::new("Hai").collect();
        assert_eq!(frames, vec!["", "H", "Ha", "Hai"]);
    }

    #[test]
    fn never_splits_a_multibyte_char() {
        let frames: Vec<String> = Typewriter::new(DEFAULT_HERO_TEXT).collect();
        assert_eq!(frames.len(), DEFAULT_HERO_TEXT.chars().count() + 1);
        assert_eq!(frames.last().map(String::as_str), Some(DEFAULT_HERO_TEXT));
        assert!(frames.iter().all(|f| DEFAULT_HERO_TEXT.starts_with(f.as_str())));
    }

    #[test]
    fn empty_text_yields_single_frame() {
        let mut writer = Typewriter::new("");
        assert_eq!(writer.next().as_deref(), Some(""));
        assert!(writer.is_finished());
        assert_eq!(writer.next(), None);
    }
}

//! Thumbnail selection kept in sync with the popup main image and the hero
//! profile image.

use serde::{Deserialize, Serialize};

/// Time the main image stays transparent before its source is swapped.
pub const DEFAULT_FADE_DELAY_MS: u32 = 180;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub source: String,
    pub active: bool,
}

/// The popup's main image as currently displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageDisplay {
    pub source: String,
    pub opacity: f64,
}

/// A pending source swap, to be completed with [`Gallery::complete_swap`]
/// once `delay_ms` has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FadeSwap {
    pub source: String,
    pub delay_ms: u32,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    thumbnails: Vec<Thumbnail>,
    main: ImageDisplay,
    hero_source: String,
    fade_delay_ms: u32,
    generation: u64,
}

impl Gallery {
    /// Build a gallery from thumbnail sources. The thumbnail whose source
    /// matches `initial` starts active, and both displays start on `initial`.
    pub fn new<I, S>(sources: I, initial: &str, fade_delay_ms: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen_active = false;
        let thumbnails = sources
            .into_iter()
            .map(|source| {
                let source = source.into();
                let active = !seen_active && !source.is_empty() && source == initial;
                seen_active |= active;
                Thumbnail { source, active }
            })
            .collect();

        Self {
            thumbnails,
            main: ImageDisplay {
                source: initial.to_string(),
                opacity: 1.0,
            },
            hero_source: initial.to_string(),
            fade_delay_ms,
            generation: 0,
        }
    }

    pub fn thumbnails(&self) -> &[Thumbnail] {
        &self.thumbnails
    }

    pub fn main(&self) -> &ImageDisplay {
        &self.main
    }

    pub fn hero_source(&self) -> &str {
        &self.hero_source
    }

    pub fn active_index(&self) -> Option<usize> {
        self.thumbnails.iter().position(|t| t.active)
    }

    /// Select the thumbnail at `index`.
    ///
    /// Out-of-range indices and thumbnails without a source are ignored.
    /// Otherwise the main image fades out, the hero image switches right away,
    /// and the returned swap must be completed after its delay.
    pub fn select(&mut self, index: usize) -> Option<FadeSwap> {
        let source = self
            .thumbnails
            .get(index)
            .map(|t| t.source.clone())
            .filter(|s| !s.is_empty())?;

        for (i, thumb) in self.thumbnails.iter_mut().enumerate() {
            thumb.active = i == index;
        }
        self.main.opacity = 0.0;
        self.hero_source = source.clone();
        self.generation += 1;

        Some(FadeSwap {
            source,
            delay_ms: self.fade_delay_ms,
            generation: self.generation,
        })
    }

    /// Finish a fade. Swaps superseded by a later selection are dropped so
    /// the main image always lands on the last selected source.
    pub fn complete_swap(&mut self, swap: &FadeSwap) -> bool {
        if swap.generation != self.generation {
            return false;
        }
        self.main.source = swap.source.clone();
        self.main.opacity = 1.0;
        true
    }
}

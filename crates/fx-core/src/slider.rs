//! Slide rotation state for the image/testimonial slider.

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Slide {
    pub url: String,
    pub title: String,
    pub body: String,
}

impl Slide {
    /// CSS `background-image` value for this slide.
    pub fn background_image(&self) -> String {
        format!("url({})", self.url)
    }
}

/// Outcome of a manual jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jump {
    /// Index out of range; nothing changed.
    Ignored,
    /// The deck moved. `rearm` is false once rotation has been stopped.
    Moved { rearm: bool },
}

#[derive(Clone, Debug)]
pub struct SlideDeck {
    slides: Vec<Slide>,
    current: usize,
    rotating: bool,
}

impl SlideDeck {
    /// `None` for an empty list: a slider without slides has nothing to show.
    pub fn new(slides: Vec<Slide>) -> Option<Self> {
        if slides.is_empty() {
            return None;
        }
        Some(Self {
            slides,
            current: 0,
            rotating: true,
        })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Slide {
        &self.slides[self.current]
    }

    /// Automatic rotation step; wraps to the first slide.
    pub fn advance(&mut self) -> usize {
        self.current = (self.current + 1) % self.slides.len();
        self.current
    }

    /// Manual jump. Out-of-range indices leave the deck unchanged.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.slides.len() {
            self.current = index;
            true
        } else {
            false
        }
    }

    /// Bullet click or `goTo`. A stopped deck still moves but never asks for
    /// the rotation timer back.
    pub fn jump(&mut self, index: usize) -> Jump {
        if self.go_to(index) {
            Jump::Moved {
                rearm: self.rotating,
            }
        } else {
            Jump::Ignored
        }
    }

    pub fn stop_rotation(&mut self) {
        self.rotating = false;
    }

    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    /// Whether bullet `i` should carry the `active` class.
    pub fn is_active(&self, i: usize) -> bool {
        i == self.current
    }
}

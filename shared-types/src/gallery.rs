use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Which image, if any, the lightbox is showing. Navigation wraps around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    current: Option<usize>,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Lightbox { len, current: None }
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn open(&mut self, index: usize) {
        if index < self.len {
            self.current = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn next(&mut self) {
        if let Some(i) = self.current {
            self.current = Some((i + 1) % self.len);
        }
    }

    pub fn previous(&mut self) {
        if let Some(i) = self.current {
            self.current = Some((i + self.len - 1) % self.len);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn navigation_wraps_both_ways() {
        let mut lightbox = Lightbox::new(3);
        lightbox.open(2);
        lightbox.next();
        assert_eq!(lightbox.current(), Some(0));
        lightbox.previous();
        assert_eq!(lightbox.current(), Some(2));
        lightbox.previous();
        assert_eq!(lightbox.current(), Some(1));
    }

    #[test]
    fn closed_lightbox_ignores_navigation() {
        let mut lightbox = Lightbox::new(3);
        lightbox.next();
        assert_eq!(lightbox.current(), None);

        lightbox.open(1);
        lightbox.close();
        lightbox.previous();
        assert_eq!(lightbox.current(), None);
    }

    #[test]
    fn out_of_range_open_is_ignored() {
        let mut lightbox = Lightbox::new(0);
        lightbox.open(0);
        assert_eq!(lightbox.current(), None);
    }
}

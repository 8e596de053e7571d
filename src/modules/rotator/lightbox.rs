/// Modal image viewer over an ordered gallery. Navigation is circular in
/// both directions; the viewer refuses to open over an empty gallery.
#[derive(Debug, Clone)]
pub struct Lightbox {
    images: Vec<String>,
    current: usize,
    open: bool,
    reset_on_open: bool,
}

impl Lightbox {
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            current: 0,
            open: false,
            reset_on_open: false,
        }
    }

    /// Restart from the first image on every `open` instead of resuming
    /// where the viewer was last closed.
    pub fn with_reset_on_open(mut self) -> Self {
        self.reset_on_open = true;
        self
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current).map(String::as_str)
    }

    /// Prev/next arrows and the counter only make sense with something to
    /// cycle through.
    pub fn has_controls(&self) -> bool {
        self.images.len() > 1
    }

    /// Replace the gallery, keeping the cursor in bounds for the new set.
    pub fn set_images(&mut self, images: Vec<String>) {
        self.images = images;
        if self.images.is_empty() {
            self.current = 0;
            self.open = false;
        } else {
            self.current %= self.images.len();
        }
    }

    pub fn open(&mut self) {
        if self.images.is_empty() {
            return;
        }
        if self.reset_on_open {
            self.current = 0;
        }
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn next(&mut self) {
        if self.images.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.images.len();
    }

    pub fn prev(&mut self) {
        if self.images.is_empty() {
            return;
        }
        self.current = (self.current + self.images.len() - 1) % self.images.len();
    }

    pub fn jump(&mut self, index: usize) {
        if self.images.is_empty() {
            return;
        }
        self.current = index % self.images.len();
    }

    pub fn handle_escape(&mut self) {
        self.open = false;
    }

    /// Clicking the dimmed area around the image dismisses the viewer.
    pub fn click_backdrop(&mut self) {
        self.open = false;
    }

    /// Clicking the image itself must not fall through to the backdrop.
    pub fn click_content(&mut self) {}
}

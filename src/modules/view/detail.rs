/// What a detail page should render for the current slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOutcome<'a, T> {
    /// The lookup is still in flight.
    Loading,
    /// The lookup finished and found nothing; send the visitor back to the
    /// listing instead of rendering an empty page.
    RedirectToList,
    Found(&'a T),
}

/// Slug-addressed detail page state. Distinguishes "still loading" from
/// "looked up and absent" so a missing record redirects instead of flashing
/// a blank detail view.
#[derive(Debug, Clone)]
pub struct DetailView<T> {
    slug: String,
    loaded: bool,
    entity: Option<T>,
}

impl<T> DetailView<T> {
    pub fn new() -> Self {
        Self {
            slug: String::new(),
            loaded: false,
            entity: None,
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// A lookup for `slug` is starting. Any record from a previous slug is
    /// discarded so it cannot show under the new address.
    pub fn begin(&mut self, slug: impl Into<String>) {
        self.slug = slug.into();
        self.loaded = false;
        self.entity = None;
    }

    pub fn resolve(&mut self, entity: Option<T>) {
        self.loaded = true;
        self.entity = entity;
    }

    pub fn outcome(&self) -> DetailOutcome<'_, T> {
        if !self.loaded {
            return DetailOutcome::Loading;
        }
        match &self.entity {
            Some(entity) => DetailOutcome::Found(entity),
            None => DetailOutcome::RedirectToList,
        }
    }
}

impl<T> Default for DetailView<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_loading_until_the_lookup_resolves() {
        let mut view: DetailView<String> = DetailView::new();
        view.begin("ray-tracer");

        assert_eq!(view.outcome(), DetailOutcome::Loading);
    }

    #[test]
    fn a_missing_record_redirects_to_the_listing() {
        let mut view: DetailView<String> = DetailView::new();
        view.begin("no-such-slug");
        view.resolve(None);

        assert_eq!(view.outcome(), DetailOutcome::RedirectToList);
    }

    #[test]
    fn a_found_record_renders() {
        let mut view = DetailView::new();
        view.begin("ray-tracer");
        view.resolve(Some("Ray Tracer".to_string()));

        assert_eq!(
            view.outcome(),
            DetailOutcome::Found(&"Ray Tracer".to_string())
        );
    }

    #[test]
    fn switching_slugs_discards_the_previous_record() {
        let mut view = DetailView::new();
        view.begin("ray-tracer");
        view.resolve(Some("Ray Tracer".to_string()));

        view.begin("chat-app");

        assert_eq!(view.slug(), "chat-app");
        assert_eq!(view.outcome(), DetailOutcome::Loading);
    }
}

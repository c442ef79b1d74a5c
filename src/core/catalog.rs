use crate::core::{Catalog, Offering, OfferingId};

/// Catalog loaded once at start-up, kept in declaration order.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    offerings: Vec<Offering>,
}

impl StaticCatalog {
    pub fn new(offerings: Vec<Offering>) -> Self {
        Self { offerings }
    }

    /// Program filter: `"all"` matches every offering.
    pub fn by_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a Offering> + 'a {
        self.offerings
            .iter()
            .filter(move |o| category == "all" || o.category.eq_ignore_ascii_case(category))
    }

    pub fn len(&self) -> usize {
        self.offerings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offerings.is_empty()
    }
}

impl Catalog for StaticCatalog {
    fn resolve(&self, id: OfferingId) -> Option<&Offering> {
        self.offerings.iter().find(|o| o.id == id)
    }
}

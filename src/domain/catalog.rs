//! Ordered catalog of invitation templates.
//!
//! Position in the catalog is meaningful: the template at 1-based position `N`
//! is stored as `template<N>.html`, and previous/next navigation walks the
//! catalog in order.

use crate::domain::entities::TemplateDescriptor;

/// Immutable, ordered list of template descriptors.
///
/// Built once at startup and shared through application state.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<TemplateDescriptor>,
}

/// A catalog entry together with its position.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry<'a> {
    pub descriptor: &'a TemplateDescriptor,
    /// 1-based position, also the template file number.
    pub position: usize,
    pub previous: Option<&'a TemplateDescriptor>,
    pub next: Option<&'a TemplateDescriptor>,
}

impl TemplateCatalog {
    /// Creates a catalog from an ordered list.
    ///
    /// # Panics
    ///
    /// Panics if two descriptors share an id; the catalog is static data and a
    /// duplicate is a programming error.
    pub fn new(templates: Vec<TemplateDescriptor>) -> Self {
        for (i, template) in templates.iter().enumerate() {
            assert!(
                !templates[..i].iter().any(|t| t.id == template.id),
                "duplicate template id '{}'",
                template.id
            );
        }
        Self { templates }
    }

    /// The six designs shipped with the service.
    pub fn builtin() -> Self {
        Self::new(vec![
            TemplateDescriptor::new(
                "elegant-floral",
                "Elegant Floral",
                "A sophisticated design with delicate floral elements and elegant typography.",
                "#7c3aed",
                "#f3e8ff",
            ),
            TemplateDescriptor::new(
                "rustic-charm",
                "Rustic Charm",
                "A warm, earthy design with wooden textures and handwritten-style fonts.",
                "#92400e",
                "#fef3c7",
            ),
            TemplateDescriptor::new(
                "modern-minimal",
                "Modern Minimal",
                "A clean, contemporary design with simple lines and minimalist aesthetic.",
                "#1f2937",
                "#f9fafb",
            ),
            TemplateDescriptor::new(
                "romantic-script",
                "Romantic Script",
                "A dreamy design with flowing script fonts and soft color palette.",
                "#be185d",
                "#fce7f3",
            ),
            TemplateDescriptor::new(
                "tropical-paradise",
                "Tropical Paradise",
                "A vibrant design with lush tropical elements and bright colors.",
                "#047857",
                "#d1fae5",
            ),
            TemplateDescriptor::new(
                "dutch-save-the-date",
                "Dutch Save the Date",
                "A classic save-the-date card with elegant typography and positioned QR code.",
                "#96979b",
                "#9beafb",
            )
            .with_custom_style("width: 100%; height: 100%; object-fit: contain;"),
        ])
    }

    pub fn all(&self) -> &[TemplateDescriptor] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Looks up a template and its neighbours by id.
    pub fn entry(&self, id: &str) -> Option<CatalogEntry<'_>> {
        let index = self.templates.iter().position(|t| t.id == id)?;

        Some(CatalogEntry {
            descriptor: &self.templates[index],
            position: index + 1,
            previous: index.checked_sub(1).map(|i| &self.templates[i]),
            next: self.templates.get(index + 1),
        })
    }

    pub fn get(&self, id: &str) -> Option<&TemplateDescriptor> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// First template, used when the form has not picked one yet.
    pub fn first(&self) -> Option<&TemplateDescriptor> {
        self.templates.first()
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order() {
        let catalog = TemplateCatalog::builtin();
        let ids: Vec<&str> = catalog.all().iter().map(|t| t.id.as_str()).collect();

        assert_eq!(
            ids,
            vec![
                "elegant-floral",
                "rustic-charm",
                "modern-minimal",
                "romantic-script",
                "tropical-paradise",
                "dutch-save-the-date",
            ]
        );
    }

    #[test]
    fn test_entry_position_is_one_based() {
        let catalog = TemplateCatalog::builtin();

        assert_eq!(catalog.entry("elegant-floral").unwrap().position, 1);
        assert_eq!(catalog.entry("dutch-save-the-date").unwrap().position, 6);
    }

    #[test]
    fn test_entry_neighbours() {
        let catalog = TemplateCatalog::builtin();

        let first = catalog.entry("elegant-floral").unwrap();
        assert!(first.previous.is_none());
        assert_eq!(first.next.unwrap().id, "rustic-charm");

        let middle = catalog.entry("modern-minimal").unwrap();
        assert_eq!(middle.previous.unwrap().id, "rustic-charm");
        assert_eq!(middle.next.unwrap().id, "romantic-script");

        let last = catalog.entry("dutch-save-the-date").unwrap();
        assert_eq!(last.previous.unwrap().id, "tropical-paradise");
        assert!(last.next.is_none());
    }

    #[test]
    fn test_unknown_id() {
        let catalog = TemplateCatalog::builtin();
        assert!(catalog.entry("gothic").is_none());
        assert!(catalog.get("gothic").is_none());
    }

    #[test]
    fn test_only_dutch_template_has_custom_style() {
        let catalog = TemplateCatalog::builtin();
        let styled: Vec<&str> = catalog
            .all()
            .iter()
            .filter(|t| t.custom_style.is_some())
            .map(|t| t.id.as_str())
            .collect();

        assert_eq!(styled, vec!["dutch-save-the-date"]);
    }

    #[test]
    #[should_panic(expected = "duplicate template id")]
    fn test_duplicate_ids_rejected() {
        TemplateCatalog::new(vec![
            TemplateDescriptor::new("a", "A", "", "#000", "#fff"),
            TemplateDescriptor::new("a", "B", "", "#000", "#fff"),
        ]);
    }
}

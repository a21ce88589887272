use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub price: String,
    /// Dietary tags as printed on the menu, e.g. "V", "VG", "GF option".
    pub dietary: Vec<String>,
    pub image: Option<String>,
    pub featured: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MenuSection {
    pub name: String,
    pub description: String,
    pub items: Vec<MenuItem>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DietaryFilter {
    #[default]
    All,
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
}

impl DietaryFilter {
    pub const ALL: [DietaryFilter; 5] = [
        DietaryFilter::All,
        DietaryFilter::Vegetarian,
        DietaryFilter::Vegan,
        DietaryFilter::GlutenFree,
        DietaryFilter::DairyFree,
    ];

    /// Menu tag this filter matches; `None` for `All`.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            DietaryFilter::All => None,
            DietaryFilter::Vegetarian => Some("V"),
            DietaryFilter::Vegan => Some("VG"),
            DietaryFilter::GlutenFree => Some("GF"),
            DietaryFilter::DairyFree => Some("DF"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DietaryFilter::All => "All Items",
            DietaryFilter::Vegetarian => "Vegetarian",
            DietaryFilter::Vegan => "Vegan",
            DietaryFilter::GlutenFree => "Gluten Free",
            DietaryFilter::DairyFree => "Dairy Free",
        }
    }

    /// Tags match exactly, so "GF option" does not count as gluten free.
    pub fn matches(&self, item: &MenuItem) -> bool {
        match self.tag() {
            None => true,
            Some(tag) => item.dietary.iter().any(|t| t == tag),
        }
    }
}

/// Keeps the items matching `filter` and drops sections left empty.
pub fn filter_sections(sections: &[MenuSection], filter: DietaryFilter) -> Vec<MenuSection> {
    if filter == DietaryFilter::All {
        return sections.to_vec();
    }

    sections
        .iter()
        .map(|section| MenuSection {
            items: section
                .items
                .iter()
                .filter(|item| filter.matches(item))
                .cloned()
                .collect(),
            ..section.clone()
        })
        .filter(|section| !section.items.is_empty())
        .collect()
}

/// Which menu section is expanded. With none expanded every section shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionExpansion {
    expanded: Option<String>,
}

impl SectionExpansion {
    pub fn toggle(&mut self, section: &str) {
        if self.expanded.as_deref() == Some(section) {
            self.expanded = None;
        } else {
            self.expanded = Some(section.to_string());
        }
    }

    pub fn is_visible(&self, section: &str) -> bool {
        match &self.expanded {
            None => true,
            Some(expanded) => expanded == section,
        }
    }

    pub fn is_expanded(&self, section: &str) -> bool {
        self.expanded.as_deref() == Some(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn item(name: &str, dietary: &[&str]) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            description: String::new(),
            price: "£5.00".to_string(),
            dietary: dietary.iter().map(|t| t.to_string()).collect(),
            image: None,
            featured: false,
        }
    }

    fn sections() -> Vec<MenuSection> {
        vec![
            MenuSection {
                name: "Breakfast & Brunch".to_string(),
                description: "Served until 3pm daily".to_string(),
                items: vec![
                    item("Classic Avocado Toast", &["V", "GF option"]),
                    item("Kimchi Cheese Toastie", &["V"]),
                ],
            },
            MenuSection {
                name: "Coffee & Tea".to_string(),
                description: "Specialty grade coffee".to_string(),
                items: vec![
                    item("Signature Latte", &["VG option"]),
                    item("Seasonal Pour Over", &["VG"]),
                ],
            },
        ]
    }

    fn names(sections: &[MenuSection]) -> Vec<(String, Vec<String>)> {
        sections
            .iter()
            .map(|s| (s.name.clone(), s.items.iter().map(|i| i.name.clone()).collect()))
            .collect()
    }

    #[test]
    fn all_returns_everything_untouched() {
        assert_eq!(filter_sections(&sections(), DietaryFilter::All), sections());
    }

    #[test]
    fn vegan_filter_drops_empty_sections() {
        let filtered = filter_sections(&sections(), DietaryFilter::Vegan);
        assert_eq!(
            names(&filtered),
            vec![("Coffee & Tea".to_string(), vec!["Seasonal Pour Over".to_string()])]
        );
    }

    #[test]
    fn option_tags_do_not_match() {
        let filtered = filter_sections(&sections(), DietaryFilter::GlutenFree);
        assert!(filtered.is_empty());
    }

    #[rstest]
    #[case(DietaryFilter::Vegetarian, 2)]
    #[case(DietaryFilter::Vegan, 1)]
    #[case(DietaryFilter::DairyFree, 0)]
    fn counts_matching_items(#[case] filter: DietaryFilter, #[case] expected: usize) {
        let total: usize = filter_sections(&sections(), filter)
            .iter()
            .map(|s| s.items.len())
            .sum();
        assert_eq!(total, expected);
    }

    #[test]
    fn only_one_section_is_expanded_at_a_time() {
        let mut expansion = SectionExpansion::default();
        assert!(expansion.is_visible("Breakfast & Brunch"));
        assert!(expansion.is_visible("Coffee & Tea"));

        expansion.toggle("Coffee & Tea");
        assert!(expansion.is_expanded("Coffee & Tea"));
        assert!(!expansion.is_visible("Breakfast & Brunch"));

        expansion.toggle("Breakfast & Brunch");
        assert!(!expansion.is_visible("Coffee & Tea"));

        expansion.toggle("Breakfast & Brunch");
        assert_eq!(expansion, SectionExpansion::default());
    }
}

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Client records
// ---------------------------------------------------------------------------

/// One client shown on the site: portfolio card and filterable grid entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub description: String,
}

impl ClientRecord {
    pub fn new(id: u32, name: &str, category: &str, description: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Reserved wildcard label. Not a category itself — matches every record.
pub const ALL_CATEGORIES: &str = "All";

/// Fixed category set, wildcard first. Order drives the chip row on the page.
pub const CATEGORIES: [&str; 7] = [
    ALL_CATEGORIES,
    "Sports Content",
    "Premium Eyewear",
    "E-commerce",
    "AI & VR Solutions",
    "Skincare & Haircare",
    "Student Accommodation",
];

/// Whether `label` belongs to the enumerated set (wildcard included).
pub fn is_known_category(label: &str) -> bool {
    CATEGORIES.contains(&label)
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

static CLIENTS: Lazy<Vec<ClientRecord>> = Lazy::new(|| {
    vec![
        ClientRecord::new(
            1,
            "Cricstudioinc",
            "Sports Content",
            "Cricket content & brand building - Building a strong community around sports content",
        ),
        ClientRecord::new(
            2,
            "Shiva Optics Plus",
            "Premium Eyewear",
            "Transforming premium eyewear brand presence with sophisticated, minimal design",
        ),
        ClientRecord::new(
            3,
            "Shiva Enterprise",
            "E-commerce",
            "Modern eyewear e-commerce social strategy - Thoughtfully selected products",
        ),
        ClientRecord::new(
            4,
            "The Quick Craft",
            "AI & VR Solutions",
            "AI-powered design & VR solutions - Leveraging AI and human creativity",
        ),
        ClientRecord::new(
            5,
            "Dronagiri Herbal",
            "Skincare & Haircare",
            "Natural skincare & haircare brand launch - 100% herbal products",
        ),
        ClientRecord::new(
            6,
            "Shivaangi Hostel",
            "Student Accommodation",
            "Student accommodation brand building - Establishing trust within education community",
        ),
    ]
});

/// Full catalog in insertion order. Compiled in, never mutated.
pub fn clients() -> &'static [ClientRecord] {
    &CLIENTS
}

/// The enumerated category labels, wildcard first.
pub fn categories() -> &'static [&'static str] {
    &CATEGORIES
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Records whose `category` equals `label` exactly (case-sensitive, no
/// normalization). The wildcard returns all records in the same order.
/// Unknown labels yield an empty list — never an error.
pub fn filter_clients(label: &str, clients: &[ClientRecord]) -> Vec<ClientRecord> {
    if label == ALL_CATEGORIES {
        return clients.to_vec();
    }
    clients
        .iter()
        .filter(|c| c.category == label)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_record_has_a_known_category() {
        for record in clients() {
            assert!(
                is_known_category(&record.category),
                "unknown category on record {}: {}",
                record.id,
                record.category
            );
            assert_ne!(record.category, ALL_CATEGORIES);
        }
    }

    #[test]
    fn wildcard_returns_full_catalog() {
        assert_eq!(filter_clients(ALL_CATEGORIES, clients()), clients().to_vec());
    }

    #[test]
    fn concrete_category_matches_exactly() {
        for category in &CATEGORIES[1..] {
            for record in filter_clients(category, clients()) {
                assert_eq!(record.category, *category);
            }
        }
    }

    #[test]
    fn filter_is_idempotent() {
        for category in categories() {
            let once = filter_clients(category, clients());
            let twice = filter_clients(category, &once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn concrete_categories_partition_the_catalog() {
        let mut seen: Vec<ClientRecord> = Vec::new();
        for category in &CATEGORIES[1..] {
            for record in filter_clients(category, clients()) {
                assert!(!seen.contains(&record), "record {} matched twice", record.id);
                seen.push(record);
            }
        }
        seen.sort_by_key(|r| r.id);
        assert_eq!(seen, clients().to_vec());
    }

    #[test]
    fn ai_vr_matches_the_quick_craft_only() {
        let matched = filter_clients("AI & VR Solutions", clients());
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "The Quick Craft");
    }

    #[test]
    fn unknown_category_yields_empty() {
        assert!(filter_clients("Unknown Category", clients()).is_empty());
    }

    #[test]
    fn filter_preserves_catalog_order() {
        let all = filter_clients(ALL_CATEGORIES, clients());
        let ids: Vec<u32> = all.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }
}

//! Static service catalog
//!
//! Reference data compiled into the binary. It is never written after
//! startup, so concurrent readers need no synchronization.

use crate::domain::{AddOnService, Service, ServiceCategory, ServicePrice};

const CONTACT_FOR_PRICING: ServicePrice = ServicePrice::Display("Contact for pricing");

static SERVICES: &[Service] = &[
    Service {
        id: "lawn-mowing",
        name: "Lawn Mowing",
        description: "Regular, clean cuts using sharp blades to maintain a healthy and even lawn. \
            Includes full mow of front, back, and side yards with patterned mowing available if \
            requested. Clippings can be mulched or bagged depending on lawn needs.",
        short_description: "Regular, clean cuts using sharp blades for healthy, even lawn",
        price: CONTACT_FOR_PRICING,
        price_note: "Pricing based on lawn size and frequency",
        features: &[
            "Full mow of front, back, and side yards",
            "Patterned mowing available if requested",
            "Clippings mulched or bagged based on lawn needs",
            "Sharp blades for healthy cuts",
            "Regular weekly or bi-weekly service",
        ],
        icon: "mower",
        category: ServiceCategory::Maintenance,
        is_active: true,
        seasonal_service: false,
    },
    Service {
        id: "weedwacking",
        name: "Weedwacking (String Trimming)",
        description: "Finishes the job where the mower can't reach, providing sharp and uniform \
            edges around trees, flower beds, fences, utility poles, mailboxes, and other obstacles.",
        short_description: "String trimming around obstacles for sharp, uniform edges",
        price: CONTACT_FOR_PRICING,
        price_note: "Often included with mowing service",
        features: &[
            "Around trees, flower beds, fences",
            "Utility poles and mailboxes",
            "Sharp, uniform edges",
            "Completes areas mower can't reach",
            "Professional finishing touch",
        ],
        icon: "trimmer",
        category: ServiceCategory::Maintenance,
        is_active: true,
        seasonal_service: false,
    },
    Service {
        id: "edging",
        name: "Edging",
        description: "Creates crisp, professional lines along sidewalks, driveways, flower beds, \
            and curbs. Performed with a dedicated edging tool for that finished, professional look.",
        short_description: "Crisp, professional lines along sidewalks and driveways",
        price: CONTACT_FOR_PRICING,
        price_note: "Often included with full service packages",
        features: &[
            "Sidewalks and driveways",
            "Flower beds and curbs",
            "Dedicated edging tool",
            "Professional finished look",
            "Crisp, clean lines",
        ],
        icon: "edger",
        category: ServiceCategory::Maintenance,
        is_active: true,
        seasonal_service: false,
    },
    Service {
        id: "leaf-blowing",
        name: "Leaf Blowing & Debris Cleanup",
        description: "Post-mow or seasonal service to clear grass clippings from hardscapes, \
            leaves from lawns, patios, and walkways, plus removal of twigs, sticks, and general debris.",
        short_description: "Post-mow and seasonal cleanup of debris and leaves",
        price: CONTACT_FOR_PRICING,
        price_note: "Seasonal pricing available",
        features: &[
            "Grass clippings from hardscapes",
            "Leaves from lawns, patios, walkways",
            "Twigs, sticks, and debris removal",
            "Post-mow cleanup",
            "Seasonal service available",
        ],
        icon: "leaf-blower",
        category: ServiceCategory::Cleanup,
        is_active: true,
        seasonal_service: true,
    },
    Service {
        id: "weeding",
        name: "Weeding (Manual Removal)",
        description: "Targeted hand-pulling of weeds from garden beds, walkways, and mulched \
            areas. Ideal for clients who want a tidy, manicured look beyond chemical sprays.",
        short_description: "Hand-pulling weeds for tidy, manicured look",
        price: CONTACT_FOR_PRICING,
        price_note: "Pricing based on area size and weed density",
        features: &[
            "Garden beds and walkways",
            "Mulched areas",
            "Hand-pulling technique",
            "No chemical sprays",
            "Tidy, manicured appearance",
        ],
        icon: "weeds",
        category: ServiceCategory::Maintenance,
        is_active: true,
        seasonal_service: false,
    },
    Service {
        id: "soil-treatments",
        name: "Soil & Lawn Treatments",
        description: "Using professional-grade products to feed your lawn from the ground up. \
            Includes advanced soil health treatments for microbe activation, complete nutrient \
            formulas for all-in-one support, and premium color enhancement for rich, visual \
            impact. Custom application schedule based on lawn goals.",
        short_description: "Professional-grade products for soil health and lawn nutrition",
        price: CONTACT_FOR_PRICING,
        price_note: "Custom application schedule pricing",
        features: &[
            "Advanced soil health treatment for microbe activation",
            "Complete nutrient formula for all-in-one support",
            "Premium color enhancement for rich visual impact",
            "Custom application schedule",
            "Premium product quality",
        ],
        icon: "fertilizer",
        category: ServiceCategory::Treatments,
        is_active: true,
        seasonal_service: true,
    },
    Service {
        id: "mulching",
        name: "Mulching",
        description: "Installation or refresh of mulch beds with weed barrier preparation. Uses \
            high-quality hardwood or color-enhanced mulch for improved moisture retention and \
            enhanced curb appeal.",
        short_description: "Installation and refresh of mulch beds with weed barrier",
        price: CONTACT_FOR_PRICING,
        price_note: "Pricing based on area size and mulch type",
        features: &[
            "Weed barrier preparation",
            "High-quality hardwood mulch",
            "Color-enhanced mulch options",
            "Improved moisture retention",
            "Enhanced curb appeal",
        ],
        icon: "mulch",
        category: ServiceCategory::Landscaping,
        is_active: true,
        seasonal_service: true,
    },
    Service {
        id: "hedge-trimming",
        name: "Hedge & Tree Trimming",
        description: "Seasonal shaping of shrubs and decorative hedges, trimming of low-hanging \
            branches from ornamental trees, and removal of deadwood or overgrowth.",
        short_description: "Seasonal shaping of hedges and ornamental tree trimming",
        price: CONTACT_FOR_PRICING,
        price_note: "Seasonal service pricing",
        features: &[
            "Shrubs and decorative hedges",
            "Low-hanging ornamental tree branches",
            "Deadwood removal",
            "Overgrowth trimming",
            "Seasonal shaping",
        ],
        icon: "hedge-trimmer",
        category: ServiceCategory::Landscaping,
        is_active: true,
        seasonal_service: true,
    },
];

/// Every catalog entry, active or not
pub fn all() -> &'static [Service] {
    SERVICES
}

pub fn get_by_id(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|service| service.id == id)
}

pub fn by_category(category: ServiceCategory) -> impl Iterator<Item = &'static Service> {
    SERVICES
        .iter()
        .filter(move |service| service.category == category)
}

pub fn active() -> impl Iterator<Item = &'static Service> {
    SERVICES.iter().filter(|service| service.is_active)
}

pub fn seasonal() -> impl Iterator<Item = &'static Service> {
    SERVICES.iter().filter(|service| service.seasonal_service)
}

pub fn maintenance() -> impl Iterator<Item = &'static Service> {
    by_category(ServiceCategory::Maintenance)
}

/// Active catalog services matching the given ids, in catalog order.
/// Unknown ids are skipped.
pub fn selected<'a>(ids: &'a [String]) -> impl Iterator<Item = &'static Service> + 'a {
    active().filter(move |service| ids.iter().any(|id| id == service.id))
}

/// Project a catalog service onto the add-on shape used by the pricing rules
pub fn as_add_on(service: &Service) -> AddOnService {
    AddOnService::from(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<&str> = all().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), all().len());
        assert_eq!(all().len(), 8);
    }

    #[test]
    fn test_every_service_has_features() {
        for service in all() {
            assert!(!service.features.is_empty(), "{} has no features", service.id);
            assert!(!service.name.is_empty());
            assert!(!service.icon.is_empty());
        }
    }

    #[test]
    fn test_get_by_id() {
        let service = get_by_id("mulching").expect("mulching exists");
        assert_eq!(service.name, "Mulching");
        assert_eq!(service.category, ServiceCategory::Landscaping);
        assert!(get_by_id("snow-removal").is_none());
    }

    #[test]
    fn test_filters() {
        assert_eq!(maintenance().count(), 4);
        assert_eq!(by_category(ServiceCategory::Cleanup).count(), 1);
        assert_eq!(by_category(ServiceCategory::Treatments).count(), 1);
        assert_eq!(active().count(), 8);
        let seasonal_ids: Vec<&str> = seasonal().map(|s| s.id).collect();
        assert_eq!(
            seasonal_ids,
            vec!["leaf-blowing", "soil-treatments", "mulching", "hedge-trimming"]
        );
    }

    #[test]
    fn test_selected_keeps_catalog_order_and_skips_unknown() {
        let ids = vec![
            "mulching".to_string(),
            "unknown".to_string(),
            "edging".to_string(),
        ];
        let names: Vec<&str> = selected(&ids).map(|s| s.name).collect();
        assert_eq!(names, vec!["Edging", "Mulching"]);
    }

    #[test]
    fn test_as_add_on_carries_display_price() {
        let add_on = as_add_on(get_by_id("edging").unwrap());
        assert_eq!(add_on.id, "edging");
        assert_eq!(add_on.name, "Edging");
        assert_eq!(
            add_on.price,
            crate::domain::AddOnPrice::Text("Contact for pricing".to_string())
        );
    }
}

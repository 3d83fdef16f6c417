//! Keyword-based category detection
//!
//! Two ordered rule tables: the first matches against the worksheet section
//! header or the product name, the second against the name only. The first
//! matching rule wins; products matching nothing land in Autre.

use shared::models::Category;

/// A single keyword rule
pub struct CategoryRule {
    pub keyword: &'static str,
    pub category: Category,
}

const fn rule(keyword: &'static str, category: Category) -> CategoryRule {
    CategoryRule { keyword, category }
}

/// Rules applied to the section header first, then to the product name
pub const SECTION_RULES: &[CategoryRule] = &[
    rule("blancs", Category::Vin),
    rule("rouges", Category::Vin),
    rule("rosés", Category::Vin),
    rule("champagne", Category::Alcool),
    rule("softs", Category::Soft),
    rule("bières", Category::Biere),
    rule("spiritueux", Category::Alcool),
    rule("digestifs", Category::Alcool),
    rule("apéritifs", Category::Alcool),
    rule("café", Category::CafeThe),
    rule("thé", Category::CafeThe),
];

/// Fallback rules applied to the product name only
pub const NAME_RULES: &[CategoryRule] = &[
    rule("champagne", Category::Alcool),
    rule("crémant", Category::Alcool),
    rule("côtes", Category::Vin),
    rule("bordeaux", Category::Vin),
    rule("bourgogne", Category::Vin),
    rule("heineken", Category::Biere),
    rule("bière", Category::Biere),
    rule("pils", Category::Biere),
    rule("coca", Category::Soft),
    rule("sprite", Category::Soft),
    rule("eau", Category::Soft),
    rule("whisky", Category::Alcool),
    rule("vodka", Category::Alcool),
    rule("rhum", Category::Alcool),
    rule("café", Category::CafeThe),
    rule("expresso", Category::CafeThe),
];

/// Detect the category of a product from its name and the section header
/// it appeared under
pub fn detect_category(product_name: &str, section_name: &str) -> Category {
    let name = product_name.to_lowercase();
    let section = section_name.to_lowercase();

    for rule in SECTION_RULES {
        if section.contains(rule.keyword) || name.contains(rule.keyword) {
            return rule.category;
        }
    }

    for rule in NAME_RULES {
        if name.contains(rule.keyword) {
            return rule.category;
        }
    }

    Category::Autre
}

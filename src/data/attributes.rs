//! Category Attribute Taxonomy
//!
//! Static table mapping each product category to the attributes the listing
//! form collects. Plain exported constants, no globals; the add/edit product
//! pages iterate this to build their attribute inputs.

/// How an attribute is entered in the product form
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AttributeInput {
    /// Fixed set of options rendered as a dropdown
    Select(&'static [&'static str]),
    /// Free text
    Text,
    /// Numeric value with a unit label
    Number(&'static str),
}

/// One attribute collected for a category
#[derive(Clone, Copy, Debug)]
pub struct AttributeDef {
    /// Key sent to the API in the product's attribute map
    pub name: &'static str,
    /// Label shown in the form
    pub label: &'static str,
    pub input: AttributeInput,
    pub required: bool,
}

/// A product category with its attribute set
#[derive(Clone, Copy, Debug)]
pub struct Category {
    pub slug: &'static str,
    pub label: &'static str,
    pub attributes: &'static [AttributeDef],
}

const SIZES_APPAREL: &[&str] = &["XS", "S", "M", "L", "XL", "XXL"];
const SIZES_SHOES_EU: &[&str] = &[
    "36", "37", "38", "39", "40", "41", "42", "43", "44", "45", "46",
];
const COLORS: &[&str] = &[
    "Black", "White", "Grey", "Navy", "Blue", "Green", "Red", "Maroon", "Yellow", "Orange",
    "Pink", "Purple", "Brown", "Beige", "Gold", "Silver", "Multicolour",
];
const FABRICS: &[&str] = &[
    "Cotton", "Lawn", "Linen", "Silk", "Chiffon", "Khaddar", "Wool", "Polyester", "Denim",
    "Velvet", "Leather", "Mixed",
];
const WARRANTY: &[&str] = &[
    "No Warranty",
    "7 Days",
    "1 Month",
    "3 Months",
    "6 Months",
    "1 Year",
    "2 Years",
];
const CONDITION: &[&str] = &["New", "Open Box", "Refurbished", "Used"];

pub const CATEGORIES: &[Category] = &[
    Category {
        slug: "mens-fashion",
        label: "Men's Fashion",
        attributes: &[
            AttributeDef {
                name: "size",
                label: "Size",
                input: AttributeInput::Select(SIZES_APPAREL),
                required: true,
            },
            AttributeDef {
                name: "color",
                label: "Colour",
                input: AttributeInput::Select(COLORS),
                required: true,
            },
            AttributeDef {
                name: "fabric",
                label: "Fabric",
                input: AttributeInput::Select(FABRICS),
                required: false,
            },
            AttributeDef {
                name: "fit",
                label: "Fit",
                input: AttributeInput::Select(&["Slim", "Regular", "Loose"]),
                required: false,
            },
        ],
    },
    Category {
        slug: "womens-fashion",
        label: "Women's Fashion",
        attributes: &[
            AttributeDef {
                name: "size",
                label: "Size",
                input: AttributeInput::Select(SIZES_APPAREL),
                required: true,
            },
            AttributeDef {
                name: "color",
                label: "Colour",
                input: AttributeInput::Select(COLORS),
                required: true,
            },
            AttributeDef {
                name: "fabric",
                label: "Fabric",
                input: AttributeInput::Select(FABRICS),
                required: false,
            },
            AttributeDef {
                name: "pieces",
                label: "Pieces",
                input: AttributeInput::Select(&["1 Piece", "2 Piece", "3 Piece"]),
                required: false,
            },
            AttributeDef {
                name: "stitched",
                label: "Stitching",
                input: AttributeInput::Select(&["Stitched", "Unstitched"]),
                required: true,
            },
        ],
    },
    Category {
        slug: "footwear",
        label: "Footwear",
        attributes: &[
            AttributeDef {
                name: "size_eu",
                label: "Size (EU)",
                input: AttributeInput::Select(SIZES_SHOES_EU),
                required: true,
            },
            AttributeDef {
                name: "color",
                label: "Colour",
                input: AttributeInput::Select(COLORS),
                required: true,
            },
            AttributeDef {
                name: "material",
                label: "Upper Material",
                input: AttributeInput::Select(&[
                    "Leather",
                    "Synthetic",
                    "Canvas",
                    "Suede",
                    "Mesh",
                    "Rubber",
                ]),
                required: false,
            },
        ],
    },
    Category {
        slug: "electronics",
        label: "Electronics",
        attributes: &[
            AttributeDef {
                name: "brand",
                label: "Brand",
                input: AttributeInput::Text,
                required: true,
            },
            AttributeDef {
                name: "model",
                label: "Model",
                input: AttributeInput::Text,
                required: true,
            },
            AttributeDef {
                name: "warranty",
                label: "Warranty",
                input: AttributeInput::Select(WARRANTY),
                required: true,
            },
            AttributeDef {
                name: "condition",
                label: "Condition",
                input: AttributeInput::Select(CONDITION),
                required: true,
            },
            AttributeDef {
                name: "power_watts",
                label: "Power",
                input: AttributeInput::Number("W"),
                required: false,
            },
        ],
    },
    Category {
        slug: "mobiles-tablets",
        label: "Mobiles & Tablets",
        attributes: &[
            AttributeDef {
                name: "brand",
                label: "Brand",
                input: AttributeInput::Select(&[
                    "Samsung", "Apple", "Xiaomi", "Oppo", "Vivo", "Infinix", "Tecno", "Realme",
                    "Nokia", "Other",
                ]),
                required: true,
            },
            AttributeDef {
                name: "storage_gb",
                label: "Storage",
                input: AttributeInput::Select(&["16", "32", "64", "128", "256", "512", "1024"]),
                required: true,
            },
            AttributeDef {
                name: "ram_gb",
                label: "RAM",
                input: AttributeInput::Select(&["2", "3", "4", "6", "8", "12", "16"]),
                required: true,
            },
            AttributeDef {
                name: "condition",
                label: "Condition",
                input: AttributeInput::Select(CONDITION),
                required: true,
            },
            AttributeDef {
                name: "pta_approved",
                label: "PTA Approved",
                input: AttributeInput::Select(&["Yes", "No"]),
                required: true,
            },
        ],
    },
    Category {
        slug: "home-kitchen",
        label: "Home & Kitchen",
        attributes: &[
            AttributeDef {
                name: "material",
                label: "Material",
                input: AttributeInput::Select(&[
                    "Wood", "Metal", "Glass", "Ceramic", "Plastic", "Marble", "Stainless Steel",
                    "Melamine",
                ]),
                required: false,
            },
            AttributeDef {
                name: "color",
                label: "Colour",
                input: AttributeInput::Select(COLORS),
                required: false,
            },
            AttributeDef {
                name: "capacity",
                label: "Capacity",
                input: AttributeInput::Text,
                required: false,
            },
        ],
    },
    Category {
        slug: "beauty-health",
        label: "Beauty & Health",
        attributes: &[
            AttributeDef {
                name: "brand",
                label: "Brand",
                input: AttributeInput::Text,
                required: true,
            },
            AttributeDef {
                name: "volume_ml",
                label: "Volume",
                input: AttributeInput::Number("ml"),
                required: false,
            },
            AttributeDef {
                name: "expiry",
                label: "Expiry Date",
                input: AttributeInput::Text,
                required: false,
            },
            AttributeDef {
                name: "skin_type",
                label: "Skin Type",
                input: AttributeInput::Select(&["All", "Dry", "Oily", "Combination", "Sensitive"]),
                required: false,
            },
        ],
    },
    Category {
        slug: "groceries",
        label: "Groceries",
        attributes: &[
            AttributeDef {
                name: "weight",
                label: "Net Weight",
                input: AttributeInput::Number("g"),
                required: true,
            },
            AttributeDef {
                name: "expiry",
                label: "Expiry Date",
                input: AttributeInput::Text,
                required: true,
            },
            AttributeDef {
                name: "halal_certified",
                label: "Halal Certified",
                input: AttributeInput::Select(&["Yes", "No"]),
                required: false,
            },
        ],
    },
    Category {
        slug: "sports-outdoor",
        label: "Sports & Outdoor",
        attributes: &[
            AttributeDef {
                name: "sport",
                label: "Sport",
                input: AttributeInput::Select(&[
                    "Cricket", "Football", "Hockey", "Badminton", "Cycling", "Fitness", "Camping",
                    "Other",
                ]),
                required: true,
            },
            AttributeDef {
                name: "size",
                label: "Size",
                input: AttributeInput::Text,
                required: false,
            },
            AttributeDef {
                name: "material",
                label: "Material",
                input: AttributeInput::Text,
                required: false,
            },
        ],
    },
    Category {
        slug: "toys-kids",
        label: "Toys & Kids",
        attributes: &[
            AttributeDef {
                name: "age_group",
                label: "Age Group",
                input: AttributeInput::Select(&[
                    "0-12 Months",
                    "1-3 Years",
                    "3-6 Years",
                    "6-12 Years",
                    "12+ Years",
                ]),
                required: true,
            },
            AttributeDef {
                name: "color",
                label: "Colour",
                input: AttributeInput::Select(COLORS),
                required: false,
            },
            AttributeDef {
                name: "battery_operated",
                label: "Battery Operated",
                input: AttributeInput::Select(&["Yes", "No"]),
                required: false,
            },
        ],
    },
    Category {
        slug: "books-stationery",
        label: "Books & Stationery",
        attributes: &[
            AttributeDef {
                name: "language",
                label: "Language",
                input: AttributeInput::Select(&["Urdu", "English", "Arabic", "Other"]),
                required: false,
            },
            AttributeDef {
                name: "binding",
                label: "Binding",
                input: AttributeInput::Select(&["Paperback", "Hardcover", "Spiral"]),
                required: false,
            },
        ],
    },
    Category {
        slug: "automotive",
        label: "Automotive",
        attributes: &[
            AttributeDef {
                name: "vehicle_type",
                label: "Vehicle Type",
                input: AttributeInput::Select(&["Car", "Motorcycle", "Rickshaw", "Truck", "Universal"]),
                required: true,
            },
            AttributeDef {
                name: "brand",
                label: "Brand",
                input: AttributeInput::Text,
                required: false,
            },
            AttributeDef {
                name: "condition",
                label: "Condition",
                input: AttributeInput::Select(CONDITION),
                required: true,
            },
        ],
    },
];

/// Attribute definitions for a category slug
pub fn attributes_for_category(slug: &str) -> Option<&'static [AttributeDef]> {
    CATEGORIES
        .iter()
        .find(|c| c.slug == slug)
        .map(|c| c.attributes)
}

/// `(slug, label)` pairs for the category dropdown
pub fn category_labels() -> impl Iterator<Item = (&'static str, &'static str)> {
    CATEGORIES.iter().map(|c| (c.slug, c.label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_unique_slug() {
        let mut slugs: Vec<_> = CATEGORIES.iter().map(|c| c.slug).collect();
        let len = slugs.len();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), len);
    }

    #[test]
    fn lookup_by_slug() {
        let attrs = attributes_for_category("mobiles-tablets").unwrap();
        assert!(attrs.iter().any(|a| a.name == "pta_approved"));
        assert!(attributes_for_category("no-such-category").is_none());
    }

    #[test]
    fn select_attributes_always_have_options() {
        for category in CATEGORIES {
            for attr in category.attributes {
                if let AttributeInput::Select(options) = attr.input {
                    assert!(
                        !options.is_empty(),
                        "{}/{} has an empty option list",
                        category.slug,
                        attr.name
                    );
                }
            }
        }
    }
}

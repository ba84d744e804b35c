//! Built-in palettes for theme mode.
//!
//! The table is static and immutable. [`PaletteRegistry::global`] indexes it
//! once by id and by category on first use.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Palette grouping shown to users when picking a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteCategory {
    Classic,
    Professional,
    Design,
    Vibrant,
    Soft,
}

impl PaletteCategory {
    pub const ALL: [PaletteCategory; 5] = [
        PaletteCategory::Classic,
        PaletteCategory::Professional,
        PaletteCategory::Design,
        PaletteCategory::Vibrant,
        PaletteCategory::Soft,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Professional => "Professional",
            Self::Design => "Design",
            Self::Vibrant => "Vibrant",
            Self::Soft => "Soft",
        }
    }
}

/// A named, ordered set of 8-10 distinct colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub id: &'static str,
    pub name: &'static str,
    pub category: PaletteCategory,
    pub colors: &'static [&'static str],
}

impl Palette {
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

const PALETTES: &[Palette] = &[
    // Classic
    Palette {
        id: "tableau-10",
        name: "Tableau 10",
        category: PaletteCategory::Classic,
        colors: &[
            "#4E79A7", "#F28E2B", "#E15759", "#76B7B2", "#59A14F", "#EDC948", "#B07AA1", "#FF9DA7",
            "#9C755F", "#BAB0AC",
        ],
    },
    Palette {
        id: "category-10",
        name: "Category 10",
        category: PaletteCategory::Classic,
        colors: &[
            "#1F77B4", "#FF7F0E", "#2CA02C", "#D62728", "#9467BD", "#8C564B", "#E377C2", "#7F7F7F",
            "#BCBD22", "#17BECF",
        ],
    },
    Palette {
        id: "set-1",
        name: "Set 1",
        category: PaletteCategory::Classic,
        colors: &[
            "#E41A1C", "#377EB8", "#4DAF4A", "#984EA3", "#FF7F00", "#FFFF33", "#A65628", "#F781BF",
            "#999999",
        ],
    },
    // Professional
    Palette {
        id: "corporate",
        name: "Corporate",
        category: PaletteCategory::Professional,
        colors: &[
            "#1F3A5F", "#2E5C8A", "#3F7CAC", "#5C9BD1", "#7A8B99", "#4A5568", "#2C7A7B", "#805AD5",
            "#B7791F", "#9B2C2C",
        ],
    },
    Palette {
        id: "office",
        name: "Office",
        category: PaletteCategory::Professional,
        colors: &[
            "#4472C4", "#ED7D31", "#A5A5A5", "#FFC000", "#5B9BD5", "#70AD47", "#264478", "#9E480E",
            "#636363", "#997300",
        ],
    },
    Palette {
        id: "slate",
        name: "Slate",
        category: PaletteCategory::Professional,
        colors: &[
            "#0F172A", "#1E293B", "#334155", "#475569", "#64748B", "#0E7490", "#1D4ED8", "#4338CA",
        ],
    },
    // Design
    Palette {
        id: "material",
        name: "Material",
        category: PaletteCategory::Design,
        colors: &[
            "#F44336", "#E91E63", "#9C27B0", "#3F51B5", "#2196F3", "#009688", "#4CAF50", "#FF9800",
            "#795548", "#607D8B",
        ],
    },
    Palette {
        id: "tailwind",
        name: "Tailwind",
        category: PaletteCategory::Design,
        colors: &[
            "#EF4444", "#F97316", "#EAB308", "#22C55E", "#14B8A6", "#3B82F6", "#6366F1", "#A855F7",
            "#EC4899", "#64748B",
        ],
    },
    Palette {
        id: "nord",
        name: "Nord Aurora",
        category: PaletteCategory::Design,
        colors: &[
            "#BF616A", "#D08770", "#EBCB8B", "#A3BE8C", "#B48EAD", "#88C0D0", "#81A1C1", "#5E81AC",
        ],
    },
    // Vibrant
    Palette {
        id: "neon",
        name: "Neon",
        category: PaletteCategory::Vibrant,
        colors: &[
            "#FF006E", "#FB5607", "#FFBE0B", "#8338EC", "#3A86FF", "#06D6A0", "#EF476F", "#118AB2",
        ],
    },
    Palette {
        id: "dark-2",
        name: "Dark 2",
        category: PaletteCategory::Vibrant,
        colors: &[
            "#1B9E77", "#D95F02", "#7570B3", "#E7298A", "#66A61E", "#E6AB02", "#A6761D", "#666666",
        ],
    },
    Palette {
        id: "tropical",
        name: "Tropical",
        category: PaletteCategory::Vibrant,
        colors: &[
            "#F94144", "#F3722C", "#F8961E", "#F9844A", "#F9C74F", "#90BE6D", "#43AA8B", "#4D908E",
            "#577590", "#277DA1",
        ],
    },
    // Soft
    Palette {
        id: "pastel-1",
        name: "Pastel 1",
        category: PaletteCategory::Soft,
        colors: &[
            "#FBB4AE", "#B3CDE3", "#CCEBC5", "#DECBE4", "#FED9A6", "#FFFFCC", "#E5D8BD", "#FDDAEC",
            "#F2F2F2",
        ],
    },
    Palette {
        id: "set-3",
        name: "Set 3",
        category: PaletteCategory::Soft,
        colors: &[
            "#8DD3C7", "#FFFFB3", "#BEBADA", "#FB8072", "#80B1D3", "#FDB462", "#B3DE69", "#FCCDE5",
            "#D9D9D9", "#BC80BD",
        ],
    },
    Palette {
        id: "macaron",
        name: "Macaron",
        category: PaletteCategory::Soft,
        colors: &[
            "#F4A6A6", "#F7C59F", "#F6E3A1", "#C5E1A5", "#A5D8D3", "#A7C7E7", "#C3B1E1", "#E8B4D8",
        ],
    },
];

/// Lookup structure over the static palette table
pub struct PaletteRegistry {
    by_id: HashMap<&'static str, &'static Palette>,
    by_category: HashMap<PaletteCategory, Vec<&'static Palette>>,
}

impl PaletteRegistry {
    fn new() -> Self {
        let mut by_id = HashMap::new();
        let mut by_category: HashMap<PaletteCategory, Vec<&'static Palette>> = HashMap::new();

        for palette in PALETTES {
            by_id.insert(palette.id, palette);
            by_category.entry(palette.category).or_default().push(palette);
        }

        Self { by_id, by_category }
    }

    /// Get the global palette registry instance
    pub fn global() -> &'static Self {
        static INSTANCE: Lazy<PaletteRegistry> = Lazy::new(PaletteRegistry::new);
        &INSTANCE
    }

    pub fn get(&self, id: &str) -> Option<&'static Palette> {
        self.by_id.get(id).copied()
    }

    /// Palettes of one category, in table order
    pub fn in_category(&self, category: PaletteCategory) -> &[&'static Palette] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Look up a built-in palette by id.
pub fn lookup_palette(id: &str) -> Option<&'static Palette> {
    PaletteRegistry::global().get(id)
}

/// Every built-in palette, grouped by category in [`PaletteCategory::ALL`] order.
pub fn list_palettes() -> &'static [Palette] {
    PALETTES
}

pub fn list_categories() -> &'static [PaletteCategory] {
    &PaletteCategory::ALL
}

pub fn palettes_in_category(category: PaletteCategory) -> Vec<&'static Palette> {
    PaletteRegistry::global().in_category(category).to_vec()
}

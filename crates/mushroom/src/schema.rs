//! Characteristic schema of the agaricus-lepiota data set.
//!
//! This list is the single source of truth for form fields, encoder blocks
//! and the feedback table columns. Order matters for column layout only.

use serde::Serialize;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Code {
    pub code: &'static str,
    pub meaning: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Characteristic {
    pub name: &'static str,
    pub codes: &'static [Code],
}

impl Characteristic {
    pub fn meaning(&self, code: &str) -> Option<&'static str> {
        self.codes.iter().find(|c| c.code == code).map(|c| c.meaning)
    }

    pub fn is_valid_code(&self, code: &str) -> bool {
        self.meaning(code).is_some()
    }
}

const fn c(code: &'static str, meaning: &'static str) -> Code {
    Code { code, meaning }
}

const STALK_SURFACE: &[Code] = &[
    c("f", "fibrous"),
    c("y", "scaly"),
    c("k", "silky"),
    c("s", "smooth"),
];

const STALK_COLOR: &[Code] = &[
    c("n", "brown"),
    c("b", "buff"),
    c("c", "cinnamon"),
    c("g", "gray"),
    c("o", "orange"),
    c("p", "pink"),
    c("e", "red"),
    c("w", "white"),
    c("y", "yellow"),
];

static CHARACTERISTICS: [Characteristic; 22] = [
    Characteristic {
        name: "cap_shape",
        codes: &[
            c("b", "bell"),
            c("c", "conical"),
            c("x", "convex"),
            c("f", "flat"),
            c("k", "knobbed"),
            c("s", "sunken"),
        ],
    },
    Characteristic {
        name: "cap_surface",
        codes: &[c("f", "fibrous"), c("g", "grooves"), c("y", "scaly"), c("s", "smooth")],
    },
    Characteristic {
        name: "cap_color",
        codes: &[
            c("n", "brown"),
            c("b", "buff"),
            c("c", "cinnamon"),
            c("g", "gray"),
            c("r", "green"),
            c("p", "pink"),
            c("u", "purple"),
            c("e", "red"),
            c("w", "white"),
            c("y", "yellow"),
        ],
    },
    Characteristic {
        name: "bruises",
        codes: &[c("t", "bruises"), c("f", "no")],
    },
    Characteristic {
        name: "odor",
        codes: &[
            c("a", "almond"),
            c("l", "anise"),
            c("c", "creosote"),
            c("y", "fishy"),
            c("f", "foul"),
            c("m", "musty"),
            c("n", "none"),
            c("p", "pungent"),
            c("s", "spicy"),
        ],
    },
    Characteristic {
        name: "gill_attachment",
        codes: &[c("a", "attached"), c("d", "descending"), c("f", "free"), c("n", "notched")],
    },
    Characteristic {
        name: "gill_spacing",
        codes: &[c("c", "close"), c("w", "crowded"), c("d", "distant")],
    },
    Characteristic {
        name: "gill_size",
        codes: &[c("b", "broad"), c("n", "narrow")],
    },
    Characteristic {
        name: "gill_color",
        codes: &[
            c("k", "black"),
            c("n", "brown"),
            c("b", "buff"),
            c("h", "chocolate"),
            c("g", "gray"),
            c("r", "green"),
            c("o", "orange"),
            c("p", "pink"),
            c("u", "purple"),
            c("e", "red"),
            c("w", "white"),
            c("y", "yellow"),
        ],
    },
    Characteristic {
        name: "stalk_shape",
        codes: &[c("e", "enlarging"), c("t", "tapering")],
    },
    Characteristic {
        name: "stalk_root",
        codes: &[
            c("b", "bulbous"),
            c("c", "club"),
            c("u", "cup"),
            c("e", "equal"),
            c("z", "rhizomorphs"),
            c("r", "rooted"),
            c("?", "missing"),
        ],
    },
    Characteristic {
        name: "stalk_surface_above_ring",
        codes: STALK_SURFACE,
    },
    Characteristic {
        name: "stalk_surface_below_ring",
        codes: STALK_SURFACE,
    },
    Characteristic {
        name: "stalk_color_above_ring",
        codes: STALK_COLOR,
    },
    Characteristic {
        name: "stalk_color_below_ring",
        codes: STALK_COLOR,
    },
    Characteristic {
        name: "veil_type",
        codes: &[c("p", "partial"), c("u", "universal")],
    },
    Characteristic {
        name: "veil_color",
        codes: &[c("n", "brown"), c("o", "orange"), c("w", "white"), c("y", "yellow")],
    },
    Characteristic {
        name: "ring_number",
        codes: &[c("n", "none"), c("o", "one"), c("t", "two")],
    },
    Characteristic {
        name: "ring_type",
        codes: &[
            c("c", "cobwebby"),
            c("e", "evanescent"),
            c("f", "flaring"),
            c("l", "large"),
            c("n", "none"),
            c("p", "pendant"),
            c("s", "sheathing"),
            c("z", "zone"),
        ],
    },
    Characteristic {
        name: "spore_print_color",
        codes: &[
            c("k", "black"),
            c("n", "brown"),
            c("b", "buff"),
            c("h", "chocolate"),
            c("r", "green"),
            c("o", "orange"),
            c("u", "purple"),
            c("w", "white"),
            c("y", "yellow"),
        ],
    },
    Characteristic {
        name: "population",
        codes: &[
            c("a", "abundant"),
            c("c", "clustered"),
            c("n", "numerous"),
            c("s", "scattered"),
            c("v", "several"),
            c("y", "solitary"),
        ],
    },
    Characteristic {
        name: "habitat",
        codes: &[
            c("g", "grasses"),
            c("l", "leaves"),
            c("m", "meadows"),
            c("p", "paths"),
            c("u", "urban"),
            c("w", "waste"),
            c("d", "woods"),
        ],
    },
];

/// All characteristics in column order.
pub fn characteristics() -> &'static [Characteristic] {
    &CHARACTERISTICS
}

pub fn characteristic(name: &str) -> Option<&'static Characteristic> {
    CHARACTERISTICS.iter().find(|ch| ch.name == name)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    CHARACTERISTICS.iter().map(|ch| ch.name)
}

/// A technology category the directory knows how to browse. The term is
/// used both as the search query and the topic filter; the logo is the
/// glyph shown next to the category title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technology {
    pub term: &'static str,
    pub logo: &'static str,
}

pub const JAVASCRIPT: Technology = Technology {
    term: "JavaScript",
    logo: "[JS]",
};

pub const CATALOG: &[Technology] = &[
    JAVASCRIPT,
    Technology {
        term: "React",
        logo: "⚛",
    },
    Technology {
        term: "Vue",
        logo: "[V]",
    },
    Technology {
        term: "Node",
        logo: "⬢",
    },
    Technology {
        term: "TypeScript",
        logo: "[TS]",
    },
];

pub fn lookup(term: &str) -> Option<&'static Technology> {
    CATALOG.iter().find(|t| t.term.eq_ignore_ascii_case(term))
}

/// Logo for a term, falling back to the JavaScript glyph for unknown ones.
pub fn logo_for(term: &str) -> &'static str {
    lookup(term).map(|t| t.logo).unwrap_or(JAVASCRIPT.logo)
}

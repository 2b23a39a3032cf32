//! Static catalog of programming-language tags offered by the form.
//!
//! Each entry pairs a machine tag (embedded verbatim in the instruction
//! payload) with a display label.  [`filter`] backs the language search box:
//! case-insensitive substring match against either the tag or the label.

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// One selectable language: `(tag, label)`.
pub type LanguageEntry = (&'static str, &'static str);

/// Language tag pre-selected on an empty form.
pub const DEFAULT_LANGUAGE: &str = "python";

/// All selectable languages, in menu order.
pub const LANGUAGES: &[LanguageEntry] = &[
    ("python", "Python"),
    ("javascript", "JavaScript"),
    ("typescript", "TypeScript"),
    ("java", "Java"),
    ("cpp", "C++"),
    ("c", "C"),
    ("csharp", "C#"),
    ("go", "Go"),
    ("rust", "Rust"),
    ("swift", "Swift"),
    ("kotlin", "Kotlin"),
    ("php", "PHP"),
    ("ruby", "Ruby"),
    ("scala", "Scala"),
    ("dart", "Dart"),
    ("r", "R"),
    ("matlab", "MATLAB"),
    ("sql", "SQL"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("bash", "Bash"),
    ("powershell", "PowerShell"),
    ("perl", "Perl"),
    ("lua", "Lua"),
    ("haskell", "Haskell"),
    ("clojure", "Clojure"),
    ("elixir", "Elixir"),
    ("erlang", "Erlang"),
    ("fsharp", "F#"),
    ("assembly", "Assembly"),
    ("cobol", "COBOL"),
    ("fortran", "Fortran"),
    ("vba", "VBA"),
    ("groovy", "Groovy"),
    ("julia", "Julia"),
    ("ocaml", "OCaml"),
    ("scheme", "Scheme"),
    ("prolog", "Prolog"),
    ("verilog", "Verilog"),
    ("vhdl", "VHDL"),
];

// ---------------------------------------------------------------------------
// Lookup & filter
// ---------------------------------------------------------------------------

/// Display label for `tag`, or `None` when the tag is not in the catalog.
pub fn label_for(tag: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(value, _)| *value == tag)
        .map(|(_, label)| *label)
}

/// Entries whose tag or label contains `query` (case-insensitive).
///
/// An empty query returns the whole catalog, matching the search box showing
/// every language before the user types.
pub fn filter(query: &str) -> Vec<LanguageEntry> {
    let needle = query.to_lowercase();
    LANGUAGES
        .iter()
        .copied()
        .filter(|(value, label)| {
            value.contains(&needle) || label.to_lowercase().contains(&needle)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Regional language catalog.
//!
//! Selection is synchronous in the original app; the "availability" lists
//! appear as soon as a language is picked, with no mock delay.

/// A supported regional language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 code.
    pub code: &'static str,
    /// English name.
    pub name: &'static str,
    /// Name in native script.
    pub native: &'static str,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.native)
    }
}

/// The ten languages offered by the demo.
pub const LANGUAGES: [Language; 10] = [
    Language { code: "hi", name: "Hindi", native: "\u{939}\u{93F}\u{928}\u{94D}\u{926}\u{940}" },
    Language { code: "bn", name: "Bengali", native: "\u{9AC}\u{9BE}\u{982}\u{9B2}\u{9BE}" },
    Language { code: "te", name: "Telugu", native: "\u{C24}\u{C46}\u{C32}\u{C41}\u{C17}\u{C41}" },
    Language { code: "mr", name: "Marathi", native: "\u{92E}\u{930}\u{93E}\u{920}\u{940}" },
    Language { code: "ta", name: "Tamil", native: "\u{BA4}\u{BAE}\u{BBF}\u{BB4}\u{BCD}" },
    Language {
        code: "gu",
        name: "Gujarati",
        native: "\u{A97}\u{AC1}\u{A9C}\u{AB0}\u{ABE}\u{AA4}\u{AC0}",
    },
    Language { code: "kn", name: "Kannada", native: "\u{C95}\u{CA8}\u{CCD}\u{CA8}\u{CA1}" },
    Language {
        code: "ml",
        name: "Malayalam",
        native: "\u{D2E}\u{D32}\u{D2F}\u{D3E}\u{D33}\u{D02}",
    },
    Language {
        code: "pa",
        name: "Punjabi",
        native: "\u{A2A}\u{A70}\u{A1C}\u{A3E}\u{A2C}\u{A40}",
    },
    Language {
        code: "as",
        name: "Assamese",
        native: "\u{985}\u{9B8}\u{9AE}\u{9C0}\u{9AF}\u{9BC}\u{9BE}",
    },
];

/// Canned "available content" list shown once a language is selected.
pub const AVAILABLE_CONTENT: [&str; 5] = [
    "\u{2713} Mathematics lessons",
    "\u{2713} Science explanations",
    "\u{2713} History narratives",
    "\u{2713} Literature analysis",
    "\u{2713} Practice exercises",
];

/// Canned "learning features" list shown once a language is selected.
pub const LEARNING_FEATURES: [&str; 5] = [
    "\u{1F3A7} Audio pronunciation",
    "\u{1F4DD} Native script support",
    "\u{1F3AD} Cultural context",
    "\u{1F4DA} Regional examples",
    "\u{1F5E3}\u{FE0F} Voice interaction",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_unique_codes() {
        for (i, a) in LANGUAGES.iter().enumerate() {
            for b in &LANGUAGES[i + 1..] {
                assert_ne!(a.code, b.code);
            }
        }
    }
}

//! Static country dial-code registry.

use serde::Serialize;

/// A single country in the dial-code registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryEntry {
    /// International calling prefix, e.g. "+971"
    pub dial_code: &'static str,

    /// Two-letter lowercase ISO code, used only for flag-image lookup
    pub iso_code: &'static str,

    /// Human-readable country name
    pub display_name: &'static str,
}

/// Every country the forms know about. Declared order is the Gulf-first
/// ordering used by the enquiry and in-house forms.
const COUNTRIES: &[CountryEntry] = &[
    CountryEntry { dial_code: "+971", iso_code: "ae", display_name: "United Arab Emirates" },
    CountryEntry { dial_code: "+966", iso_code: "sa", display_name: "Saudi Arabia" },
    CountryEntry { dial_code: "+974", iso_code: "qa", display_name: "Qatar" },
    CountryEntry { dial_code: "+965", iso_code: "kw", display_name: "Kuwait" },
    CountryEntry { dial_code: "+973", iso_code: "bh", display_name: "Bahrain" },
    CountryEntry { dial_code: "+968", iso_code: "om", display_name: "Oman" },
    CountryEntry { dial_code: "+962", iso_code: "jo", display_name: "Jordan" },
    CountryEntry { dial_code: "+961", iso_code: "lb", display_name: "Lebanon" },
    CountryEntry { dial_code: "+91", iso_code: "in", display_name: "India" },
    CountryEntry { dial_code: "+44", iso_code: "gb", display_name: "United Kingdom" },
    CountryEntry { dial_code: "+1", iso_code: "us", display_name: "United States" },
    CountryEntry { dial_code: "+65", iso_code: "sg", display_name: "Singapore" },
    CountryEntry { dial_code: "+234", iso_code: "ng", display_name: "Nigeria" },
    CountryEntry { dial_code: "+92", iso_code: "pk", display_name: "Pakistan" },
    CountryEntry { dial_code: "+20", iso_code: "eg", display_name: "Egypt" },
    CountryEntry { dial_code: "+63", iso_code: "ph", display_name: "Philippines" },
    CountryEntry { dial_code: "+33", iso_code: "fr", display_name: "France" },
    CountryEntry { dial_code: "+49", iso_code: "de", display_name: "Germany" },
    CountryEntry { dial_code: "+94", iso_code: "lk", display_name: "Sri Lanka" },
    CountryEntry { dial_code: "+60", iso_code: "my", display_name: "Malaysia" },
    CountryEntry { dial_code: "+27", iso_code: "za", display_name: "South Africa" },
];

/// An ordered, immutable dial-code registry.
///
/// Ordering is part of each form's configuration: the enquiry forms keep the
/// home region first, the career form lists countries alphabetically. Lookups
/// that miss fall back to the first entry rather than failing.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<CountryEntry>,
}

impl Registry {
    /// Registry in declared order: Gulf countries first.
    pub fn gulf_first() -> Self {
        Self {
            entries: COUNTRIES.to_vec(),
        }
    }

    /// Registry sorted alphabetically by display name.
    pub fn alphabetical() -> Self {
        let mut entries = COUNTRIES.to_vec();
        entries.sort_by(|a, b| a.display_name.cmp(b.display_name));
        Self { entries }
    }

    /// Registry with a caller-supplied ordering (must be non-empty).
    pub fn from_entries(entries: Vec<CountryEntry>) -> Self {
        debug_assert!(!entries.is_empty());
        Self { entries }
    }

    /// All entries in registry order.
    pub fn all(&self) -> &[CountryEntry] {
        &self.entries
    }

    /// Look up an entry by dial code, falling back to the first entry.
    pub fn lookup(&self, dial_code: &str) -> &CountryEntry {
        self.entries
            .iter()
            .find(|e| e.dial_code == dial_code)
            .unwrap_or(&self.entries[0])
    }

    /// Whether a dial code is a member of this registry.
    pub fn contains(&self, dial_code: &str) -> bool {
        self.entries.iter().any(|e| e.dial_code == dial_code)
    }

    /// Number of entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

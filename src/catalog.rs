//! The 19 named Badí' months.
//!
//! A [`MonthCatalog`] is an immutable snapshot handed to the converter by
//! whoever owns the month table. It may be incomplete; lookups then fail and
//! the converter reports the gap instead of panicking.

use crate::consts::{BADI_MONTHS, FEAST_NAME_PREFIX};
use serde::{Deserialize, Serialize};

/// Error type for catalog construction and lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Month number outside 1..=19.
    #[error("Invalid month number: {number} (must be 1-{})", BADI_MONTHS)]
    NumberOutOfRange { number: u8 },

    /// Two entries share a number.
    #[error("Duplicate entry for month {number}")]
    DuplicateNumber { number: u8 },

    /// Entry with an empty or blank name.
    #[error("Month {number} has an empty name")]
    EmptyName { number: u8 },

    /// Entry with an empty or blank translation.
    #[error("Month {number} has an empty translation")]
    EmptyTranslation { number: u8 },

    /// Lookup of a month the catalog does not contain.
    #[error("Month {number} not found in catalog")]
    MissingMonth { number: u8 },
}

/// One named Badí' month: its number, transliterated name and French translation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBadiMonth", into = "RawBadiMonth")]
pub struct BadiMonth {
    number:      u8,
    name:        String,
    translation: String,
}

/// Unchecked wire form of [`BadiMonth`]
#[derive(Serialize, Deserialize)]
struct RawBadiMonth {
    number:      u8,
    name:        String,
    translation: String,
}

impl TryFrom<RawBadiMonth> for BadiMonth {
    type Error = CatalogError;

    fn try_from(raw: RawBadiMonth) -> Result<Self, Self::Error> {
        Self::new(raw.number, raw.name, raw.translation)
    }
}

impl From<BadiMonth> for RawBadiMonth {
    fn from(month: BadiMonth) -> Self {
        Self {
            number:      month.number,
            name:        month.name,
            translation: month.translation,
        }
    }
}

impl BadiMonth {
    /// Creates a validated month entry.
    ///
    /// # Errors
    /// Returns `CatalogError` if the number is outside 1..=19 or a label is blank.
    pub fn new(
        number: u8,
        name: impl Into<String>,
        translation: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let month = Self {
            number,
            name: name.into(),
            translation: translation.into(),
        };
        month.validate()?;
        Ok(month)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let number = self.number;
        if number == 0 || number > BADI_MONTHS {
            return Err(CatalogError::NumberOutOfRange { number });
        }
        if self.name.trim().is_empty() {
            return Err(CatalogError::EmptyName { number });
        }
        if self.translation.trim().is_empty() {
            return Err(CatalogError::EmptyTranslation { number });
        }
        Ok(())
    }

    pub const fn number(&self) -> u8 {
        self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// `"Fête de <name>"`
    pub fn feast_name(&self) -> String {
        format!("{FEAST_NAME_PREFIX}{}", self.name)
    }
}

/// Entries used to seed the month table.
const STANDARD_MONTHS: [(&str, &str); BADI_MONTHS as usize] = [
    ("Bahá", "Splendeur"),
    ("Jalál", "Gloire"),
    ("Jamál", "Beauté"),
    ("‘Aẓamat", "Grandeur"),
    ("Núr", "Lumière"),
    ("Raḥmat", "Miséricorde"),
    ("Kalimát", "Paroles"),
    ("Kamál", "Perfection"),
    ("Asmá’", "Noms"),
    ("‘Izzat", "Puissance"),
    ("Mashíyyat", "Volonté"),
    ("‘Ilm", "Savoir"),
    ("Qudrat", "Pouvoir"),
    ("Qawl", "Parole"),
    ("Masá’il", "Questions"),
    ("Sharaf", "Honneur"),
    ("Sulṭán", "Souveraineté"),
    ("Mulk", "Empire"),
    ("‘Alá’", "Élévation"),
];

/// Read-only table of Badí' months indexed by number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<BadiMonth>", into = "Vec<BadiMonth>")]
pub struct MonthCatalog {
    months: [Option<BadiMonth>; BADI_MONTHS as usize],
}

impl MonthCatalog {
    /// Builds a catalog from entries in any order.
    ///
    /// Missing numbers are allowed; see [`Self::is_complete`].
    ///
    /// # Errors
    /// Returns `CatalogError` for an invalid entry or a duplicate number.
    pub fn new<I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = BadiMonth>,
    {
        let mut catalog = Self::empty();
        for entry in entries {
            entry.validate()?;
            let slot = &mut catalog.months[usize::from(entry.number - 1)];
            if slot.is_some() {
                return Err(CatalogError::DuplicateNumber {
                    number: entry.number,
                });
            }
            *slot = Some(entry);
        }
        Ok(catalog)
    }

    /// A catalog with no entries
    pub fn empty() -> Self {
        Self {
            months: std::array::from_fn(|_| None),
        }
    }

    /// The canonical 19 months with their French translations
    pub fn standard() -> Self {
        let mut catalog = Self::empty();
        for (slot, (number, (name, translation))) in catalog
            .months
            .iter_mut()
            .zip((1..=BADI_MONTHS).zip(STANDARD_MONTHS))
        {
            *slot = Some(BadiMonth {
                number,
                name: name.to_owned(),
                translation: translation.to_owned(),
            });
        }
        catalog
    }

    /// Looks up a month by number; `None` if absent or out of range.
    pub fn get(&self, number: u8) -> Option<&BadiMonth> {
        let index = usize::from(number.checked_sub(1)?);
        self.months.get(index)?.as_ref()
    }

    /// Like [`Self::get`] but reports a miss as an error.
    ///
    /// # Errors
    /// Returns `CatalogError::MissingMonth` if the month is absent.
    pub fn require(&self, number: u8) -> Result<&BadiMonth, CatalogError> {
        self.get(number)
            .ok_or(CatalogError::MissingMonth { number })
    }

    /// Finds a month by its transliterated name (exact match)
    pub fn find_by_name(&self, name: &str) -> Option<&BadiMonth> {
        self.iter().find(|month| month.name == name)
    }

    /// Present entries in month order
    pub fn iter(&self) -> impl Iterator<Item = &BadiMonth> {
        self.months.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.months.iter().all(Option::is_none)
    }

    /// `true` when all 19 months are present
    pub fn is_complete(&self) -> bool {
        self.months.iter().all(Option::is_some)
    }

    /// Numbers of the months the catalog lacks
    pub fn missing(&self) -> Vec<u8> {
        (1..=BADI_MONTHS)
            .filter(|&number| self.get(number).is_none())
            .collect()
    }
}

impl Default for MonthCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<BadiMonth>> for MonthCatalog {
    type Error = CatalogError;

    fn try_from(entries: Vec<BadiMonth>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<MonthCatalog> for Vec<BadiMonth> {
    fn from(catalog: MonthCatalog) -> Self {
        catalog.months.into_iter().flatten().collect()
    }
}

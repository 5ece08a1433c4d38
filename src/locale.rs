//! French labels for day descriptions.

use crate::badi::BadiDate;
use crate::catalog::BadiMonth;
use crate::gregorian::GregorianDate;

/// `"er"` for the first month, `"ème"` otherwise
pub const fn ordinal_suffix(number: u8) -> &'static str {
    if number == 1 { "er" } else { "ème" }
}

/// `"<g day> <MON> - <b day> <name> (<translation> - <n><suffix> mois)"`
pub fn day_description(gregorian: GregorianDate, badi: BadiDate, month: &BadiMonth) -> String {
    format!(
        "{} {} - {} {} ({} - {}{} mois)",
        gregorian.day(),
        gregorian.french_month_abbreviation(),
        badi.day(),
        month.name(),
        month.translation(),
        badi.month(),
        ordinal_suffix(badi.month()),
    )
}

/// Text returned in place of a description when the month is unknown
pub fn missing_month_description(gregorian: GregorianDate, badi: BadiDate) -> String {
    format!(
        "{} {} - Erreur : mois {} introuvable dans le catalogue",
        gregorian.day(),
        gregorian.french_month_abbreviation(),
        badi.month(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MonthCatalog;

    #[test]
    fn test_ordinal_suffix() {
        assert_eq!(ordinal_suffix(1), "er");
        for number in 2..=19 {
            assert_eq!(ordinal_suffix(number), "ème", "month {number}");
        }
    }

    #[test]
    fn test_day_description_first_month() {
        let catalog = MonthCatalog::standard();
        let description = day_description(
            GregorianDate::new(2025, 3, 21).unwrap(),
            BadiDate::new(1, 1, 182).unwrap(),
            catalog.get(1).unwrap(),
        );
        assert_eq!(description, "21 MAR - 1 Bahá (Splendeur - 1er mois)");
    }

    #[test]
    fn test_day_description_accented_abbreviation() {
        let catalog = MonthCatalog::standard();
        let description = day_description(
            GregorianDate::new(2025, 2, 3).unwrap(),
            BadiDate::new(10, 18, 181).unwrap(),
            catalog.get(18).unwrap(),
        );
        assert_eq!(description, "3 FÉV - 10 Mulk (Empire - 18ème mois)");
    }

    #[test]
    fn test_missing_month_description() {
        let text = missing_month_description(
            GregorianDate::new(2025, 9, 27).unwrap(),
            BadiDate::new(1, 11, 182).unwrap(),
        );
        assert_eq!(text, "27 SEP - Erreur : mois 11 introuvable dans le catalogue");
    }
}

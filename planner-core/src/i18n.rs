//! Locale-aware text lookup.
//!
//! Every user-facing word comes from a per-locale table, with `pt` as the
//! fallback language. The table is deliberately static: two locales, one
//! key enum, no runtime loading.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Active language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    #[default]
    Pt,
}

impl Locale {
    /// Parse a locale tag like `en`, `en_US.UTF-8` or `pt-BR`.
    /// Unknown tags fall back to the default language.
    pub fn from_tag(tag: &str) -> Self {
        match tag.get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("en") => Locale::En,
            _ => Locale::Pt,
        }
    }

    /// Resolve the locale from the `LANG` environment variable.
    pub fn detect() -> Self {
        std::env::var("LANG")
            .map(|tag| Locale::from_tag(&tag))
            .unwrap_or_default()
    }
}

/// Keys for every translatable string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    InviteFriendsPlanTrip,
    ToWhereQuestion,
    UpdateLocalDate,
    WhoIsGoingQuestion,
    Continue,
    AcceptPrivacyAndPolicyTerms,
    UseTermsAndPrivacyPolicy,
    WhenQuestion,
    ConfirmTrip,
    SelectDate,
    SelectDatesInfo,
    Confirm,
    Until,
    Of,
    TripDetails,
    InputAllInfoToContinue,
    Destination,
    ErrorAtLeast4Char,
}

/// Capability to resolve localized words.
///
/// The date-range selector only needs the connector words and month names,
/// so this is the whole surface it depends on.
pub trait LocaleLookup {
    fn lookup(&self, key: TextKey) -> &str;

    /// Localized month name, `month` in `1..=12`.
    fn month_name(&self, month: u32) -> &str;
}

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

// Portuguese weekday names with the "-feira" suffix already dropped.
const WEEKDAYS_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const WEEKDAYS_PT: [&str; 7] = [
    "domingo", "segunda", "terça", "quarta", "quinta", "sexta", "sábado",
];

/// The static string table for one locale.
#[derive(Debug, Clone, Copy)]
pub struct Translations {
    locale: Locale,
}

impl Translations {
    pub fn new(locale: Locale) -> Self {
        Translations { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Localized weekday name.
    pub fn weekday_name(&self, weekday: Weekday) -> &'static str {
        let idx = weekday.num_days_from_sunday() as usize;
        match self.locale {
            Locale::En => WEEKDAYS_EN[idx],
            Locale::Pt => WEEKDAYS_PT[idx],
        }
    }

    /// Three-letter month abbreviation, `month` in `1..=12`.
    pub fn month_abbrev(&self, month: u32) -> String {
        self.month_name(month).chars().take(3).collect()
    }
}

impl LocaleLookup for Translations {
    fn lookup(&self, key: TextKey) -> &str {
        match self.locale {
            Locale::En => en(key),
            Locale::Pt => pt(key),
        }
    }

    fn month_name(&self, month: u32) -> &str {
        let idx = (month.clamp(1, 12) - 1) as usize;
        match self.locale {
            Locale::En => MONTHS_EN[idx],
            Locale::Pt => MONTHS_PT[idx],
        }
    }
}

fn en(key: TextKey) -> &'static str {
    match key {
        TextKey::InviteFriendsPlanTrip => "Invite your friends and plan your next trip",
        TextKey::ToWhereQuestion => "Where to?",
        TextKey::UpdateLocalDate => "Change place and date",
        TextKey::WhoIsGoingQuestion => "Who's going?",
        TextKey::Continue => "Continue",
        TextKey::AcceptPrivacyAndPolicyTerms => {
            "By planning your trip through this app you automatically agree to our"
        }
        TextKey::UseTermsAndPrivacyPolicy => "terms of use and privacy policies.",
        TextKey::WhenQuestion => "When?",
        TextKey::ConfirmTrip => "Confirm trip",
        TextKey::SelectDate => "Select date",
        TextKey::SelectDatesInfo => "Select the departure and return dates of your trip",
        TextKey::Confirm => "Confirm",
        TextKey::Until => "until",
        TextKey::Of => "of",
        TextKey::TripDetails => "Trip details",
        TextKey::InputAllInfoToContinue => "Fill in all the trip information to continue.",
        TextKey::Destination => "Destination",
        TextKey::ErrorAtLeast4Char => "must be at least 4 characters long",
    }
}

fn pt(key: TextKey) -> &'static str {
    match key {
        TextKey::InviteFriendsPlanTrip => "Convide seus amigos e planeje sua próxima viagem",
        TextKey::ToWhereQuestion => "Para onde?",
        TextKey::UpdateLocalDate => "Alterar local e data",
        TextKey::WhoIsGoingQuestion => "Quem estará na viagem?",
        TextKey::Continue => "Continuar",
        TextKey::AcceptPrivacyAndPolicyTerms => {
            "Ao planejar sua viagem pela nossa aplicação você automaticamente concorda com nossos"
        }
        TextKey::UseTermsAndPrivacyPolicy => "termos de uso e políticas de privacidade.",
        TextKey::WhenQuestion => "Quando?",
        TextKey::ConfirmTrip => "Confirmar viagem",
        TextKey::SelectDate => "Selecionar data",
        TextKey::SelectDatesInfo => "Selecione as datas de ida e volta da viagem",
        TextKey::Confirm => "Confirmar",
        TextKey::Until => "até",
        TextKey::Of => "de",
        TextKey::TripDetails => "Detalhes da viagem",
        TextKey::InputAllInfoToContinue => "Preencha todas as informações da viagem para seguir.",
        TextKey::Destination => "Destino",
        TextKey::ErrorAtLeast4Char => "precisa ter pelo menos 4 caracteres",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Locale ---

    #[test]
    fn tag_parsing_matches_language_prefix() {
        assert_eq!(Locale::from_tag("en"), Locale::En);
        assert_eq!(Locale::from_tag("en_US.UTF-8"), Locale::En);
        assert_eq!(Locale::from_tag("EN-GB"), Locale::En);
        assert_eq!(Locale::from_tag("pt_BR.UTF-8"), Locale::Pt);
    }

    #[test]
    fn unknown_tags_fall_back_to_pt() {
        assert_eq!(Locale::from_tag("fr_FR"), Locale::Pt);
        assert_eq!(Locale::from_tag(""), Locale::Pt);
        assert_eq!(Locale::from_tag("e"), Locale::Pt);
    }

    // --- lookup ---

    #[test]
    fn connector_words_resolve_per_locale() {
        let en = Translations::new(Locale::En);
        let pt = Translations::new(Locale::Pt);

        assert_eq!(en.lookup(TextKey::Until), "until");
        assert_eq!(en.lookup(TextKey::Of), "of");
        assert_eq!(pt.lookup(TextKey::Until), "até");
        assert_eq!(pt.lookup(TextKey::Of), "de");
    }

    // --- month / weekday tables ---

    #[test]
    fn month_names_resolve_in_both_locales() {
        let en = Translations::new(Locale::En);
        let pt = Translations::new(Locale::Pt);

        assert_eq!(en.month_name(3), "March");
        assert_eq!(pt.month_name(3), "março");

        for month in 1..=12 {
            assert!(!en.month_name(month).is_empty());
            assert!(!pt.month_name(month).is_empty());
        }
    }

    #[test]
    fn weekday_names_resolve_in_both_locales() {
        let en = Translations::new(Locale::En);
        let pt = Translations::new(Locale::Pt);

        assert_eq!(en.weekday_name(Weekday::Tue), "Tuesday");
        assert_eq!(pt.weekday_name(Weekday::Tue), "terça");
        assert_eq!(pt.weekday_name(Weekday::Sun), "domingo");
    }

    #[test]
    fn month_abbrev_takes_three_chars() {
        let en = Translations::new(Locale::En);
        let pt = Translations::new(Locale::Pt);

        assert_eq!(en.month_abbrev(3), "Mar");
        assert_eq!(pt.month_abbrev(3), "mar");
        assert_eq!(pt.month_abbrev(2), "fev");
    }
}

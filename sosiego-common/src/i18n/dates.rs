use crate::i18n::language::Language;
use time::OffsetDateTime;

/// "October 19, 2026" or "19 de octubre de 2026".
#[must_use]
pub fn long_date(date: OffsetDateTime, language: Language) -> String {
    let month = language.strings().dates.months[usize::from(u8::from(date.month())) - 1];
    match language {
        Language::English => format!("{month} {}, {}", date.day(), date.year()),
        Language::Spanish => format!("{} de {month} de {}", date.day(), date.year()),
    }
}

/// How long ago `date` was, in whole days, falling back to the long date
/// after a month. Dates in the future count as today.
#[must_use]
pub fn relative_date(date: OffsetDateTime, now: OffsetDateTime, language: Language) -> String {
    let strings = &language.strings().dates;
    match (now - date).whole_days() {
        ..=0 => strings.today.to_owned(),
        1 => strings.yesterday.to_owned(),
        days @ 2..7 => strings.days_ago.around(days),
        days @ 7..30 => strings.weeks_ago.around(days / 7),
        _ => long_date(date, language),
    }
}

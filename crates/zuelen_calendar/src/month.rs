//! Month names.

/// Month names and abbreviations, with their month number.
const MONTHS: &[(&str, u32)] = &[
    ("januar", 1),
    ("februar", 2),
    ("mäerz", 3),
    ("abrëll", 4),
    ("mee", 5),
    ("juni", 6),
    ("juli", 7),
    ("august", 8),
    ("september", 9),
    ("oktober", 10),
    ("november", 11),
    ("dezember", 12),
    ("jan", 1),
    ("feb", 2),
    ("mrz", 3),
    ("abr", 4),
    ("jun", 6),
    ("jul", 7),
    ("aug", 8),
    ("sep", 9),
    ("okt", 10),
    ("nov", 11),
    ("dez", 12),
];

/// Days per month. February allows the leap day.
const DAYS_IN_MONTH: [u64; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns the month number for a name or abbreviation, ignoring case.
#[must_use]
pub fn month_number(word: &str) -> Option<u32> {
    let word = word.to_lowercase();
    MONTHS
        .iter()
        .find(|(name, _)| *name == word)
        .map(|(_, number)| *number)
}

/// Returns the largest valid day of a month, or `None` for an invalid month.
#[must_use]
pub fn days_in_month(month: u32) -> Option<u64> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    DAYS_IN_MONTH.get(index).copied()
}

/// All month names and abbreviations.
pub fn month_names() -> impl Iterator<Item = &'static str> {
    MONTHS.iter().map(|(name, _)| *name)
}

use unicode_identifiers::normalization_note;

use crate::tables::Table;

/// сводка по сгенерированной таблице
pub fn print(table: &Table)
{
    let annotated = table
        .codepoints
        .iter()
        .filter(|codepoint| normalization_note(codepoint.character).is_some())
        .count();

    let unknown = table
        .codepoints
        .iter()
        .filter(|codepoint| codepoint.name().is_none())
        .count();

    println!(
        "\n{}:\n  \
        кодпоинтов: {}\n  \
        с примечанием о нормализации: {}\n  \
        без названия в базе: {}\n",
        table.slug,
        table.codepoints.len(),
        annotated,
        unknown,
    );
}

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use unicode_identifiers::normalization_note;
use unicode_identifiers::unicode_version;
use unicode_identifiers::Codepoint;

use crate::tables::Table;

pub mod stats;

/// предупреждение в начале каждого сгенерированного файла
const WARNING: &str = "<!-- WARNING: This file is generated automatically, do not edit it\n\
    directly. Rather, rerun the `unicode_identifiers_prepare` binary which\n\
    generates this file.\n\
    -->\n\n";

/// сноска для кодпоинтов без названия в базе Unicode
const FOOTER: &str = "\n\n\
    [^unknown]: The Unicode name for this character is not present in the name\n            \
    database bundled with the generator. You may be able to find more by\n            \
    searching the character on\n            \
    [fileformat.info](http://www.fileformat.info/info/unicode/char/search.htm)\n            \
    or [Wikipedia](https://www.wikipedia.org/).\n";

const TABLE_HEADER: &str = "| Character | Code point | Name |\n\
    |-----------|------------|------|\n";

/// одна строка таблицы: символ, кодпоинт, название,
/// плюс примечание, если NFKC-нормализация меняет кодпоинт
fn write_row(output: &mut String, codepoint: &Codepoint)
{
    let name = match codepoint.name() {
        Some(name) => name,
        None => "(unknown) [^unknown]".to_owned(),
    };

    write!(output, "| {} | {} | {}", codepoint.character, codepoint.hex(), name).unwrap();

    if let Some(note) = normalization_note(codepoint.character) {
        write!(
            output,
            " (normalizes to {}: {} ({}))",
            note.codes(),
            note.replacement,
            note.names()
        )
        .unwrap();
    }

    output.push_str(" |\n");
}

/// полный текст документа
///
/// результат детерминирован: повторный вызов даёт побайтово идентичную строку
pub fn render(table: &Table) -> String
{
    let mut output = String::with_capacity(table.codepoints.len() * 48);

    output.push_str(WARNING);
    output.push_str(format!("## {}\n\n", table.title).as_str());
    output.push_str(table.intro);
    output.push_str("\n\n");

    output.push_str(
        format!(
            "This page was generated using the `unicode-xid` crate, which uses Unicode\nversion {}.\n\n",
            unicode_version()
        )
        .as_str(),
    );

    output.push_str(
        format!(
            "There are a total of {} characters in this list.\n\n",
            table.codepoints.len()
        )
        .as_str(),
    );

    output.push_str(TABLE_HEADER);

    for codepoint in table.codepoints {
        write_row(&mut output, codepoint);
    }

    output.push_str(FOOTER);

    output
}

/// записать документ: сначала во временный файл рядом с целевым,
/// затем атомарно переименовать, чтобы не опубликовать недописанную таблицу
pub fn publish(table: &Table, dir: &Path) -> io::Result<PathBuf>
{
    let path = dir.join(format!("{}.md", table.slug));
    let tmp = dir.join(format!("{}.md.tmp", table.slug));

    fs::write(&tmp, render(table))?;
    fs::rename(&tmp, &path)?;

    Ok(path)
}

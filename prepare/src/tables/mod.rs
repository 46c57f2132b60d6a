use unicode_identifiers::Codepoint;
use unicode_identifiers::CONTINUE_ONLY_CHARACTERS;
use unicode_identifiers::START_CHARACTERS;

/// один из генерируемых документов: заголовок, описание и отобранные кодпоинты
pub struct Table
{
    /// имя файла без расширения
    pub slug: &'static str,
    /// заголовок документа
    pub title: &'static str,
    /// вступительный текст
    pub intro: &'static str,
    /// строки таблицы, по возрастанию кодпоинтов
    pub codepoints: &'static [Codepoint],
}

/// таблица стартовых кодпоинтов
pub fn start() -> Table
{
    Table {
        slug: "start-characters",
        title: "Start Characters",
        intro: "These are the characters that are valid as any character in a Python variable\n\
            name. For a list of characters that are valid for any character other than the\n\
            first, see the [Continue Characters](continue-characters).\n\
            \n\
            You can also view the <a href=\"start-characters.md\">raw markdown</a> for this page.",
        codepoints: START_CHARACTERS.as_slice(),
    }
}

/// таблица кодпоинтов, допустимых только в продолжении идентификатора
pub fn continue_only() -> Table
{
    Table {
        slug: "continue-characters",
        title: "Continue Characters",
        intro: "These are the characters that are valid as any character other than the first\n\
            in a Python variable name. For a list of characters that are valid for any\n\
            character including the first, see the [Start Characters](start-characters).\n\
            \n\
            You can also view the <a href=\"continue-characters.md\">raw markdown</a> for this page.",
        codepoints: CONTINUE_ONLY_CHARACTERS.as_slice(),
    }
}

use crate::classes::IdentifierClass;

/// классифицированный кодпоинт
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codepoint
{
    /// сам символ
    pub character: char,
    /// класс в синтаксисе идентификаторов
    pub class: IdentifierClass,
}

impl Codepoint
{
    #[inline]
    pub fn new(character: char, class: IdentifierClass) -> Self
    {
        Self { character, class }
    }

    /// числовое значение кодпоинта
    #[inline]
    pub fn code(&self) -> u32
    {
        self.character as u32
    }

    /// кодпоинт в виде U+XXXX (минимум 4 шестнадцатеричных цифры)
    pub fn hex(&self) -> String
    {
        format!("U+{:04X}", self.code())
    }

    /// название символа из базы Unicode
    pub fn name(&self) -> Option<String>
    {
        character_name(self.character)
    }
}

/// название кодпоинта из базы Unicode, если оно там есть
pub fn character_name(code: char) -> Option<String>
{
    unicode_names2::name(code).map(|name| name.to_string())
}

use unicode_normalization::UnicodeNormalization;

use crate::codepoint::character_name;

/// примечание о нормализации: NFKC-форма кодпоинта отличается от него самого
///
/// используется только для аннотаций в сгенерированных таблицах,
/// на классификацию не влияет
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationNote
{
    /// результат нормализации
    pub replacement: String,
}

impl NormalizationNote
{
    /// кодпоинты результата в виде U+XXXX, через запятую
    pub fn codes(&self) -> String
    {
        self.replacement
            .chars()
            .map(|code| format!("U+{:04X}", code as u32))
            .collect::<Vec<String>>()
            .join(", ")
    }

    /// названия кодпоинтов результата, через запятую
    pub fn names(&self) -> String
    {
        self.replacement
            .chars()
            .map(|code| character_name(code).unwrap_or_else(|| "(unknown)".to_owned()))
            .collect::<Vec<String>>()
            .join(", ")
    }
}

/// NFKC-нормализация одного кодпоинта
pub fn nfkc(code: char) -> String
{
    core::iter::once(code).nfkc().collect()
}

/// примечание о нормализации, если она меняет кодпоинт
pub fn normalization_note(code: char) -> Option<NormalizationNote>
{
    let replacement = nfkc(code);

    match replacement.chars().eq(core::iter::once(code)) {
        true => None,
        false => Some(NormalizationNote { replacement }),
    }
}

use crate::classes::classify;
use crate::classes::IdentifierClass;
use crate::codepoint::Codepoint;

lazy_static! {
    /// кодпоинты, допустимые в любой позиции идентификатора
    pub static ref START_CHARACTERS: Vec<Codepoint> = characters(IdentifierClass::Start);

    /// кодпоинты, допустимые в идентификаторе, кроме первой позиции
    pub static ref CONTINUE_ONLY_CHARACTERS: Vec<Codepoint> = characters(IdentifierClass::ContinueOnly);
}

/// все скалярные значения Unicode по возрастанию
pub fn scalar_values() -> impl Iterator<Item = char>
{
    // диапазоны не содержат суррогатных пар, см. определение скалярного значения
    (0 ..= 0xD7FF_u32)
        .chain(0xE000 ..= 0x10FFFF)
        .map(|code| unsafe { char::from_u32_unchecked(code) })
}

/// просканировать всё кодовое пространство и собрать кодпоинты заданного класса
///
/// результат считается заново при каждом вызове, по возрастанию кодпоинтов
pub fn characters(class: IdentifierClass) -> Vec<Codepoint>
{
    scalar_values()
        .filter(|&code| classify(code) == class)
        .map(|code| Codepoint::new(code, class))
        .collect()
}

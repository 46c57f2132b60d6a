use unicode_xid::UnicodeXID;

/// класс кодпоинта в синтаксисе идентификаторов Python
///
/// классы попарно не пересекаются: каждому кодпоинту соответствует ровно один из них
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum IdentifierClass
{
    /// допустим в любой позиции идентификатора, включая первую
    Start,
    /// допустим в идентификаторе, но не в первой позиции
    ContinueOnly,
    /// не может встречаться в идентификаторе
    Invalid,
}

/// может-ли кодпоинт начинать идентификатор?
///
/// правила UAX #31: XID_Start, плюс нижнее подчёркивание,
/// которое Python разрешает в первой позиции
#[inline]
pub fn is_identifier_start(code: char) -> bool
{
    code == '_' || code.is_xid_start()
}

/// может-ли кодпоинт продолжать идентификатор? (XID_Continue)
#[inline]
pub fn is_identifier_continue(code: char) -> bool
{
    code.is_xid_continue()
}

/// классифицировать кодпоинт
///
/// XID_Start входит в XID_Continue, поэтому стартовый кодпоинт
/// всегда допустим и в продолжении идентификатора
pub fn classify(code: char) -> IdentifierClass
{
    match (is_identifier_start(code), is_identifier_continue(code)) {
        (true, _) => IdentifierClass::Start,
        (false, true) => IdentifierClass::ContinueOnly,
        (false, false) => IdentifierClass::Invalid,
    }
}

use unicode_identifiers::character_name;
use unicode_identifiers::characters;
use unicode_identifiers::classify;
use unicode_identifiers::nfkc;
use unicode_identifiers::is_identifier_continue;
use unicode_identifiers::is_identifier_start;
use unicode_identifiers::normalization_note;
use unicode_identifiers::scalar_values;
use unicode_identifiers::IdentifierClass;
use unicode_identifiers::CONTINUE_ONLY_CHARACTERS;
use unicode_identifiers::START_CHARACTERS;

/// базовые сценарии: буквы, цифры, подчёркивание, математические символы
#[test]
fn ascii_scenarios()
{
    assert_eq!(classify('a'), IdentifierClass::Start);
    assert_eq!(classify('A'), IdentifierClass::Start);
    assert_eq!(classify('_'), IdentifierClass::Start);

    assert_eq!(classify('0'), IdentifierClass::ContinueOnly);
    assert_eq!(classify('٠'), IdentifierClass::ContinueOnly);

    assert_eq!(classify('∫'), IdentifierClass::Invalid);
    assert_eq!(classify(' '), IdentifierClass::Invalid);
    assert_eq!(classify('|'), IdentifierClass::Invalid);
}

/// классы попарно не пересекаются и покрывают всё кодовое пространство
#[test]
fn classes_are_disjoint_and_exhaustive()
{
    for code in scalar_values() {
        match classify(code) {
            IdentifierClass::Start => {
                assert!(is_identifier_start(code), "U+{:04X}", code as u32);
            }
            IdentifierClass::ContinueOnly => {
                assert!(!is_identifier_start(code), "U+{:04X}", code as u32);
                assert!(is_identifier_continue(code), "U+{:04X}", code as u32);
            }
            IdentifierClass::Invalid => {
                assert!(!is_identifier_start(code), "U+{:04X}", code as u32);
                assert!(!is_identifier_continue(code), "U+{:04X}", code as u32);
            }
        }
    }
}

/// стартовый кодпоинт, повторённый любое количество раз - корректный идентификатор,
/// то есть каждый стартовый кодпоинт допустим и в продолжении
#[test]
fn start_characters_are_also_continue()
{
    for codepoint in START_CHARACTERS.iter() {
        assert!(
            is_identifier_continue(codepoint.character),
            "U+{:04X} допустим в начале идентификатора, но не в продолжении",
            codepoint.code()
        );
    }
}

/// таблицы отсортированы по возрастанию кодпоинтов и согласованы с классификатором
#[test]
fn tables_are_sorted_and_consistent()
{
    for table in [START_CHARACTERS.as_slice(), CONTINUE_ONLY_CHARACTERS.as_slice()] {
        assert!(table.windows(2).all(|pair| pair[0].code() < pair[1].code()));

        for codepoint in table {
            assert_eq!(classify(codepoint.character), codepoint.class);
        }
    }
}

/// повторный обход кодового пространства считается заново
/// и совпадает с лениво построенными таблицами
#[test]
fn tables_are_recomputed()
{
    assert_eq!(characters(IdentifierClass::Start), *START_CHARACTERS);
    assert_eq!(characters(IdentifierClass::ContinueOnly), *CONTINUE_ONLY_CHARACTERS);
}

/// порядок величин размеров таблиц стабилен между версиями Unicode
#[test]
fn table_sizes()
{
    assert!((120_000 .. 200_000).contains(&START_CHARACTERS.len()));
    assert!((2_000 .. 10_000).contains(&CONTINUE_ONLY_CHARACTERS.len()));
}

/// обход кодового пространства не содержит суррогатных пар
#[test]
fn scalar_values_skip_surrogates()
{
    assert_eq!(scalar_values().count(), 0x110000 - 0x800);

    let mut previous = None;

    for code in scalar_values() {
        if let Some(previous) = previous {
            assert!(previous < code as u32);
        }

        previous = Some(code as u32);
    }
}

/// µ (U+00B5) - стартовый кодпоинт, NFKC-нормализация переводит его в μ (U+03BC)
#[test]
fn micro_sign_normalization()
{
    assert_eq!(classify('µ'), IdentifierClass::Start);

    let note = normalization_note('µ').unwrap();

    assert_eq!(note.replacement, "μ");
    assert_eq!(note.codes(), "U+03BC");
    assert_eq!(note.names(), "GREEK SMALL LETTER MU");

    assert!(normalization_note('a').is_none());
    assert!(normalization_note('_').is_none());
}

/// NFKC-нормализация и названия символов, на которых построены примечания
#[test]
fn nfkc_and_character_names()
{
    assert_eq!(nfkc('a'), "a");
    assert_eq!(nfkc('µ'), "μ");
    assert_eq!(nfkc('ﬁ'), "fi");

    assert_eq!(character_name('0').as_deref(), Some("DIGIT ZERO"));
    assert_eq!(character_name('∫').as_deref(), Some("INTEGRAL"));
    assert_eq!(character_name('ﬁ').as_deref(), Some("LATIN SMALL LIGATURE FI"));
}

use unicode_identifiers::classify;
use unicode_identifiers::scalar_values;
use unicode_identifiers::unicode_version;
use unicode_identifiers::IdentifierClass;

/// сколько кодпоинтов допустимо в идентификаторах?
fn main()
{
    let mut start = 0;
    let mut continue_only = 0;

    for code in scalar_values() {
        match classify(code) {
            IdentifierClass::Start => start += 1,
            IdentifierClass::ContinueOnly => continue_only += 1,
            IdentifierClass::Invalid => (),
        }
    }

    println!("\nUnicode {}", unicode_version());
    println!("стартовых кодпоинтов: {}, только продолжающих: {}\n", start, continue_only);
}

/*

результат (Unicode 14.0.0):

стартовых кодпоинтов: 131975, только продолжающих: 3078

*/

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::exit;

use unicode_identifiers_prepare::output;
use unicode_identifiers_prepare::tables;

/// сгенерировать обе таблицы заново
///
/// единственный аргумент (опциональный) - директория для результата, по умолчанию docs
fn main()
{
    let dir = match env::args().nth(1) {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from("docs"),
    };

    if let Err(error) = fs::create_dir_all(&dir) {
        eprintln!("не удалось создать директорию {}: {}", dir.display(), error);
        exit(1);
    }

    for table in [tables::start(), tables::continue_only()] {
        match output::publish(&table, &dir) {
            Ok(path) => println!("записано: {}", path.display()),
            Err(error) => {
                eprintln!(
                    "не удалось записать {}.md: {}",
                    dir.join(table.slug).display(),
                    error
                );
                exit(1);
            }
        }

        output::stats::print(&table);
    }
}

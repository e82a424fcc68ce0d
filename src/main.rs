use std::error::Error;

use stringprops::{parse_query, StringStore};

fn main() -> Result<(), Box<dyn Error>> {
    let store = StringStore::new();

    for value in ["Race car", "hello world", "level", "step on no pets"] {
        let record = store.insert(value)?;
        println!(
            "{:>16}  len={:<3} words={} palindrome={} fingerprint={}",
            format!("{value:?}"),
            record.properties.length,
            record.properties.word_count,
            record.properties.is_palindrome,
            &record.id[..12],
        );
    }

    let query = "palindromes longer than 5 characters";
    let filters = parse_query(query)?;
    println!("\nquery: {query:?} -> {filters:?}");
    for hit in store.filter(&filters) {
        println!("  match: {:?}", hit.value);
    }

    Ok(())
}

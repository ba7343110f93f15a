//! Interactive query console
//!
//! A minimal line-oriented loop over the built index. Results print as
//! URLs, capped at a handful per query to keep output readable.

use crate::search::index::SearchIndex;
use crate::Result;
use std::io::{self, BufRead, Write};

/// Maximum number of URLs printed per query
const MAX_RESULTS: usize = 5;

/// Runs the query loop until EOF or an `exit` command
///
/// # Arguments
///
/// * `index` - The populated search index
/// * `urls` - Document list; position is the document id
pub fn run_console(index: &SearchIndex, urls: &[String]) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    loop {
        print!("query> ");
        stdout.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let query = line.trim();
        if query == "exit" {
            break;
        }
        if query.is_empty() {
            continue;
        }

        let matches = index.query(query);
        println!("Found: {} docs.", matches.len());
        for doc_id in matches.iter().take(MAX_RESULTS) {
            if let Some(url) = urls.get(*doc_id as usize) {
                println!("{}", url);
            }
        }
    }

    Ok(())
}

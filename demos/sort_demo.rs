//! Interactive demo: pick a canned list and see it in natural order.
//!
//! Run with: `cargo run --example sort_demo`

use natseq::sorted;
use std::io::{self, BufRead, Write};

fn test_case(id: u32) -> Option<Vec<&'static str>> {
    let list = match id {
        // numbers
        1 => vec!["10", ".2", "-1", "-2.4", "2"],
        // dates
        2 => vec!["2017-01-01", "2016/10/10", "2016-10-12"],
        // alphabetic
        3 => vec!["Apple", "Watermelon", "bacon"],
        // mix, consistent signatures
        4 => vec!["abc123", "def45", "abc45"],
        5 => vec![
            "started on 2016-01-02",
            "ended on 2017-01-05",
            "Ended on 2016-01-02",
            "ended ON 2017-02-05",
        ],
        // mix, inconsistent signatures
        6 => vec![
            "Valentine 2017-02-14",
            "a200",
            "a100",
            "abcd 2016/01/01",
            "bacon256",
            "def45",
            "321apple",
            "2017/01/23 special",
            "20Watermelon",
        ],
        7 => vec![
            "Valentine 2017/02/14 200",
            "2017/03/14 is Valentine",
            "Ended 2017/02/15 300",
        ],
        8 => vec!["abc 123", "abc", "abc 123 2017/02/23"],
        _ => return None,
    };
    Some(list)
}

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Choose test case [1-8] (0 to quit): ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let choice: u32 = match line.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                println!("not a number: {}", line.trim());
                continue;
            }
        };
        if choice == 0 {
            break;
        }

        let Some(list) = test_case(choice) else {
            println!("no such test case: {choice}");
            continue;
        };

        println!("before: {list:?}");
        match sorted(list) {
            Ok(after) => println!("after:  {after:?}"),
            Err(err) => println!("error:  {err}"),
        }
    }

    Ok(())
}

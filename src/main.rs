use heapview::heap::{HeapEngine, HeapMode};
use heapview::input::parse_values;
use heapview::render::{render_tree, TreeDrawingParams};
use heapview::Value;

use std::io::{self, BufRead, Write};

fn main() {
    env_logger::init();

    let mut engine: HeapEngine<Value> = HeapEngine::new(HeapMode::Min);
    let params = TreeDrawingParams::new();

    println!("heapview: insert <n>[,<n>...] | toggle | undo | redo | print | quit");
    prompt();
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let line = line.trim();
        let (command, rest) = match line.find(char::is_whitespace) {
            Some(at) => (&line[..at], line[at..].trim_start()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "insert" | "i" => match parse_values(rest) {
                Ok(values) => {
                    // One value goes through insert, a list through
                    // insert_many so it undoes as one batch.
                    if values.len() == 1 {
                        engine.insert(values[0]);
                    } else {
                        engine.insert_many(&values);
                    }
                    show(&engine, &params);
                }
                Err(err) => println!("error: {}", err),
            },
            "toggle" | "t" => {
                engine.toggle_mode();
                show(&engine, &params);
            }
            "undo" | "u" => {
                if engine.can_undo() {
                    engine.undo();
                    show(&engine, &params);
                } else {
                    println!("nothing to undo");
                }
            }
            "redo" | "r" => {
                if engine.can_redo() {
                    engine.redo();
                    show(&engine, &params);
                } else {
                    println!("nothing to redo");
                }
            }
            "print" | "p" => show(&engine, &params),
            "quit" | "q" => break,
            other => println!("unknown command: {:?}", other),
        }
        prompt();
    }
}

fn show(engine: &HeapEngine<Value>, params: &TreeDrawingParams) {
    println!("{:?}", engine);
    let drawing = render_tree(engine.elements(), params);
    if !drawing.is_empty() {
        print!("{}", drawing);
    }
    println!(
        "undo: {}  redo: {}",
        available(engine.can_undo()),
        available(engine.can_redo())
    );
}

fn available(yes: bool) -> &'static str {
    if yes {
        "available"
    } else {
        "-"
    }
}

fn prompt() {
    print!("> ");
    drop(io::stdout().flush());
}

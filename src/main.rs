use std::{env, fs::read_to_string, io, path::PathBuf, process, time::Instant};

use dojo::{format_error, parser::parser::parse, repl};

const DOJO_LOGO: &str = r"
   ____    ___       _   ___
  |  _ \  / _ \     | | / _ \
  | | | || | | | _  | || | | |
  | |_| || |_| || |_| || |_| |
  |____/  \___/  \___/  \___/
";

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1) {
        Some(file_path) => parse_file(PathBuf::from(file_path)),
        None => {
            let user = env::var("USER")
                .or_else(|_| env::var("USERNAME"))
                .unwrap_or_else(|_| String::from("there"));

            println!("{}", DOJO_LOGO);
            println!("Hello {}! This is the Dojo programming language!", user);
            println!("Feel free to type in commands");

            repl::start(io::stdin().lock(), io::stdout().lock())
        }
    }
}

fn parse_file(path: PathBuf) -> io::Result<()> {
    let source = read_to_string(&path)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    let start = Instant::now();
    let (program, errors) = parse(source.clone(), file_name);
    println!("Parsed in {:?}", start.elapsed());

    if errors.is_empty() {
        println!("{}", program);
        return Ok(());
    }

    for error in &errors {
        eprintln!("{}\n", format_error(error, &source));
    }
    process::exit(1);
}
